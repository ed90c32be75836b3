pub mod bulk_ops;
pub mod collection_ops;
pub mod config_ops;
pub mod entry_ops;
pub mod search_ops;

use std::path::Path;
use std::process;
use std::sync::Arc;

use rifa_core::model::{Collection, OwnerId};
use rifa_core::store::{MemoryStore, Store};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            ::std::process::exit(1);
        })
    };
}

pub(crate) use die;

pub fn default_store_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    format!("{home}/.local/share/rifa/store.rifa")
}

pub(crate) fn open_store(path: &Path) -> Arc<MemoryStore> {
    Arc::new(die!(MemoryStore::open(path), "Error opening store: {}"))
}

pub(crate) fn save_store(store: &MemoryStore, path: &Path) {
    die!(store.save(path), "Error saving store: {}");
}

/// Resolve a collection by its (verbatim) name, exiting when absent.
pub(crate) fn find_collection(store: &dyn Store, owner: &OwnerId, name: &str) -> Collection {
    let collections = die!(
        store.list_collections(owner),
        "Error listing collections: {}"
    );
    match collections.into_iter().find(|c| c.name == name) {
        Some(collection) => collection,
        None => {
            eprintln!("No collection named '{name}'");
            process::exit(1);
        }
    }
}
