use std::path::Path;

use rifa_core::model::{CollectionDraft, CollectionStatus, OwnerId};
use rifa_core::store::Store;
use rifa_session::Session;

use super::{die, find_collection, open_store, save_store};

pub fn create(
    path: &Path,
    owner: &OwnerId,
    name: &str,
    description: Option<String>,
    status: &str,
) {
    let status: CollectionStatus = die!(status.parse(), "Error: {}");
    let store = open_store(path);
    let draft = CollectionDraft {
        name: name.to_string(),
        description,
        status,
    };
    let collection = die!(
        store.create_collection(owner, draft),
        "Error creating collection: {}"
    );
    save_store(&store, path);
    println!("Created '{}' (id {})", collection.name, collection.id);
}

pub fn list(path: &Path, owner: &OwnerId) {
    let store = open_store(path);
    let collections = die!(
        store.list_collections(owner),
        "Error listing collections: {}"
    );
    if collections.is_empty() {
        println!("(empty)");
        return;
    }
    for collection in &collections {
        println!(
            "{}\t{}\t{} numbers",
            collection.name, collection.status, collection.number_count
        );
    }
    println!("---");
    println!("{} collections", collections.len());
}

pub fn show(path: &Path, owner: &OwnerId, name: &str) {
    let store = open_store(path);
    let collection = find_collection(store.as_ref(), owner, name);
    let session = Session::new(store.clone(), owner.clone());

    let entries = die!(
        store.list_entries(owner, collection.id),
        "Error listing numbers: {}"
    );
    let winners = entries.iter().filter(|e| e.is_winner).count();

    println!("{} ({})", collection.name, collection.status);
    if let Some(description) = &collection.description {
        println!("{description}");
    }
    println!("{} numbers, {} winners", entries.len(), winners);
    let range = die!(session.number_range(collection.id), "Error: {}");
    if let Some((min, max)) = range {
        println!("Range: {min} - {max}");
    }
}

pub fn edit(
    path: &Path,
    owner: &OwnerId,
    name: &str,
    rename: Option<String>,
    description: Option<String>,
    status: Option<String>,
) {
    let store = open_store(path);
    let collection = find_collection(store.as_ref(), owner, name);

    let status = match status {
        Some(s) => die!(s.parse(), "Error: {}"),
        None => collection.status,
    };
    let draft = CollectionDraft {
        name: rename.unwrap_or(collection.name),
        description: description.or(collection.description),
        status,
    };
    let updated = die!(
        store.update_collection(owner, collection.id, draft),
        "Error updating collection: {}"
    );
    save_store(&store, path);
    println!("Updated '{}'", updated.name);
}

pub fn delete(path: &Path, owner: &OwnerId, name: &str) {
    let store = open_store(path);
    let collection = find_collection(store.as_ref(), owner, name);
    die!(
        store.delete_collection(owner, collection.id),
        "Error deleting collection: {}"
    );
    save_store(&store, path);
    println!("Deleted '{name}'");
}
