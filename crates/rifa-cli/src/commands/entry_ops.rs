use std::path::Path;
use std::process;

use rifa_core::model::{CollectionId, Entry, EntryDraft, EntryId, OwnerId};
use rifa_core::store::Store;
use time::OffsetDateTime;

use super::{die, find_collection, open_store, save_store};

pub fn add(
    path: &Path,
    owner: &OwnerId,
    collection: &str,
    value: &str,
    label: Option<String>,
    note: Option<String>,
) {
    let store = open_store(path);
    let collection = find_collection(store.as_ref(), owner, collection);
    let draft = EntryDraft {
        value: value.to_string(),
        label,
        note,
        is_winner: false,
        drawn_at: None,
    };
    let entry = die!(
        store.add_entry(owner, collection.id, draft),
        "Error adding number: {}"
    );
    save_store(&store, path);
    println!("Added {} to '{}' (id {})", entry.value, collection.name, entry.id);
}

pub fn remove(path: &Path, owner: &OwnerId, collection: &str, entry_id: u64) {
    let store = open_store(path);
    let collection = find_collection(store.as_ref(), owner, collection);
    die!(
        store.delete_entry(owner, collection.id, EntryId(entry_id)),
        "Error removing number: {}"
    );
    save_store(&store, path);
    println!("Removed number {entry_id} from '{}'", collection.name);
}

pub fn list(path: &Path, owner: &OwnerId, collection: &str) {
    let store = open_store(path);
    let collection = find_collection(store.as_ref(), owner, collection);
    let entries = die!(
        store.list_entries(owner, collection.id),
        "Error listing numbers: {}"
    );
    if entries.is_empty() {
        println!("(empty)");
        return;
    }
    for entry in &entries {
        let mut line = format!("{}\t{}", entry.id, entry.value);
        if let Some(label) = &entry.label {
            line.push('\t');
            line.push_str(label);
        }
        if entry.is_winner {
            line.push_str("\t[winner]");
        }
        println!("{line}");
    }
    println!("---");
    println!("{} numbers", entries.len());
}

pub fn mark_winner(path: &Path, owner: &OwnerId, collection: &str, entry_id: u64) {
    let drawn_at = Some(OffsetDateTime::now_utc().unix_timestamp());
    set_winner(path, owner, collection, entry_id, true, drawn_at);
}

pub fn clear_winner(path: &Path, owner: &OwnerId, collection: &str, entry_id: u64) {
    set_winner(path, owner, collection, entry_id, false, None);
}

fn set_winner(
    path: &Path,
    owner: &OwnerId,
    collection: &str,
    entry_id: u64,
    is_winner: bool,
    drawn_at: Option<i64>,
) {
    let store = open_store(path);
    let collection = find_collection(store.as_ref(), owner, collection);
    let entry = find_entry(store.as_ref(), owner, &collection.name, collection.id, entry_id);

    let draft = EntryDraft {
        value: entry.value,
        label: entry.label,
        note: entry.note,
        is_winner,
        drawn_at,
    };
    let updated = die!(
        store.update_entry(owner, collection.id, entry.id, draft),
        "Error updating number: {}"
    );
    save_store(&store, path);
    if updated.is_winner {
        println!("Marked {} as winner", updated.value);
    } else {
        println!("Cleared winner flag on {}", updated.value);
    }
}

fn find_entry(
    store: &dyn Store,
    owner: &OwnerId,
    collection_name: &str,
    collection: CollectionId,
    entry_id: u64,
) -> Entry {
    let entries = die!(
        store.list_entries(owner, collection),
        "Error listing numbers: {}"
    );
    match entries.into_iter().find(|e| e.id == EntryId(entry_id)) {
        Some(entry) => entry,
        None => {
            eprintln!("No number with id {entry_id} in '{collection_name}'");
            process::exit(1);
        }
    }
}
