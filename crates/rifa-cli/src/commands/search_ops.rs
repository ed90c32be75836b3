use std::path::Path;

use rifa_core::model::OwnerId;
use rifa_session::Session;

use super::{die, find_collection, open_store};

pub fn search(path: &Path, owner: &OwnerId, collection: &str, query: &str) {
    let store = open_store(path);
    let collection = find_collection(store.as_ref(), owner, collection);
    let session = Session::new(store, owner.clone());

    let outcome = die!(session.search(collection.id, query), "Error searching: {}");
    if !outcome.matches.is_empty() {
        for entry in &outcome.matches {
            match &entry.label {
                Some(label) => println!("{}\t{}", entry.value, label),
                None => println!("{}", entry.value),
            }
        }
        println!("---");
        println!("{} matches", outcome.matches.len());
        return;
    }

    println!("No numbers ending in \"{query}\".");
    if !outcome.suggestions.is_empty() {
        println!(
            "As an alternative, you have numbers ending in: {}",
            outcome.suggestions.join(", ")
        );
    }
}
