use std::fs;
use std::path::Path;
use std::process;

use rifa_core::model::OwnerId;
use rifa_session::Session;
use time::OffsetDateTime;

use super::{die, find_collection, open_store, save_store};

pub fn import(path: &Path, owner: &OwnerId, file: &str) {
    let text = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let store = open_store(path);
    let session = Session::new(store.clone(), owner.clone());

    let report = match session.import_bulk(&text) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };
    save_store(&store, path);

    println!(
        "Imported {} numbers across {} collections",
        report.entries_added, report.collections_created
    );
    if report.skipped_lines > 0 {
        println!("Skipped {} malformed lines", report.skipped_lines);
    }
    for failure in &report.failures {
        match &failure.value {
            Some(value) => eprintln!(
                "Failed to add {} to '{}': {}",
                value, failure.collection, failure.error
            ),
            None => eprintln!(
                "Failed to create '{}': {}",
                failure.collection, failure.error
            ),
        }
    }
}

pub fn export(
    path: &Path,
    owner: &OwnerId,
    collection: Option<&str>,
    output: Option<&str>,
) {
    let store = open_store(path);
    let session = Session::new(store.clone(), owner.clone());

    let result = match collection {
        Some(name) => {
            let collection = find_collection(store.as_ref(), owner, name);
            session.export_collection(collection.id)
        }
        None => session.export_all(),
    };
    let text = match result {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let file = match output {
        Some(file) => file.to_string(),
        None => Session::export_file_name(today()),
    };
    die!(fs::write(&file, text), "Error writing {file}: {}");
    println!("Exported to {file}");
}

fn today() -> time::Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
