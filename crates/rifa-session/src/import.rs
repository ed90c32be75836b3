use rifa_core::bulk::parse_bulk;
use rifa_core::model::{CollectionDraft, CollectionStatus, EntryDraft};
use tracing::{debug, warn};

use crate::report::{ImportError, ImportFailure, ImportReport};
use crate::Session;

impl Session {
    /// Import flat bulk text: one new collection per group, entries in
    /// input order.
    ///
    /// Best-effort by design: a collection that fails to create is
    /// recorded and skipped, an entry that fails to add is recorded and
    /// the rest of its group continues. Only a fully empty input (no
    /// well-formed record at all) is an error.
    pub fn import_bulk(&self, text: &str) -> Result<ImportReport, ImportError> {
        let parsed = parse_bulk(text);
        if parsed.is_empty() {
            return Err(ImportError::EmptyInput);
        }

        let mut report = ImportReport {
            skipped_lines: parsed.skipped_lines(),
            ..ImportReport::default()
        };

        for group in parsed.groups() {
            let draft = CollectionDraft {
                name: group.name.clone(),
                description: Some(format!(
                    "Lista importada con {} números",
                    group.values.len()
                )),
                status: CollectionStatus::Active,
            };
            let collection = match self.store.create_collection(&self.owner, draft) {
                Ok(collection) => collection,
                Err(err) => {
                    warn!(collection = %group.name, error = %err, "import: create failed");
                    report.failures.push(ImportFailure {
                        collection: group.name.clone(),
                        value: None,
                        error: err.to_string(),
                    });
                    continue;
                }
            };
            report.collections_created += 1;

            for value in &group.values {
                match self
                    .store
                    .add_entry(&self.owner, collection.id, EntryDraft::new(value.clone()))
                {
                    Ok(_) => report.entries_added += 1,
                    Err(err) => {
                        warn!(
                            collection = %group.name,
                            value = %value,
                            error = %err,
                            "import: add entry failed"
                        );
                        report.failures.push(ImportFailure {
                            collection: group.name.clone(),
                            value: Some(value.clone()),
                            error: err.to_string(),
                        });
                    }
                }
            }
        }

        debug!(
            collections = report.collections_created,
            entries = report.entries_added,
            skipped = report.skipped_lines,
            failures = report.failures.len(),
        );
        Ok(report)
    }
}
