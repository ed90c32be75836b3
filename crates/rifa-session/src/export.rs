use rifa_core::bulk::{serialize_bulk, BulkGroup};
use rifa_core::model::CollectionId;
use rifa_core::settings::settings;
use time::Date;
use tracing::warn;

use crate::report::ExportError;
use crate::Session;

impl Session {
    /// Serialize one collection to the flat text format.
    pub fn export_collection(&self, collection: CollectionId) -> Result<String, ExportError> {
        let collection = self.store.get_collection(&self.owner, collection)?;
        let entries = self.store.list_entries(&self.owner, collection.id)?;
        if entries.is_empty() {
            return Err(ExportError::NoData);
        }
        let group = BulkGroup {
            name: collection.name,
            values: entries.into_iter().map(|e| e.value).collect(),
        };
        Ok(serialize_bulk(std::slice::from_ref(&group)))
    }

    /// Serialize the whole account, bucketed per collection name in
    /// creation order. A collection whose entries cannot be fetched is
    /// logged and skipped rather than failing the export.
    pub fn export_all(&self) -> Result<String, ExportError> {
        let collections = self.store.list_collections(&self.owner)?;
        let mut groups = Vec::with_capacity(collections.len());
        for collection in collections {
            let entries = match self.store.list_entries(&self.owner, collection.id) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(collection = %collection.name, error = %err, "export: skipping collection");
                    continue;
                }
            };
            if entries.is_empty() {
                continue;
            }
            groups.push(BulkGroup {
                name: collection.name,
                values: entries.into_iter().map(|e| e.value).collect(),
            });
        }
        let text = serialize_bulk(&groups);
        if text.is_empty() {
            return Err(ExportError::NoData);
        }
        Ok(text)
    }

    /// Date-stamped file name for a whole-account export, e.g.
    /// `todas_las_listas_2026-08-07.csv`.
    pub fn export_file_name(date: Date) -> String {
        format!("{}_{}.csv", settings().export.file_prefix, date)
    }
}
