use rifa_core::endings::{filter_entries, suggest_endings};
use rifa_core::model::{number_range, CollectionId};
use rifa_core::store::StoreError;

use crate::report::SearchOutcome;
use crate::Session;

impl Session {
    /// Direct terminal-digit filter over one collection; falls back to
    /// similar-ending suggestions when nothing matches a non-empty query.
    pub fn search(
        &self,
        collection: CollectionId,
        query: &str,
    ) -> Result<SearchOutcome, StoreError> {
        let query = query.trim();
        let entries = self.store.list_entries(&self.owner, collection)?;
        let matches = filter_entries(&entries, query);
        let suggestions = if matches.is_empty() && !query.is_empty() {
            suggest_endings(query, &entries)
        } else {
            Vec::new()
        };
        Ok(SearchOutcome {
            matches,
            suggestions,
        })
    }

    /// Min/max of the collection's numeric values, recomputed from the
    /// live entry list (the cached `number_count` is display-only).
    pub fn number_range(
        &self,
        collection: CollectionId,
    ) -> Result<Option<(i64, i64)>, StoreError> {
        let entries = self.store.list_entries(&self.owner, collection)?;
        Ok(number_range(&entries))
    }
}
