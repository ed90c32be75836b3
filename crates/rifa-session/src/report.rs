use rifa_core::model::Entry;
use rifa_core::store::StoreError;

/// Result of a search: direct matches, or (when there were none) the
/// ranked alternative endings.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub matches: Vec<Entry>,
    pub suggestions: Vec<String>,
}

/// Aggregate result of a bulk import. Per-unit failures are collected
/// here rather than aborting the run.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub collections_created: usize,
    pub entries_added: usize,
    /// Malformed input lines dropped by the parser.
    pub skipped_lines: usize,
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// One store operation that failed during import.
#[derive(Debug, Clone)]
pub struct ImportFailure {
    pub collection: String,
    /// The value that failed to import, `None` when the collection itself
    /// could not be created.
    pub value: Option<String>,
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Nothing to import: no well-formed record survived parsing.
    #[error("no records to import")]
    EmptyInput,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Nothing to export, surfaced distinctly rather than writing an
    /// empty file.
    #[error("no data to export")]
    NoData,

    #[error(transparent)]
    Store(#[from] StoreError),
}
