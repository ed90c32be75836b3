//! Store-facing orchestration for one owner's account.
//!
//! `Session` binds a `Store` to the `OwnerId` it acts for and runs the
//! flows the core stays out of: search with the suggestion fallback, bulk
//! import with best-effort per-collection commits, and export back to the
//! flat text format.

mod export;
mod import;
mod report;
mod search;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use rifa_core::model::OwnerId;
use rifa_core::store::Store;

pub use report::{ExportError, ImportError, ImportFailure, ImportReport, SearchOutcome};

pub struct Session {
    store: Arc<dyn Store>,
    owner: OwnerId,
}

impl Session {
    pub fn new(store: Arc<dyn Store>, owner: OwnerId) -> Self {
        Self { store, owner }
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }
}
