
use std::io;
use std::sync::Arc;

use rifa_core::model::{
    Collection, CollectionDraft, CollectionId, Entry, EntryDraft, EntryId, OwnerId,
};
use rifa_core::store::{MemoryStore, Store, StoreError};

use super::Session;

pub(super) fn owner() -> OwnerId {
    OwnerId::new("tester")
}

pub(super) fn session_with_store() -> (Session, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let session = Session::new(store.clone(), owner());
    (session, store)
}

pub(super) fn seed(
    store: &MemoryStore,
    owner: &OwnerId,
    name: &str,
    values: &[&str],
) -> CollectionId {
    let collection = store
        .create_collection(owner, CollectionDraft::new(name))
        .unwrap();
    for value in values {
        store
            .add_entry(owner, collection.id, EntryDraft::new(*value))
            .unwrap();
    }
    collection.id
}

/// Store double that fails selected operations, for exercising the
/// best-effort import/export paths.
#[derive(Default)]
pub(super) struct FlakyStore {
    inner: MemoryStore,
    /// Collection name whose creation fails.
    pub fail_create: Option<String>,
    /// Entry value whose insertion fails.
    pub fail_value: Option<String>,
}

fn simulated() -> StoreError {
    StoreError::Io(io::Error::other("simulated failure"))
}

impl Store for FlakyStore {
    fn create_collection(
        &self,
        owner: &OwnerId,
        draft: CollectionDraft,
    ) -> Result<Collection, StoreError> {
        if self.fail_create.as_deref() == Some(draft.name.as_str()) {
            return Err(simulated());
        }
        self.inner.create_collection(owner, draft)
    }

    fn list_collections(&self, owner: &OwnerId) -> Result<Vec<Collection>, StoreError> {
        self.inner.list_collections(owner)
    }

    fn get_collection(
        &self,
        owner: &OwnerId,
        id: CollectionId,
    ) -> Result<Collection, StoreError> {
        self.inner.get_collection(owner, id)
    }

    fn update_collection(
        &self,
        owner: &OwnerId,
        id: CollectionId,
        draft: CollectionDraft,
    ) -> Result<Collection, StoreError> {
        self.inner.update_collection(owner, id, draft)
    }

    fn delete_collection(&self, owner: &OwnerId, id: CollectionId) -> Result<(), StoreError> {
        self.inner.delete_collection(owner, id)
    }

    fn add_entry(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
        draft: EntryDraft,
    ) -> Result<Entry, StoreError> {
        if self.fail_value.as_deref() == Some(draft.value.as_str()) {
            return Err(simulated());
        }
        self.inner.add_entry(owner, collection, draft)
    }

    fn list_entries(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
    ) -> Result<Vec<Entry>, StoreError> {
        self.inner.list_entries(owner, collection)
    }

    fn update_entry(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
        id: EntryId,
        draft: EntryDraft,
    ) -> Result<Entry, StoreError> {
        self.inner.update_entry(owner, collection, id, draft)
    }

    fn delete_entry(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
        id: EntryId,
    ) -> Result<(), StoreError> {
        self.inner.delete_entry(owner, collection, id)
    }
}
