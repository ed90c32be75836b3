//! Owner-keyed storage for collections and their entries.
//!
//! `Store` is the narrow seam the rest of the engine talks through; every
//! operation takes the owner explicitly. `MemoryStore` is the shipped
//! implementation: a `RwLock`ed map with a binary snapshot format (RIFA)
//! on disk, so `add`/`delete` can be called while sessions hold a shared
//! reference.

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::model::{
    Collection, CollectionDraft, CollectionId, Entry, EntryDraft, EntryId, OwnerId,
};

const MAGIC: &[u8; 4] = b"RIFA";
const VERSION: u8 = 1;

/// Unified error type for store operations and snapshot I/O.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected RIFA)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("collection {0} not found")]
    CollectionNotFound(CollectionId),

    #[error("entry {0} not found")]
    EntryNotFound(EntryId),

    #[error("collection name must not be empty")]
    EmptyName,
}

/// Per-owner collection/entry CRUD. Ids are assigned here and nowhere
/// else. Deleting a collection deletes its entries (cascade is a store
/// contract, not engine logic).
pub trait Store: Send + Sync {
    fn create_collection(
        &self,
        owner: &OwnerId,
        draft: CollectionDraft,
    ) -> Result<Collection, StoreError>;

    /// Collections in creation order. An unknown owner simply has none.
    fn list_collections(&self, owner: &OwnerId) -> Result<Vec<Collection>, StoreError>;

    fn get_collection(
        &self,
        owner: &OwnerId,
        id: CollectionId,
    ) -> Result<Collection, StoreError>;

    /// Replace name/description/status. The cached entry count is kept.
    fn update_collection(
        &self,
        owner: &OwnerId,
        id: CollectionId,
        draft: CollectionDraft,
    ) -> Result<Collection, StoreError>;

    fn delete_collection(&self, owner: &OwnerId, id: CollectionId) -> Result<(), StoreError>;

    fn add_entry(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
        draft: EntryDraft,
    ) -> Result<Entry, StoreError>;

    /// Entries in insertion order.
    fn list_entries(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
    ) -> Result<Vec<Entry>, StoreError>;

    fn update_entry(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
        id: EntryId,
        draft: EntryDraft,
    ) -> Result<Entry, StoreError>;

    fn delete_entry(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
        id: EntryId,
    ) -> Result<(), StoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct CollectionRecord {
    collection: Collection,
    entries: Vec<Entry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct State {
    next_collection_id: u64,
    next_entry_id: u64,
    owners: HashMap<OwnerId, Vec<CollectionRecord>>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            next_collection_id: 1,
            next_entry_id: 1,
            owners: HashMap::new(),
        }
    }
}

impl State {
    fn records(&self, owner: &OwnerId) -> &[CollectionRecord] {
        self.owners.get(owner).map(Vec::as_slice).unwrap_or(&[])
    }

    fn record(
        &self,
        owner: &OwnerId,
        id: CollectionId,
    ) -> Result<&CollectionRecord, StoreError> {
        self.records(owner)
            .iter()
            .find(|r| r.collection.id == id)
            .ok_or(StoreError::CollectionNotFound(id))
    }

    fn record_mut(
        &mut self,
        owner: &OwnerId,
        id: CollectionId,
    ) -> Result<&mut CollectionRecord, StoreError> {
        self.owners
            .get_mut(owner)
            .and_then(|records| records.iter_mut().find(|r| r.collection.id == id))
            .ok_or(StoreError::CollectionNotFound(id))
    }
}

fn checked_name(draft: &CollectionDraft) -> Result<(), StoreError> {
    if draft.name.trim().is_empty() {
        return Err(StoreError::EmptyName);
    }
    Ok(())
}

pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }

    /// Serialize to bytes (RIFA format): magic, version, crc32 of the
    /// bincode body, body.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        let state = self.state.read().unwrap();
        let body = bincode::serialize(&*state).map_err(StoreError::Serialize)?;
        let mut buf = Vec::with_capacity(9 + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&crc32fast::hash(&body).to_le_bytes());
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (RIFA format).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        if bytes.len() < 9 {
            return Err(StoreError::InvalidHeader);
        }
        if &bytes[0..4] != MAGIC {
            return Err(StoreError::InvalidMagic);
        }
        if bytes[4] != VERSION {
            return Err(StoreError::UnsupportedVersion(bytes[4]));
        }
        let expected = u32::from_le_bytes([bytes[5], bytes[6], bytes[7], bytes[8]]);
        let body = &bytes[9..];
        if crc32fast::hash(body) != expected {
            return Err(StoreError::ChecksumMismatch);
        }
        let state: State = bincode::deserialize(body).map_err(StoreError::Deserialize)?;
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Open from file, returning an empty store if the file doesn't exist.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        match fs::read(path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn create_collection(
        &self,
        owner: &OwnerId,
        draft: CollectionDraft,
    ) -> Result<Collection, StoreError> {
        checked_name(&draft)?;
        let mut state = self.state.write().unwrap();
        let id = CollectionId(state.next_collection_id);
        state.next_collection_id += 1;
        let collection = Collection {
            id,
            name: draft.name,
            description: draft.description,
            status: draft.status,
            number_count: 0,
        };
        state.owners.entry(owner.clone()).or_default().push(CollectionRecord {
            collection: collection.clone(),
            entries: Vec::new(),
        });
        Ok(collection)
    }

    fn list_collections(&self, owner: &OwnerId) -> Result<Vec<Collection>, StoreError> {
        let state = self.state.read().unwrap();
        Ok(state
            .records(owner)
            .iter()
            .map(|r| r.collection.clone())
            .collect())
    }

    fn get_collection(
        &self,
        owner: &OwnerId,
        id: CollectionId,
    ) -> Result<Collection, StoreError> {
        let state = self.state.read().unwrap();
        Ok(state.record(owner, id)?.collection.clone())
    }

    fn update_collection(
        &self,
        owner: &OwnerId,
        id: CollectionId,
        draft: CollectionDraft,
    ) -> Result<Collection, StoreError> {
        checked_name(&draft)?;
        let mut state = self.state.write().unwrap();
        let record = state.record_mut(owner, id)?;
        record.collection.name = draft.name;
        record.collection.description = draft.description;
        record.collection.status = draft.status;
        Ok(record.collection.clone())
    }

    fn delete_collection(&self, owner: &OwnerId, id: CollectionId) -> Result<(), StoreError> {
        let mut state = self.state.write().unwrap();
        let records = state
            .owners
            .get_mut(owner)
            .ok_or(StoreError::CollectionNotFound(id))?;
        let before = records.len();
        records.retain(|r| r.collection.id != id);
        if records.len() == before {
            return Err(StoreError::CollectionNotFound(id));
        }
        Ok(())
    }

    fn add_entry(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
        draft: EntryDraft,
    ) -> Result<Entry, StoreError> {
        let mut state = self.state.write().unwrap();
        let id = EntryId(state.next_entry_id);
        state.next_entry_id += 1;
        let record = state.record_mut(owner, collection)?;
        let entry = Entry {
            id,
            value: draft.value,
            label: draft.label,
            note: draft.note,
            is_winner: draft.is_winner,
            drawn_at: draft.drawn_at,
        };
        record.entries.push(entry.clone());
        record.collection.number_count = record.entries.len() as u64;
        Ok(entry)
    }

    fn list_entries(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
    ) -> Result<Vec<Entry>, StoreError> {
        let state = self.state.read().unwrap();
        Ok(state.record(owner, collection)?.entries.clone())
    }

    fn update_entry(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
        id: EntryId,
        draft: EntryDraft,
    ) -> Result<Entry, StoreError> {
        let mut state = self.state.write().unwrap();
        let record = state.record_mut(owner, collection)?;
        let entry = record
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::EntryNotFound(id))?;
        entry.value = draft.value;
        entry.label = draft.label;
        entry.note = draft.note;
        entry.is_winner = draft.is_winner;
        entry.drawn_at = draft.drawn_at;
        Ok(entry.clone())
    }

    fn delete_entry(
        &self,
        owner: &OwnerId,
        collection: CollectionId,
        id: EntryId,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().unwrap();
        let record = state.record_mut(owner, collection)?;
        let before = record.entries.len();
        record.entries.retain(|e| e.id != id);
        if record.entries.len() == before {
            return Err(StoreError::EntryNotFound(id));
        }
        record.collection.number_count = record.entries.len() as u64;
        Ok(())
    }
}
