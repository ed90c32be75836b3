//! Core data model: collections ("rifas") and the numeric-string entries
//! they contain.
//!
//! Ids are assigned by the store; the rest of the crate only carries them
//! around to address update/delete targets. Optional fields are real
//! `Option`s — absence is a state, never an empty-string sentinel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque collection id, assigned by the store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CollectionId(pub u64);

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque entry id, assigned by the store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifies the account that owns a set of collections. Every store
/// operation takes the owner explicitly; there is no ambient user context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub String);

impl OwnerId {
    pub fn new(owner: impl Into<String>) -> Self {
        Self(owner.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One raffle number. `value` is an opaque digit string — it usually parses
/// as an integer but is not required to, and duplicates within a collection
/// are legal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub value: String,
    pub label: Option<String>,
    pub note: Option<String>,
    /// Drawing status, set externally. The engine never computes winners.
    pub is_winner: bool,
    /// Epoch seconds of the draw, when known.
    pub drawn_at: Option<i64>,
}

/// Entry data handed to `Store::add_entry`; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub value: String,
    pub label: Option<String>,
    pub note: Option<String>,
    pub is_winner: bool,
    pub drawn_at: Option<i64>,
}

impl EntryDraft {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            note: None,
            is_winner: false,
            drawn_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionStatus {
    Active,
    Completed,
    Cancelled,
}

impl CollectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for CollectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown status: {0} (expected active, completed, or cancelled)")]
pub struct UnknownStatus(String);

impl FromStr for CollectionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A named group of entries.
///
/// `number_count` is a cached count maintained by the store for display.
/// It is advisory only — anything that needs a correct view of the entries
/// (ranges, searches) recomputes from `Store::list_entries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub description: Option<String>,
    pub status: CollectionStatus,
    pub number_count: u64,
}

/// Collection data handed to `Store::create_collection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDraft {
    pub name: String,
    pub description: Option<String>,
    pub status: CollectionStatus,
}

impl CollectionDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            status: CollectionStatus::Active,
        }
    }
}

/// Min/max over the entry values that parse as integers, from the live
/// entry list. Returns `None` when no value is numeric.
pub fn number_range(entries: &[Entry]) -> Option<(i64, i64)> {
    let mut numeric = entries
        .iter()
        .filter_map(|e| e.value.trim().parse::<i64>().ok());
    let first = numeric.next()?;
    let range = numeric.fold((first, first), |(lo, hi), n| (lo.min(n), hi.max(n)));
    Some(range)
}
