//! Bidirectional string interning table.
//!
//! Maps arbitrary strings to dense integer IDs and back for compact
//! storage of repetitive values. IDs are issued in insertion order from a
//! configurable origin and are never reused or reassigned for the
//! lifetime of the table.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::snapshot::{SnapshotError, TableSnapshot};

/// Interned string ID (u32 for compact storage and fast hashing).
pub type StrId = u32;

/// Errors raised by failing lookups.
///
/// These are the only failures the table produces; every other operation
/// either succeeds or interns.
#[derive(Error, Debug, Clone)]
pub enum InternError {
    #[error("String not interned: {0:?}")]
    StringNotFound(String),
    #[error("Unknown string ID: {0}")]
    IdNotFound(StrId),
}

/// String table mapping strings to integer IDs and back.
///
/// The two maps are exact inverses at all times: every entry is written
/// to both directions before anything else can observe it.
#[derive(Debug, Clone)]
pub struct InternTable {
    str_to_id: FxHashMap<String, StrId>,
    id_to_str: FxHashMap<StrId, String>,
    next_id: StrId,
    origin: StrId,
}

impl InternTable {
    /// Create an empty table issuing IDs from 0.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty table with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            str_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            id_to_str: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            next_id: 0,
            origin: 0,
        }
    }

    /// Create an empty table whose first issued ID is `origin`.
    pub fn with_origin(origin: StrId) -> Self {
        let mut table = Self::with_capacity(0);
        table.next_id = origin;
        table.origin = origin;
        table
    }

    /// Rebuild a table from a snapshot, bypassing the intern path.
    ///
    /// Entries keep their exported IDs, gaps included; the next ID issued
    /// is one past the highest entry, or the snapshot's origin when empty.
    /// Fails if the snapshot repeats an ID or a string, since either would
    /// break the inverse-map invariant, and on an entry at `StrId::MAX`,
    /// which no table ever issues.
    pub fn from_snapshot(snapshot: &TableSnapshot) -> Result<Self, SnapshotError> {
        let mut table = Self::with_capacity(snapshot.entries.len());
        table.next_id = snapshot.origin;
        table.origin = snapshot.origin;
        for (id, s) in &snapshot.entries {
            if table.id_to_str.insert(*id, s.clone()).is_some() {
                return Err(SnapshotError::DuplicateId(*id));
            }
            if table.str_to_id.insert(s.clone(), *id).is_some() {
                return Err(SnapshotError::DuplicateString(s.clone()));
            }
            if *id >= table.next_id {
                table.next_id = match id.checked_add(1) {
                    Some(next) => next,
                    None => return Err(SnapshotError::IdRangeExhausted(*id)),
                };
            }
        }
        Ok(table)
    }

    /// Intern a string, returning its ID.
    /// If already interned, returns the existing ID.
    pub fn intern(&mut self, s: &str) -> StrId {
        self.intern_with(s, |_| {})
    }

    /// Intern a string, invoking `on_create` if this call created the entry.
    ///
    /// The callback runs exactly once per distinct string, after both map
    /// directions contain the new entry and before the ID is returned.
    /// Repeat interns of the same string never invoke it again.
    ///
    /// Panics if the ID range is exhausted; `StrId::MAX` is reserved and
    /// never issued.
    pub fn intern_with(&mut self, s: &str, on_create: impl FnOnce(StrId)) -> StrId {
        if let Some(&id) = self.str_to_id.get(s) {
            return id;
        }
        let id = self.next_id;
        // StrId::MAX stays reserved so the counter cannot wrap and reissue
        self.next_id = match id.checked_add(1) {
            Some(next) => next,
            None => panic!("string ID space exhausted"),
        };
        self.str_to_id.insert(s.to_string(), id);
        self.id_to_str.insert(id, s.to_string());
        on_create(id);
        id
    }

    /// Get the ID for an interned string.
    #[inline]
    pub fn id_of(&self, s: &str) -> Result<StrId, InternError> {
        self.str_to_id
            .get(s)
            .copied()
            .ok_or_else(|| InternError::StringNotFound(s.to_string()))
    }

    /// Get the string for an issued ID.
    #[inline]
    pub fn string_of(&self, id: StrId) -> Result<&str, InternError> {
        self.id_to_str
            .get(&id)
            .map(|s| s.as_str())
            .ok_or(InternError::IdNotFound(id))
    }

    /// Check whether a string has been interned.
    #[inline]
    pub fn contains_str(&self, s: &str) -> bool {
        self.str_to_id.contains_key(s)
    }

    /// Check whether an ID has been issued.
    #[inline]
    pub fn contains_id(&self, id: StrId) -> bool {
        self.id_to_str.contains_key(&id)
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.str_to_id.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.str_to_id.is_empty()
    }

    /// First ID this table issues.
    #[inline]
    pub fn origin(&self) -> StrId {
        self.origin
    }

    /// All issued IDs, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = StrId> + '_ {
        self.id_to_str.keys().copied()
    }

    /// All `(ID, string)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (StrId, &str)> + '_ {
        self.id_to_str.iter().map(|(&id, s)| (id, s.as_str()))
    }

    /// Export the table contents, entries ascending by ID.
    pub fn snapshot(&self) -> TableSnapshot {
        let mut entries: Vec<(StrId, String)> = self
            .id_to_str
            .iter()
            .map(|(&id, s)| (id, s.clone()))
            .collect();
        entries.sort_by_key(|&(id, _)| id);
        TableSnapshot {
            origin: self.origin,
            entries,
        }
    }
}

impl Default for InternTable {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
