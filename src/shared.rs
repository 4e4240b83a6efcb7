//! Thread-safe shared handle over an interning table.
//!
//! The handle is cloned and passed to whoever needs the table; there is
//! no process-wide instance. Every operation takes the lock for its full
//! duration, so lookup-or-insert is atomic across threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::codec::{StringDecoder, StringEncoder};
use crate::snapshot::TableSnapshot;
use crate::table::{InternError, InternTable, StrId};

/// Clonable handle to a mutex-guarded `InternTable`.
///
/// All clones address the same table. Two threads racing to intern the
/// same new string observe a single insertion: one of them creates the
/// entry and runs the `on_create` callback, the other blocks until the
/// callback completes and then receives the same ID.
#[derive(Debug, Clone, Default)]
pub struct SharedInternTable {
    inner: Arc<Mutex<InternTable>>,
}

impl SharedInternTable {
    /// Create a handle over an empty table issuing IDs from 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing table, e.g. one restored from a snapshot.
    pub fn from_table(table: InternTable) -> Self {
        Self {
            inner: Arc::new(Mutex::new(table)),
        }
    }

    /// Intern a string, returning its ID.
    pub fn intern(&self, s: &str) -> StrId {
        self.inner.lock().intern(s)
    }

    /// Intern a string, invoking `on_create` if this call created the entry.
    ///
    /// The callback runs inside the critical section, so concurrent calls
    /// for the same string block until it completes. It must not call back
    /// into this table.
    pub fn intern_with(&self, s: &str, on_create: impl FnOnce(StrId)) -> StrId {
        self.inner.lock().intern_with(s, on_create)
    }

    /// Get the ID for an interned string.
    pub fn id_of(&self, s: &str) -> Result<StrId, InternError> {
        self.inner.lock().id_of(s)
    }

    /// Get the string for an issued ID.
    pub fn string_of(&self, id: StrId) -> Result<String, InternError> {
        self.inner.lock().string_of(id).map(|s| s.to_string())
    }

    /// Check whether a string has been interned.
    pub fn contains_str(&self, s: &str) -> bool {
        self.inner.lock().contains_str(s)
    }

    /// Check whether an ID has been issued.
    pub fn contains_id(&self, id: StrId) -> bool {
        self.inner.lock().contains_id(id)
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// All issued IDs at the time of the call.
    pub fn ids(&self) -> Vec<StrId> {
        self.inner.lock().ids().collect()
    }

    /// Export the current contents, entries ascending by ID.
    pub fn snapshot(&self) -> TableSnapshot {
        self.inner.lock().snapshot()
    }
}

impl StringEncoder for SharedInternTable {
    fn encode(&mut self, s: &str) -> StrId {
        self.intern(s)
    }
}

impl StringDecoder for SharedInternTable {
    fn decode(&self, id: StrId) -> Result<String, InternError> {
        self.string_of(id)
    }
}
