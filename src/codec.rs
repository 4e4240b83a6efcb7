//! Narrow encode/decode capabilities over an interning table.
//!
//! Consumers that need one direction take the matching trait instead of
//! the whole table: an encoder cannot resolve IDs, a decoder cannot
//! mutate. Both the plain table and the shared handle implement both.

use crate::table::{InternError, InternTable, StrId};

/// String-to-ID capability.
///
/// Encoding interns unknown strings, so it cannot fail.
pub trait StringEncoder {
    /// Map a string to its ID, interning it if new.
    fn encode(&mut self, s: &str) -> StrId;
}

/// ID-to-string capability.
///
/// Returns an owned string so implementations guarded by a lock can
/// satisfy it without handing out references into the critical section.
pub trait StringDecoder {
    /// Map an ID back to its string.
    fn decode(&self, id: StrId) -> Result<String, InternError>;
}

impl StringEncoder for InternTable {
    fn encode(&mut self, s: &str) -> StrId {
        self.intern(s)
    }
}

impl StringDecoder for InternTable {
    fn decode(&self, id: StrId) -> Result<String, InternError> {
        self.string_of(id).map(|s| s.to_string())
    }
}
