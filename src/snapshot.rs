//! Portable snapshot of an interning table.
//!
//! A snapshot carries everything needed to rebuild a table elsewhere:
//! the ID origin and the `(ID, string)` entries in ascending ID order.
//! It serializes with serde so callers can persist it in whatever format
//! they transport records in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::StrId;

/// Errors raised when restoring a snapshot.
///
/// Snapshots usually come from deserialized input, so the restore path
/// rejects anything that would break the table's inverse-map invariant
/// or leave it unable to issue further IDs.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Duplicate ID in snapshot: {0}")]
    DuplicateId(StrId),
    #[error("Duplicate string in snapshot: {0:?}")]
    DuplicateString(String),
    #[error("ID range exhausted by entry: {0}")]
    IdRangeExhausted(StrId),
}

/// Exported contents of an interning table.
///
/// Entries are `(ID, string)` pairs in ascending ID order. Restoring via
/// `InternTable::from_snapshot` reproduces the exporting table exactly,
/// including its origin and any ID gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub origin: StrId,
    pub entries: Vec<(StrId, String)>,
}
