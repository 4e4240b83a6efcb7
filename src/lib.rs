//! Bidirectional string interning for compact log records.
//!
//! Repetitive strings such as messages and file paths are replaced by
//! dense integer IDs issued by a table owned by the encoding session.
//! A snapshot of the table travels with the encoded records, so they can
//! be decoded in another process or after a restart.

pub mod codec;
pub mod journal;
pub mod logging;
pub mod record;
pub mod shared;
pub mod snapshot;
pub mod table;

pub use codec::{StringDecoder, StringEncoder};
pub use journal::{EncodeSession, Journal, JournalError};
pub use record::{EncodedLogRecord, LogLevel, LogRecord};
pub use shared::SharedInternTable;
pub use snapshot::{SnapshotError, TableSnapshot};
pub use table::{InternError, InternTable, StrId};
