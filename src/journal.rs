//! Session-scoped encoding of log records.
//!
//! An `EncodeSession` owns its interning table for the lifetime of one
//! encoding pass; there is no process-wide table, and two sessions never
//! share IDs. Finishing the session produces a self-contained `Journal`
//! pairing the encoded records with the string table snapshot needed to
//! read them back, possibly in another process.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::StringEncoder;
use crate::logging::VERBOSITY_SILENT;
use crate::record::{EncodedLogRecord, LogRecord};
use crate::snapshot::{SnapshotError, TableSnapshot};
use crate::table::{InternError, InternTable, StrId};
use crate::{log_debug, log_dict, log_records};

/// Errors raised when decoding a journal.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Invalid string table: {0}")]
    Snapshot(SnapshotError),
    #[error("Dangling record reference: {0}")]
    Intern(InternError),
}

impl From<SnapshotError> for JournalError {
    fn from(err: SnapshotError) -> Self {
        JournalError::Snapshot(err)
    }
}

impl From<InternError> for JournalError {
    fn from(err: InternError) -> Self {
        JournalError::Intern(err)
    }
}

/// Accumulates encoded records against a session-owned string table.
#[derive(Debug)]
pub struct EncodeSession {
    table: InternTable,
    records: Vec<EncodedLogRecord>,
    verbosity: u8,
}

impl EncodeSession {
    /// Create a silent session with an empty table.
    pub fn new() -> Self {
        Self::with_verbosity(VERBOSITY_SILENT)
    }

    /// Create a session logging at the given verbosity level.
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self {
            table: InternTable::new(),
            records: Vec::new(),
            verbosity,
        }
    }

    /// Encode a record into the session, interning any new strings.
    pub fn append(&mut self, record: &LogRecord) {
        log_records!(
            self.verbosity,
            "Record {} [{:?}] {}",
            self.records.len(),
            record.level,
            record.message
        );
        let mut enc = LoggingEncoder {
            table: &mut self.table,
            verbosity: self.verbosity,
        };
        let encoded = record.encode(&mut enc);
        self.records.push(encoded);
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records have been appended.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the session into a transportable journal.
    pub fn finish(self) -> Journal {
        log_debug!(
            self.verbosity,
            "Finished session: {} records, {} distinct strings",
            self.records.len(),
            self.table.len()
        );
        Journal {
            strings: self.table.snapshot(),
            records: self.records,
        }
    }
}

impl Default for EncodeSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Encoder that announces each new table entry at DICT level.
struct LoggingEncoder<'a> {
    table: &'a mut InternTable,
    verbosity: u8,
}

impl StringEncoder for LoggingEncoder<'_> {
    fn encode(&mut self, s: &str) -> StrId {
        let verbosity = self.verbosity;
        self.table.intern_with(s, |id| {
            log_dict!(verbosity, "  New table entry {}: {:?}", id, s);
        })
    }
}

/// Encoded records plus the string table needed to decode them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub strings: TableSnapshot,
    pub records: Vec<EncodedLogRecord>,
}

impl Journal {
    /// Decode every record against the journal's own string table.
    pub fn decode(&self) -> Result<Vec<LogRecord>, JournalError> {
        let table = InternTable::from_snapshot(&self.strings)?;
        let mut records = Vec::with_capacity(self.records.len());
        for record in &self.records {
            records.push(record.decode(&table)?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::VERBOSITY_DEBUG;
    use crate::record::LogLevel;
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, secs).unwrap()
    }

    fn make_record(secs: u32, message: &str) -> LogRecord {
        LogRecord {
            timestamp: ts(secs),
            level: LogLevel::Warn,
            message: message.to_string(),
            file: "src/main/App.kt".to_string(),
            tag: "compiler".to_string(),
            diagnostic_code: 7,
        }
    }

    #[test]
    fn test_session_round_trip() {
        let records = vec![
            make_record(0, "warning: unused variable"),
            make_record(1, "warning: unchecked cast"),
            make_record(2, "warning: unused variable"),
        ];

        let mut session = EncodeSession::new();
        for record in &records {
            session.append(record);
        }
        assert_eq!(session.len(), 3);

        let journal = session.finish();
        assert_eq!(journal.decode().unwrap(), records);
    }

    #[test]
    fn test_session_table_deduplicates() {
        let mut session = EncodeSession::new();
        session.append(&make_record(0, "warning: unused variable"));
        session.append(&make_record(1, "error: unresolved reference"));
        session.append(&make_record(2, "warning: unused variable"));

        let journal = session.finish();

        // 2 distinct messages + 1 file + 1 tag
        assert_eq!(journal.strings.entries.len(), 4);
        assert_eq!(journal.records.len(), 3);
        assert_eq!(journal.records[0].message_id, journal.records[2].message_id);
        assert_eq!(journal.records[0].file_id, journal.records[1].file_id);
    }

    #[test]
    fn test_journal_snapshot_is_ordered() {
        let mut session = EncodeSession::new();
        session.append(&make_record(0, "zzz last alphabetically"));
        session.append(&make_record(1, "aaa first alphabetically"));

        let journal = session.finish();
        let ids: Vec<_> = journal.strings.entries.iter().map(|&(id, _)| id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_empty_session() {
        let journal = EncodeSession::new().finish();
        assert!(journal.strings.entries.is_empty());
        assert!(journal.records.is_empty());
        assert_eq!(journal.decode().unwrap(), vec![]);
    }

    #[test]
    fn test_journal_json_round_trip() {
        let mut session = EncodeSession::new();
        session.append(&make_record(0, "warning: unused variable"));
        session.append(&make_record(1, "error: unresolved reference"));
        let journal = session.finish();

        let json = serde_json::to_string(&journal).unwrap();
        let parsed: Journal = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, journal);
        assert_eq!(parsed.decode().unwrap(), journal.decode().unwrap());
    }

    #[test]
    fn test_decode_rejects_dangling_reference() {
        let mut session = EncodeSession::new();
        session.append(&make_record(0, "warning: unused variable"));
        let mut journal = session.finish();

        // drop one table entry; some record now points at nothing
        journal.strings.entries.pop();

        assert!(matches!(
            journal.decode(),
            Err(JournalError::Intern(InternError::IdNotFound(_)))
        ));
    }

    #[test]
    fn test_decode_rejects_corrupt_table() {
        let mut session = EncodeSession::new();
        session.append(&make_record(0, "warning: unused variable"));
        let mut journal = session.finish();

        let first = journal.strings.entries[0].clone();
        journal.strings.entries.push(first);

        assert!(matches!(
            journal.decode(),
            Err(JournalError::Snapshot(SnapshotError::DuplicateId(_)))
        ));
    }

    #[test]
    fn test_verbose_session_logs_without_panicking() {
        let mut session = EncodeSession::with_verbosity(VERBOSITY_DEBUG);
        session.append(&make_record(0, "warning: unused variable"));
        session.append(&make_record(1, "warning: unused variable"));
        let journal = session.finish();
        assert_eq!(journal.records.len(), 2);
    }
}
