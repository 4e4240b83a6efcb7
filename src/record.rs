//! Log records and their ID-encoded form.
//!
//! A `LogRecord` carries its strings inline; `EncodedLogRecord` replaces
//! the message, file, and tag with interned IDs so repeated values are
//! stored once in the table that encoded them. Timestamps and diagnostic
//! codes pass through encoding untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::{StringDecoder, StringEncoder};
use crate::table::{InternError, StrId};

/// Severity of a log record.
///
/// Numeric codes are stable across releases:
/// 0=Info, 1=Lifecycle, 2=Warn, 3=Error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Lifecycle,
    Warn,
    Error,
}

impl LogLevel {
    /// Stable numeric code for this level.
    pub fn code(self) -> i32 {
        match self {
            LogLevel::Info => 0,
            LogLevel::Lifecycle => 1,
            LogLevel::Warn => 2,
            LogLevel::Error => 3,
        }
    }

    /// Level for a numeric code, if the code is known.
    pub fn from_code(code: i32) -> Option<LogLevel> {
        match code {
            0 => Some(LogLevel::Info),
            1 => Some(LogLevel::Lifecycle),
            2 => Some(LogLevel::Warn),
            3 => Some(LogLevel::Error),
            _ => None,
        }
    }
}

/// A fully decoded log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    /// Source file the record refers to, if any (empty when not applicable).
    pub file: String,
    /// Originating tool or subsystem.
    pub tag: String,
    pub diagnostic_code: i32,
}

/// A log record with its strings replaced by interned IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedLogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message_id: StrId,
    pub file_id: StrId,
    pub tag_id: StrId,
    pub diagnostic_code: i32,
}

impl LogRecord {
    /// Encode this record through `enc`, interning any new strings.
    pub fn encode(&self, enc: &mut impl StringEncoder) -> EncodedLogRecord {
        EncodedLogRecord {
            timestamp: self.timestamp,
            level: self.level,
            message_id: enc.encode(&self.message),
            file_id: enc.encode(&self.file),
            tag_id: enc.encode(&self.tag),
            diagnostic_code: self.diagnostic_code,
        }
    }
}

impl EncodedLogRecord {
    /// Decode this record through `dec`.
    ///
    /// Fails if any of the three IDs is unknown to the decoder, which
    /// means the record was encoded against a different table.
    pub fn decode(&self, dec: &impl StringDecoder) -> Result<LogRecord, InternError> {
        Ok(LogRecord {
            timestamp: self.timestamp,
            level: self.level,
            message: dec.decode(self.message_id)?,
            file: dec.decode(self.file_id)?,
            tag: dec.decode(self.tag_id)?,
            diagnostic_code: self.diagnostic_code,
        })
    }
}
