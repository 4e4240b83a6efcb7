//! Logging macros for the encoding session with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0). Verbosity is
//! an explicit argument rather than global state; each session carries
//! its own level:
//! - 0: SILENT (no output)
//! - 1: RECORDS (one line per appended record)
//! - 2: DICT (new string table entries)
//! - 3: DEBUG (full internals)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_RECORDS: u8 = 1;
pub const VERBOSITY_DICT: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at RECORDS level (verbosity >= 1).
///
/// Used for: one line per record appended to a session.
#[macro_export]
macro_rules! log_records {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_RECORDS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DICT level (verbosity >= 2).
///
/// Used for: new string table entries as they are created.
#[macro_export]
macro_rules! log_dict {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DICT {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
///
/// Used for: session internals, table sizes, snapshot contents.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_constants() {
        assert_eq!(VERBOSITY_SILENT, 0);
        assert_eq!(VERBOSITY_RECORDS, 1);
        assert_eq!(VERBOSITY_DICT, 2);
        assert_eq!(VERBOSITY_DEBUG, 3);
    }

    #[test]
    fn test_log_macros_compile() {
        // Just verify macros compile and don't panic
        let verbosity = VERBOSITY_SILENT;
        log_records!(verbosity, "test {}", 1);
        log_dict!(verbosity, "test {}", 2);
        log_debug!(verbosity, "test {}", 3);
    }
}
