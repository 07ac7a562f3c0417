//! Unified error types for querycsv.
//!
//! This module provides a single [`ExportError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular
//! crates like `csv`, `serde_json`, and `reqwest`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! There is no retry or recovery logic anywhere in the library. Every export
//! is a pure, fail-fast transformation: the first error aborts the export and
//! propagates to the caller.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for querycsv operations.
///
/// # Example
///
/// ```rust
/// use querycsv::error::Result;
/// use querycsv::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;

/// The error type for all querycsv operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// An I/O error occurred while writing to the output sink.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The underlying CSV writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Produced CSV bytes were not valid UTF-8.
    ///
    /// Only reachable through a custom serializer misbehaving at the byte
    /// level; the built-in pipeline always emits valid UTF-8.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The record set was empty, so no schema can be inferred and no CSV
    /// can be produced.
    #[error("empty record set provided to exporter")]
    EmptyRecordSet,

    /// The input is neither a sequence of field mappings nor projectable
    /// to one.
    #[error("not a record source: {message}")]
    NotARecordSource {
        /// Description of what the input looked like instead
        message: String,
    },

    /// A supplied filename has an extension other than `.csv`.
    #[error("the only accepted file extension is .csv (got '{filename}')")]
    InvalidFilename {
        /// The offending filename
        filename: String,
    },

    /// Datestamp appending was invoked on a filename that was not first
    /// cleaned with [`clean_filename`](crate::filename::clean_filename).
    #[error("cannot datestamp unvalidated filename '{filename}'")]
    UnvalidatedFilename {
        /// The offending filename
        filename: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ExportError {
    /// Creates a not-a-record-source error.
    pub fn not_a_record_source(message: impl Into<String>) -> Self {
        ExportError::NotARecordSource {
            message: message.into(),
        }
    }

    /// Creates an invalid-filename error.
    pub fn invalid_filename(filename: impl Into<String>) -> Self {
        ExportError::InvalidFilename {
            filename: filename.into(),
        }
    }

    /// Creates an unvalidated-filename error.
    pub fn unvalidated_filename(filename: impl Into<String>) -> Self {
        ExportError::UnvalidatedFilename {
            filename: filename.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ExportError::Io(_))
    }

    /// Returns `true` if this is an empty-input error.
    pub fn is_empty_record_set(&self) -> bool {
        matches!(self, ExportError::EmptyRecordSet)
    }

    /// Returns `true` if this is a not-a-record-source error.
    pub fn is_not_a_record_source(&self) -> bool {
        matches!(self, ExportError::NotARecordSource { .. })
    }

    /// Returns `true` if this is a filename validation error
    /// (either invalid or unvalidated).
    pub fn is_filename(&self) -> bool {
        matches!(
            self,
            ExportError::InvalidFilename { .. } | ExportError::UnvalidatedFilename { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Display tests for all error variants
    // =========================================================================

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ExportError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_empty_record_set_display() {
        let err = ExportError::EmptyRecordSet;
        assert!(err.to_string().contains("empty record set"));
    }

    #[test]
    fn test_not_a_record_source_display() {
        let err = ExportError::not_a_record_source("row 3 is a bare integer");
        let display = err.to_string();
        assert!(display.contains("not a record source"));
        assert!(display.contains("row 3 is a bare integer"));
    }

    #[test]
    fn test_invalid_filename_display() {
        let err = ExportError::invalid_filename("report.xlsx");
        let display = err.to_string();
        assert!(display.contains(".csv"));
        assert!(display.contains("report.xlsx"));
    }

    #[test]
    fn test_unvalidated_filename_display() {
        let err = ExportError::unvalidated_filename("My Report.csv");
        let display = err.to_string();
        assert!(display.contains("cannot datestamp"));
        assert!(display.contains("My Report.csv"));
    }

    #[test]
    fn test_utf8_error_display() {
        let invalid_bytes = vec![0xff, 0xfe];
        let utf8_err = String::from_utf8(invalid_bytes).unwrap_err();
        let err: ExportError = utf8_err.into();
        assert!(err.to_string().contains("UTF-8"));
    }

    // =========================================================================
    // Error source chain tests
    // =========================================================================

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ExportError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_csv_error() {
        let io_err = std::io::Error::other("sink closed");
        let csv_err = csv::Error::from(io_err);
        let err: ExportError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }

    // =========================================================================
    // is_* methods tests
    // =========================================================================

    #[test]
    fn test_is_methods() {
        let io_err = ExportError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_empty_record_set());
        assert!(!io_err.is_not_a_record_source());
        assert!(!io_err.is_filename());

        let empty_err = ExportError::EmptyRecordSet;
        assert!(empty_err.is_empty_record_set());
        assert!(!empty_err.is_io());

        let source_err = ExportError::not_a_record_source("tuples without columns");
        assert!(source_err.is_not_a_record_source());
        assert!(!source_err.is_filename());
    }

    #[test]
    fn test_is_filename_covers_both_variants() {
        assert!(ExportError::invalid_filename("a.txt").is_filename());
        assert!(ExportError::unvalidated_filename("A B.csv").is_filename());
        assert!(!ExportError::EmptyRecordSet.is_filename());
    }

    // =========================================================================
    // Debug trait test
    // =========================================================================

    #[test]
    fn test_error_debug() {
        let err = ExportError::invalid_filename("report.txt");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidFilename"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_error() -> Result<i32> {
            Err(ExportError::EmptyRecordSet)
        }

        assert!(returns_error().is_err());
    }
}
