//! History persistence error types.

use derive_more::{Display, Error};

/// Specific storage failure conditions.
///
/// A persistence failure after a successful publish leaves an external post
/// with no local record. The error is surfaced to the operator rather than
/// silently repaired; the day remains unposted from the local perspective.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum StorageErrorKind {
    /// Failed to read the history file
    #[display("Failed to read {}", _0)]
    FileRead(String),
    /// Failed to write the history file
    #[display("Failed to write {}", _0)]
    Persistence(String),
    /// Failed to create the data directory
    #[display("Failed to create directory {}", _0)]
    DirectoryCreation(String),
    /// History file contents did not parse
    #[display("Malformed history file: {}", _0)]
    Malformed(String),
    /// A record for this day already exists
    #[display("Day {} already recorded", _0)]
    DuplicateDay(u32),
}

/// Storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Storage Error: {} at {}:{}", kind, file, line)]
pub struct StorageError {
    /// The specific failure condition
    pub kind: StorageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StorageError {
    /// Create a new StorageError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronicle_error::{StorageError, StorageErrorKind};
    ///
    /// let err = StorageError::new(StorageErrorKind::DuplicateDay(7));
    /// assert!(format!("{}", err).contains("already recorded"));
    /// ```
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
