//! Curriculum error types.

use derive_more::{Display, Error};

/// Specific curriculum failure conditions.
///
/// Load-time problems (`FileRead`, `Malformed`, `TooFewEntries`,
/// `DuplicateDay`) are fatal at startup. `Exhausted` is terminal but
/// informational: all ninety days have been posted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum CurriculumErrorKind {
    /// Failed to read the curriculum file
    #[display("Failed to read {}", _0)]
    FileRead(String),
    /// Curriculum file contents did not parse
    #[display("Malformed curriculum: {}", _0)]
    Malformed(String),
    /// Curriculum has fewer entries than the journey requires
    #[display("Curriculum has {} entries, expected {}", found, expected)]
    TooFewEntries {
        /// Entries found in the file
        found: usize,
        /// Entries the journey requires
        expected: usize,
    },
    /// Two entries claim the same day
    #[display("Duplicate curriculum day: {}", _0)]
    DuplicateDay(u32),
    /// No entry exists for the requested day
    #[display("No curriculum entry for day {}", _0)]
    MissingDay(u32),
    /// Every curriculum day has been posted
    #[display("All {} curriculum days have been posted", _0)]
    Exhausted(u32),
}

/// Curriculum error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Curriculum Error: {} at {}:{}", kind, file, line)]
pub struct CurriculumError {
    /// The specific failure condition
    pub kind: CurriculumErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CurriculumError {
    /// Create a new CurriculumError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronicle_error::{CurriculumError, CurriculumErrorKind};
    ///
    /// let err = CurriculumError::new(CurriculumErrorKind::Exhausted(90));
    /// assert!(format!("{}", err).contains("All 90"));
    /// ```
    #[track_caller]
    pub fn new(kind: CurriculumErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this error marks normal end-of-journey rather than a fault.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, CurriculumErrorKind::Exhausted(_))
    }
}
