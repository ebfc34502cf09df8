//! Workflow driver error types.

use derive_more::{Display, Error};

/// Specific workflow driver misuse conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum WorkflowErrorKind {
    /// Resume was called with no draft awaiting approval
    #[display("No draft awaiting approval")]
    NothingPending,
    /// Begin was called while a draft is still awaiting approval
    #[display("A draft for day {} is already awaiting approval", _0)]
    AlreadyPending(u32),
}

/// Workflow error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Workflow Error: {} at {}:{}", kind, file, line)]
pub struct WorkflowError {
    /// The specific failure condition
    pub kind: WorkflowErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl WorkflowError {
    /// Create a new WorkflowError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronicle_error::{WorkflowError, WorkflowErrorKind};
    ///
    /// let err = WorkflowError::new(WorkflowErrorKind::NothingPending);
    /// assert!(format!("{}", err).contains("No draft"));
    /// ```
    #[track_caller]
    pub fn new(kind: WorkflowErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
