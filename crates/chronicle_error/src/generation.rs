//! Content generation error types.

use derive_more::{Display, Error};

/// Specific content generation failure conditions.
///
/// Generation failures are recoverable: the workflow driver returns to idle
/// without consuming the day, and the operator may run generation again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum GenerationErrorKind {
    /// Model API returned an error
    #[display("Model API error: {}", _0)]
    Api(String),
    /// Model returned an empty or whitespace-only completion
    #[display("Model returned empty output")]
    EmptyOutput,
    /// Model server is not reachable
    #[display("Model server not reachable at {}", _0)]
    ServerUnavailable(String),
    /// Requested model is not available on the server
    #[display("Model not found: {}", _0)]
    ModelNotFound(String),
}

/// Generation error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Generation Error: {} at {}:{}", kind, file, line)]
pub struct GenerationError {
    /// The specific failure condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronicle_error::{GenerationError, GenerationErrorKind};
    ///
    /// let err = GenerationError::new(GenerationErrorKind::EmptyOutput);
    /// assert!(format!("{}", err).contains("empty output"));
    /// ```
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
