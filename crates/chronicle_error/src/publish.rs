//! Publishing error types.

use derive_more::{Display, Error};

/// Specific publishing failure conditions.
///
/// Publishing failures are recoverable: the workflow stays in the awaiting
/// approval state so the operator may retry or reject. No automatic retry
/// is performed anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum PublishErrorKind {
    /// Endpoint returned a non-2xx status
    #[display("API returned status {}: {}", status, detail)]
    Api {
        /// HTTP status code from the posting endpoint
        status: u16,
        /// Response body, for operator diagnostics
        detail: String,
    },
    /// Request never reached the endpoint
    #[display("Network error: {}", _0)]
    Network(String),
    /// 2xx response without a post identifier
    #[display("Response missing post identifier")]
    MissingPostId,
}

/// Publish error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Publish Error: {} at {}:{}", kind, file, line)]
pub struct PublishError {
    /// The specific failure condition
    pub kind: PublishErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PublishError {
    /// Create a new PublishError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronicle_error::{PublishError, PublishErrorKind};
    ///
    /// let err = PublishError::new(PublishErrorKind::Api {
    ///     status: 401,
    ///     detail: "token expired".to_string(),
    /// });
    /// assert!(format!("{}", err).contains("401"));
    /// ```
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
