//! Top-level error wrapper types.

use crate::{
    ConfigError, CurriculumError, GenerationError, HttpError, IoError, JsonError, PublishError,
    StorageError, WorkflowError,
};

/// This is the foundation error enum. Every chronicle crate converts its
/// errors into one of these variants at the component boundary.
///
/// # Examples
///
/// ```
/// use chronicle_error::{ChronicleError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ChronicleError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ChronicleErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Terminal I/O error
    #[from(IoError)]
    Io(IoError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Curriculum load or exhaustion error
    #[from(CurriculumError)]
    Curriculum(CurriculumError),
    /// Content generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Publishing error
    #[from(PublishError)]
    Publish(PublishError),
    /// History persistence error
    #[from(StorageError)]
    Storage(StorageError),
    /// Workflow driver error
    #[from(WorkflowError)]
    Workflow(WorkflowError),
}

/// Chronicle error with kind discrimination.
///
/// # Examples
///
/// ```
/// use chronicle_error::{ChronicleResult, ConfigError};
///
/// fn might_fail() -> ChronicleResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Chronicle Error: {}", _0)]
pub struct ChronicleError(Box<ChronicleErrorKind>);

impl ChronicleError {
    /// Create a new error from a kind.
    pub fn new(kind: ChronicleErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ChronicleErrorKind {
        &self.0
    }

    /// Whether the error is the informational end-of-journey marker.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind(), ChronicleErrorKind::Curriculum(c) if c.is_exhausted())
    }
}

// Generic From implementation for any type that converts to ChronicleErrorKind
impl<T> From<T> for ChronicleError
where
    T: Into<ChronicleErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for chronicle operations.
///
/// # Examples
///
/// ```
/// use chronicle_error::{ChronicleResult, HttpError};
///
/// fn fetch_data() -> ChronicleResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type ChronicleResult<T> = std::result::Result<T, ChronicleError>;
