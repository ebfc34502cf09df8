//! Error types for the chronicle posting assistant.
//!
//! This crate provides the foundation error types used throughout the chronicle workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions where a family has more than one
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use chronicle_error::{ChronicleResult, PublishError, PublishErrorKind};
//!
//! fn publish() -> ChronicleResult<String> {
//!     Err(PublishError::new(PublishErrorKind::Network(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! match publish() {
//!     Ok(id) => println!("Posted: {}", id),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod curriculum;
mod error;
mod generation;
mod http;
mod io;
mod json;
mod publish;
mod storage;
mod workflow;

pub use config::ConfigError;
pub use curriculum::{CurriculumError, CurriculumErrorKind};
pub use error::{ChronicleError, ChronicleErrorKind, ChronicleResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::HttpError;
pub use io::IoError;
pub use json::JsonError;
pub use publish::{PublishError, PublishErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use workflow::{WorkflowError, WorkflowErrorKind};
