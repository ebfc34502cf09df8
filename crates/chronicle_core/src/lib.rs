//! Core domain types for the chronicle posting assistant.
//!
//! This crate defines the data model shared by every other chronicle crate:
//! the fixed 90-day curriculum, the append-only posting history, derived
//! journey progress, and the message types exchanged with LLM drivers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod curriculum;
mod decision;
mod message;
mod progress;
mod record;
mod request;
mod role;

pub use curriculum::{CurriculumEntry, Difficulty, JOURNEY_DAYS};
pub use decision::Decision;
pub use message::Message;
pub use progress::Progress;
pub use record::PostRecord;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
