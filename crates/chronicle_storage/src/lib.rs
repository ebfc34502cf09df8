//! Curriculum and posting-history stores.
//!
//! Two stores back the posting workflow:
//!
//! - [`CurriculumStore`]: a read-only load of the fixed 90-day topic list,
//!   validated once at process start. Malformed or short curricula are fatal.
//! - [`HistoryStore`]: the append-only record of published days. The JSON
//!   implementation ([`JsonHistoryStore`]) rereads the file on every query so
//!   the next unposted day is always derived from persisted state, never from
//!   an in-memory pointer.
//!
//! The history store is the source of truth for duplicate prevention: a day
//! with a record is never selected again.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod curriculum;
mod history;

pub use curriculum::CurriculumStore;
pub use history::{HistoryStore, JsonHistoryStore};
