//! Workflow driver for the 90-day posting journey.
//!
//! The driver sequences one day's pass: derive the next unposted day from
//! history, generate a draft, suspend for operator approval, then publish and
//! record, or regenerate on rejection. The suspend point is explicit:
//! [`Workflow::begin`] stops at the draft, [`Workflow::resume`] continues
//! with the operator's [`Decision`](chronicle_core::Decision). Tests drive
//! the same machine with a scripted [`ApprovalGate`].
//!
//! Also here: the daily wall-clock [`DailySchedule`] and [`AgentConfig`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod gate;
mod schedule;
mod workflow;

pub use config::{AgentConfig, Credentials, ModelConfig, PublisherConfig, StorageConfig};
pub use gate::ApprovalGate;
pub use schedule::DailySchedule;
pub use workflow::{RunOutcome, Workflow};
