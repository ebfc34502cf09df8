//! Social network publishing for chronicle.
//!
//! [`Publisher`] is the seam between the workflow driver and the posting
//! endpoint. [`LinkedInClient`] publishes text shares over HTTPS with bearer
//! auth; [`MockPublisher`] stands in when no credentials are configured and
//! in tests. One attempt per invocation, no retry or backoff anywhere.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod linkedin;
mod mock;
mod publisher;

pub use linkedin::LinkedInClient;
pub use mock::MockPublisher;
pub use publisher::Publisher;
