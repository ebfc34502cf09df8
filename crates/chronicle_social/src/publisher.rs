//! Trait definition for posting backends.

use async_trait::async_trait;
use chronicle_error::ChronicleResult;

/// Posting seam for approved content.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish one text post, returning the external post identifier when
    /// the platform supplies one.
    ///
    /// A non-2xx response or a network failure is a publish error; the caller
    /// decides whether to retry (by operator action) or reject.
    async fn publish(&self, text: &str) -> ChronicleResult<Option<String>>;

    /// Platform name (e.g., "linkedin", "mock").
    fn platform_name(&self) -> &'static str;
}
