//! Mock publisher for tests and credential-less runs.

use crate::Publisher;
use chronicle_error::ChronicleResult;
use parking_lot::Mutex;
use tracing::info;

/// Publisher that records posts in memory instead of calling a network.
///
/// Used when no access token is configured, and by workflow tests.
#[derive(Debug, Default)]
pub struct MockPublisher {
    posts: Mutex<Vec<String>>,
}

impl MockPublisher {
    /// Create an empty mock publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of posts published so far.
    pub fn post_count(&self) -> usize {
        self.posts.lock().len()
    }

    /// Copies of all published texts, in publish order.
    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().clone()
    }
}

#[async_trait::async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, text: &str) -> ChronicleResult<Option<String>> {
        let mut posts = self.posts.lock();
        posts.push(text.to_string());
        let id = format!("mock_post_{}", posts.len());

        info!(id = %id, chars = text.len(), "Simulated publish");

        Ok(Some(id))
    }

    fn platform_name(&self) -> &'static str {
        "mock"
    }
}
