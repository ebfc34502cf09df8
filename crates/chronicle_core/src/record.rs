//! Posting history record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted record of one successfully published day.
///
/// Created only after the publish call succeeds; never mutated or deleted.
///
/// # Examples
///
/// ```
/// use chronicle_core::PostRecord;
/// use chrono::Utc;
///
/// let record = PostRecord::new(3, "Gradient descent", "Imagine rolling downhill...", Some("urn:li:share:42".to_string()));
/// assert_eq!(record.day, 3);
/// assert_eq!(record.char_count, record.content.chars().count());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Curriculum day this post covers
    pub day: u32,
    /// Topic title at time of posting
    pub topic: String,
    /// Exact text that was published
    pub content: String,
    /// Identifier returned by the posting endpoint, when one was provided
    #[serde(default)]
    pub post_id: Option<String>,
    /// When the post was published
    pub posted_at: DateTime<Utc>,
    /// Length of the published text in characters
    pub char_count: usize,
}

impl PostRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        day: u32,
        topic: impl Into<String>,
        content: impl Into<String>,
        post_id: Option<String>,
    ) -> Self {
        let content = content.into();
        let char_count = content.chars().count();
        Self {
            day,
            topic: topic.into(),
            content,
            post_id,
            posted_at: Utc::now(),
            char_count,
        }
    }
}
