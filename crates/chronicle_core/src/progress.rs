//! Derived journey progress.

use crate::JOURNEY_DAYS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Progress through the 90-day journey, derived from posting history.
///
/// Never stored: recomputed from the persisted records on every use so no
/// stale day pointer can survive a crash or a second process.
///
/// # Examples
///
/// ```
/// use chronicle_core::Progress;
///
/// let progress = Progress::from_posted_days([1, 2, 3, 4, 5]);
/// assert_eq!(progress.next_day, Some(6));
/// assert_eq!(progress.total_posts, 5);
///
/// let done = Progress::from_posted_days(1..=90);
/// assert_eq!(done.next_day, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Smallest unposted day, or `None` when the curriculum is exhausted
    pub next_day: Option<u32>,
    /// Number of days posted so far
    pub total_posts: usize,
    /// Percentage of the journey completed, rounded to one decimal
    pub completion_percentage: f64,
}

impl Progress {
    /// Compute progress from the set of posted day numbers.
    ///
    /// Duplicate days are counted once. Days outside 1..=90 are ignored for
    /// next-day selection but still counted as posts.
    pub fn from_posted_days(days: impl IntoIterator<Item = u32>) -> Self {
        let posted: BTreeSet<u32> = days.into_iter().collect();
        let next_day = (1..=JOURNEY_DAYS).find(|day| !posted.contains(day));
        let total_posts = posted.len();
        let completion_percentage =
            (total_posts as f64 / JOURNEY_DAYS as f64 * 1000.0).round() / 10.0;

        Self {
            next_day,
            total_posts,
            completion_percentage,
        }
    }

    /// Whether every curriculum day has been posted.
    pub fn is_complete(&self) -> bool {
        self.next_day.is_none()
    }
}
