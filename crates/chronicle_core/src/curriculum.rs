//! Curriculum entry types.

use serde::{Deserialize, Serialize};

/// Length of the posting journey in days.
pub const JOURNEY_DAYS: u32 = 90;

/// Difficulty tier of a curriculum topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Foundational material, early in the journey
    Beginner,
    /// Assumes earlier topics have landed
    Intermediate,
    /// Later-journey material
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

/// One day's topic in the fixed 90-day curriculum.
///
/// The curriculum is loaded once at startup and never written by chronicle.
///
/// # Examples
///
/// ```
/// use chronicle_core::{CurriculumEntry, Difficulty};
///
/// let entry = CurriculumEntry {
///     day: 1,
///     topic: "What is machine learning?".to_string(),
///     week_theme: "Foundations".to_string(),
///     difficulty: Difficulty::Beginner,
///     key_points: vec!["learning from data".to_string()],
///     story_angle: "A barista who predicts orders".to_string(),
/// };
///
/// assert_eq!(entry.day, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumEntry {
    /// Day number, unique within 1..=90
    pub day: u32,
    /// Topic title for the day
    pub topic: String,
    /// Theme shared by the surrounding week of topics
    pub week_theme: String,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Concepts the post must cover
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Narrative hook suggested for the post
    #[serde(default)]
    pub story_angle: String,
}
