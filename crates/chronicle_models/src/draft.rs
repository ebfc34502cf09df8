//! Generated draft type and length handling.

use chronicle_core::CurriculumEntry;
use serde::{Deserialize, Serialize};

/// Platform character limit for one post.
pub const MAX_POST_CHARS: usize = 3000;

/// A generated post awaiting operator approval.
///
/// Drafts exist only in memory; nothing is persisted until a draft is
/// approved and published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    /// Curriculum day the draft covers
    pub day: u32,
    /// Topic title for the day
    pub topic: String,
    /// Theme shared by the surrounding week
    pub week_theme: String,
    /// The generated text
    pub content: String,
    /// Whether this draft replaced a rejected one
    pub regenerated: bool,
}

impl Draft {
    /// Build a draft from a curriculum entry and generated text, enforcing
    /// the platform length limit.
    pub fn new(entry: &CurriculumEntry, content: String, regenerated: bool) -> Self {
        Self {
            day: entry.day,
            topic: entry.topic.clone(),
            week_theme: entry.week_theme.clone(),
            content: truncate_at_paragraph(content, MAX_POST_CHARS),
            regenerated,
        }
    }

    /// Length of the draft in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// Truncate over-long text, preferring a paragraph boundary in the final
/// third so the post does not end mid-sentence. Lengths are measured in
/// characters to match the platform limit.
fn truncate_at_paragraph(content: String, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content;
    }

    let keep = max_chars.saturating_sub(100);
    let boundary = content
        .char_indices()
        .nth(keep)
        .map(|(idx, _)| idx)
        .unwrap_or(content.len());
    let mut truncated = content[..boundary].to_string();

    if let Some(last_para) = truncated.rfind("\n\n") {
        if last_para > truncated.len() * 7 / 10 {
            truncated.truncate(last_para);
        }
    }

    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_untouched() {
        let text = "A short post.".to_string();
        assert_eq!(truncate_at_paragraph(text.clone(), MAX_POST_CHARS), text);
    }

    #[test]
    fn long_content_is_cut_below_the_limit() {
        let text = "word ".repeat(1000);
        let truncated = truncate_at_paragraph(text, MAX_POST_CHARS);
        assert!(truncated.chars().count() <= MAX_POST_CHARS);
    }

    #[test]
    fn lengths_are_measured_in_characters_not_bytes() {
        // Multi-byte text within the character limit stays untouched even
        // though its byte length exceeds it.
        let text = "é".repeat(MAX_POST_CHARS);
        assert_eq!(text.len(), MAX_POST_CHARS * 2);
        assert_eq!(truncate_at_paragraph(text.clone(), MAX_POST_CHARS), text);
    }

    #[test]
    fn multibyte_content_is_cut_by_character_count() {
        let text = "é".repeat(MAX_POST_CHARS + 500);
        let truncated = truncate_at_paragraph(text, MAX_POST_CHARS);
        assert_eq!(truncated.chars().count(), MAX_POST_CHARS - 100);
    }

    #[test]
    fn truncation_prefers_a_late_paragraph_break() {
        let mut text = "a".repeat(2850);
        text.push_str("\n\n");
        text.push_str(&"b".repeat(500));
        let truncated = truncate_at_paragraph(text, MAX_POST_CHARS);
        assert!(truncated.ends_with('a'));
    }
}
