//! Prompt templates for story-style post generation.

use chronicle_core::{CurriculumEntry, PostRecord};

/// System framing sent with every generation request.
pub const SYSTEM_PROMPT: &str =
    "You are an expert educator and storyteller creating engaging social media \
     content. Weave technical concepts into short narratives a general audience \
     can follow.";

/// Summarize recent posts for continuity across the journey.
///
/// # Examples
///
/// ```
/// use chronicle_models::summarize_recent;
///
/// assert!(summarize_recent(&[]).contains("beginning"));
/// ```
pub fn summarize_recent(recent: &[PostRecord]) -> String {
    if recent.is_empty() {
        return "This is the beginning of the 90-day journey.".to_string();
    }

    let mut summary = String::from("Recent posts in this series:\n");
    for record in recent {
        summary.push_str(&format!("- Day {}: {}\n", record.day, record.topic));
    }
    summary
}

/// Build the story generation prompt for one curriculum day.
///
/// `feedback` carries the operator's rejection notes when regenerating; the
/// model is asked for a fresh take that incorporates them.
pub fn build_story_prompt(
    entry: &CurriculumEntry,
    recent_summary: &str,
    feedback: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Write a story-style social media post about today's topic.\n\
         \n\
         ## Today's Topic\n\
         - Day: {day} of 90\n\
         - Topic: {topic}\n\
         - Week theme: {week_theme}\n\
         - Difficulty: {difficulty}\n\
         - Key points to cover: {key_points}\n\
         - Story angle: {story_angle}\n\
         \n\
         ## Previous posts (for continuity)\n\
         {recent_summary}\n\
         \n\
         ## Guidelines\n\
         1. Open with a hook: a relatable scenario or question.\n\
         2. Weave the key points naturally into the narrative.\n\
         3. Explain concepts with simple analogies, not jargon.\n\
         4. Use short paragraphs; keep it between 500 and 2500 characters.\n\
         5. End with a reflection question, then a separator line and up to \
            five relevant hashtags.\n\
         6. Do not include code snippets and do not exceed 3000 characters.\n\
         \n\
         Write the complete post now:",
        day = entry.day,
        topic = entry.topic,
        week_theme = entry.week_theme,
        difficulty = entry.difficulty,
        key_points = entry.key_points.join(", "),
        story_angle = entry.story_angle,
    );

    match feedback {
        Some(notes) if !notes.trim().is_empty() => {
            prompt.push_str(&format!(
                "\n\n## Operator feedback on the previous draft\n{notes}\n\
                 Write a different version that incorporates this feedback."
            ));
        }
        Some(_) => {
            prompt.push_str(
                "\n\nThe previous draft was rejected. Write a different version \
                 with a fresh perspective.",
            );
        }
        None => {}
    }

    prompt
}
