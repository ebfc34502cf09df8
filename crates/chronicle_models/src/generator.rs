//! Content generator sitting above the LLM driver.

use crate::{build_story_prompt, summarize_recent, ChronicleDriver, Draft, SYSTEM_PROMPT};
use chronicle_core::{CurriculumEntry, GenerateRequest, Message, PostRecord};
use chronicle_error::{ChronicleResult, GenerationError, GenerationErrorKind};
use tracing::{debug, info, instrument};

/// Tunable generation parameters, loaded from configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Sampling temperature; higher for more creative drafts
    pub temperature: f32,
    /// Token cap for one draft
    pub max_tokens: u32,
    /// How many recent posts feed the continuity summary
    pub continuity_window: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_tokens: 1024,
            continuity_window: 3,
        }
    }
}

/// Formats the prompt for one curriculum day and calls the model once.
///
/// One model call per draft; rejection feedback reruns the same path with the
/// feedback folded into the prompt. No retries happen here; a failed call
/// surfaces a generation error and the workflow returns to idle.
pub struct ContentGenerator<D: ChronicleDriver> {
    driver: D,
    params: GenerationParams,
}

impl<D: ChronicleDriver> ContentGenerator<D> {
    /// Create a generator over a driver.
    pub fn new(driver: D, params: GenerationParams) -> Self {
        Self { driver, params }
    }

    /// Generate a draft for one curriculum day.
    ///
    /// `recent` supplies continuity context; `feedback` is present when the
    /// operator rejected the previous draft for this day.
    #[instrument(skip(self, entry, recent, feedback), fields(day = entry.day))]
    pub async fn generate(
        &self,
        entry: &CurriculumEntry,
        recent: &[PostRecord],
        feedback: Option<&str>,
    ) -> ChronicleResult<Draft> {
        let window = recent.len().saturating_sub(self.params.continuity_window);
        let summary = summarize_recent(&recent[window..]);
        let prompt = build_story_prompt(entry, &summary, feedback);

        debug!(prompt_len = prompt.len(), "Built story prompt");

        let request = GenerateRequest {
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)],
            max_tokens: Some(self.params.max_tokens),
            temperature: Some(self.params.temperature),
            model: Some(self.driver.model_name().to_string()),
        };

        let response = self.driver.generate(&request).await?;

        if response.text.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyOutput).into());
        }

        let draft = Draft::new(entry, response.text, feedback.is_some());

        info!(
            day = draft.day,
            chars = draft.char_count(),
            regenerated = draft.regenerated,
            "Generated draft"
        );

        Ok(draft)
    }
}
