//! LLM driver seam and content generation.
//!
//! [`ChronicleDriver`] is the minimal interface a language model backend must
//! implement. [`OllamaClient`] is the shipped backend for local models.
//! [`ContentGenerator`] sits above the driver: it formats the story prompt
//! from a curriculum entry and recent history, calls the model once, and
//! post-processes the draft (length cap, empty-output rejection).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod draft;
mod driver;
mod generator;
mod ollama;
mod prompt;

pub use draft::{Draft, MAX_POST_CHARS};
pub use driver::ChronicleDriver;
pub use generator::{ContentGenerator, GenerationParams};
pub use ollama::OllamaClient;
pub use prompt::{build_story_prompt, summarize_recent, SYSTEM_PROMPT};
