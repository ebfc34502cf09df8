//! Chronicle - a scheduled 90-day curriculum posting assistant.
//!
//! Chronicle walks a fixed 90-day curriculum, generates one story-style post
//! per day with a local LLM, gates each draft behind operator approval, and
//! publishes approved text to a social network while recording history so no
//! day is ever posted twice.
//!
//! # Components
//!
//! - **Curriculum store**: read-only load of the 90 topic entries
//! - **History store**: append-only record of published days, the source of
//!   truth for progress
//! - **Content generator**: prompt templating over a [`ChronicleDriver`]
//! - **Approval gate**: the human checkpoint between generation and publishing
//! - **Publisher**: one HTTPS call per approved draft, no retries
//! - **Workflow driver**: the state machine sequencing all of the above
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use chronicle::{
//!     AgentConfig, ContentGenerator, CurriculumStore, JsonHistoryStore, MockPublisher,
//!     OllamaClient, Workflow,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AgentConfig::load("chronicle.toml")?;
//!     let curriculum = CurriculumStore::load(&config.storage.curriculum_path)?;
//!     let history = Arc::new(JsonHistoryStore::new(&config.storage.history_path).await?);
//!     let driver = OllamaClient::new_with_url(&config.model.name, &config.model.base_url)?;
//!     let generator = ContentGenerator::new(driver, config.generation.clone());
//!
//!     let mut workflow = Workflow::new(
//!         curriculum,
//!         generator,
//!         Arc::new(MockPublisher::new()),
//!         history,
//!     );
//!     let draft = workflow.begin().await?;
//!     println!("Day {}: {}", draft.day, draft.content);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use chronicle_agent::{
    AgentConfig, ApprovalGate, Credentials, DailySchedule, ModelConfig, PublisherConfig,
    RunOutcome, StorageConfig, Workflow,
};
pub use chronicle_core::{
    CurriculumEntry, Decision, Difficulty, GenerateRequest, GenerateResponse, Message,
    PostRecord, Progress, Role, JOURNEY_DAYS,
};
pub use chronicle_error::{
    ChronicleError, ChronicleErrorKind, ChronicleResult, ConfigError, CurriculumError,
    CurriculumErrorKind, GenerationError, GenerationErrorKind, HttpError, IoError, JsonError,
    PublishError, PublishErrorKind, StorageError, StorageErrorKind, WorkflowError,
    WorkflowErrorKind,
};
pub use chronicle_models::{
    build_story_prompt, summarize_recent, ChronicleDriver, ContentGenerator, Draft,
    GenerationParams, OllamaClient, MAX_POST_CHARS, SYSTEM_PROMPT,
};
pub use chronicle_social::{LinkedInClient, MockPublisher, Publisher};
pub use chronicle_storage::{CurriculumStore, HistoryStore, JsonHistoryStore};
