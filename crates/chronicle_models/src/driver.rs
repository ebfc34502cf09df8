//! Trait definition for LLM backends.

use async_trait::async_trait;
use chronicle_core::{GenerateRequest, GenerateResponse};
use chronicle_error::ChronicleResult;

/// Core trait that all LLM backends must implement.
///
/// This provides the minimal interface for synchronous text generation; the
/// content generator and workflow driver are written against it so tests can
/// substitute a scripted backend.
#[async_trait]
pub trait ChronicleDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> ChronicleResult<GenerateResponse>;

    /// Provider name (e.g., "ollama").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama3.2").
    fn model_name(&self) -> &str;
}
