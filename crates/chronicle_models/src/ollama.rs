//! Ollama LLM client implementation.

use ollama_rs::generation::completion::request::GenerationRequest as OllamaRequest;
use ollama_rs::models::ModelOptions as GenerationOptions;
use ollama_rs::Ollama;

use crate::ChronicleDriver;
use chronicle_core::{GenerateRequest, GenerateResponse, Role};
use chronicle_error::{ChronicleResult, GenerationError, GenerationErrorKind};
use tracing::{debug, info, instrument, warn};

/// Ollama LLM client for local model execution.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    /// Ollama client instance
    client: Ollama,

    /// Model name (e.g., "llama3.2", "mistral")
    model_name: String,

    /// Ollama server URL
    base_url: String,
}

impl OllamaClient {
    /// Create a new Ollama client with default localhost connection.
    #[instrument(name = "ollama_client_new")]
    pub fn new(model_name: impl Into<String> + std::fmt::Debug) -> ChronicleResult<Self> {
        Self::new_with_url(model_name, "http://localhost:11434")
    }

    /// Create a new Ollama client with custom server URL.
    #[instrument(name = "ollama_client_new_with_url")]
    pub fn new_with_url(
        model_name: impl Into<String> + std::fmt::Debug,
        base_url: impl Into<String> + std::fmt::Debug,
    ) -> ChronicleResult<Self> {
        let model_name = model_name.into();
        let base_url = base_url.into();

        info!(
            model = %model_name,
            url = %base_url,
            "Creating Ollama client"
        );

        let (host, port) = split_host_port(&base_url);
        let client = Ollama::new(host, port);

        Ok(Self {
            client,
            model_name,
            base_url,
        })
    }

    /// Check if the Ollama server is running and the model is available.
    #[instrument(skip(self))]
    pub async fn validate(&self) -> ChronicleResult<()> {
        debug!("Validating Ollama server and model availability");

        match self.client.list_local_models().await {
            Ok(models) => {
                debug!(count = models.len(), "Found local models");

                let model_exists = models.iter().any(|m| m.name.contains(&self.model_name));

                if !model_exists {
                    warn!(
                        model = %self.model_name,
                        available = ?models.iter().map(|m| &m.name).collect::<Vec<_>>(),
                        "Model not found locally"
                    );

                    return Err(GenerationError::new(GenerationErrorKind::ModelNotFound(
                        self.model_name.clone(),
                    ))
                    .into());
                }

                info!("Ollama server and model validated");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to connect to Ollama server");
                Err(GenerationError::new(GenerationErrorKind::ServerUnavailable(
                    self.base_url.clone(),
                ))
                .into())
            }
        }
    }
}

const DEFAULT_OLLAMA_PORT: u16 = 11434;

/// Split a configured server URL into host and port, defaulting the port
/// when the URL carries none.
fn split_host_port(base_url: &str) -> (String, u16) {
    if let Some(idx) = base_url.rfind(':') {
        if let Ok(port) = base_url[idx + 1..].parse::<u16>() {
            return (base_url[..idx].to_string(), port);
        }
    }
    (base_url.to_string(), DEFAULT_OLLAMA_PORT)
}

/// Flatten conversation messages into a single prompt.
///
/// Ollama's completion endpoint takes one prompt string; system content goes
/// first, then user turns in order.
fn messages_to_prompt(request: &GenerateRequest) -> String {
    let mut prompt = String::new();
    for message in &request.messages {
        match message.role {
            Role::System => {
                prompt.push_str(&message.content);
                prompt.push_str("\n\n");
            }
            Role::User | Role::Assistant => {
                prompt.push_str(&message.content);
                prompt.push('\n');
            }
        }
    }
    prompt
}

#[async_trait::async_trait]
impl ChronicleDriver for OllamaClient {
    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerateRequest) -> ChronicleResult<GenerateResponse> {
        debug!("Generating with Ollama");

        let prompt = messages_to_prompt(request);

        debug!(prompt_length = prompt.len(), "Converted messages to prompt");

        let mut options = GenerationOptions::default();
        if let Some(temperature) = request.temperature {
            options = options.temperature(temperature);
        }
        if let Some(max_tokens) = request.max_tokens {
            options = options.num_predict(max_tokens as i32);
        }

        let ollama_req = OllamaRequest::new(self.model_name.clone(), prompt).options(options);

        let response = self
            .client
            .generate(ollama_req)
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::Api(e.to_string())))?;

        debug!(
            response_length = response.response.len(),
            "Received response from Ollama"
        );

        Ok(GenerateResponse {
            text: response.response,
        })
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
