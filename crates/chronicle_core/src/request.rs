//! Request and response types for LLM generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Generic generation request.
///
/// # Examples
///
/// ```
/// use chronicle_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest {
///     messages: vec![Message::user("Hello!")],
///     max_tokens: Some(800),
///     temperature: Some(0.8),
///     model: Some("llama3.2".to_string()),
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use chronicle_core::GenerateResponse;
///
/// let response = GenerateResponse {
///     text: "Here is today's story...".to_string(),
/// };
///
/// assert!(!response.text.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text
    pub text: String,
}
