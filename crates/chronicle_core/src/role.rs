//! Conversation role types.

use serde::{Deserialize, Serialize};

/// The role of a message sender in a model conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions framing the model's behavior
    System,
    /// Operator or application input
    User,
    /// Model output
    Assistant,
}
