//! Message types for model conversations.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A text message in a model conversation.
///
/// # Examples
///
/// ```
/// use chronicle_core::{Message, Role};
///
/// let message = Message::user("Write today's post.");
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
