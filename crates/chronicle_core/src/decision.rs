//! Operator approval decisions.

use serde::{Deserialize, Serialize};

/// The operator's verdict on a generated draft.
///
/// Parsed from operator input; anything unrecognized is a re-prompt, not a
/// decision.
///
/// # Examples
///
/// ```
/// use chronicle_core::Decision;
///
/// assert_eq!(Decision::parse("a"), Some(Decision::Approve));
/// assert_eq!(Decision::parse("reject"), Some(Decision::reject(None)));
/// assert_eq!(Decision::parse("maybe"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Publish the draft as-is
    Approve,
    /// Discard the draft and regenerate for the same day
    Reject {
        /// Optional guidance folded into the regeneration prompt
        feedback: Option<String>,
    },
    /// Exit the workflow leaving state unchanged
    Quit,
}

impl Decision {
    /// Convenience constructor for a rejection.
    pub fn reject(feedback: Option<String>) -> Self {
        Self::Reject { feedback }
    }

    /// Parse an operator token. Returns `None` for unrecognized input.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "a" | "approve" => Some(Self::Approve),
            "r" | "reject" => Some(Self::reject(None)),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}
