//! Common types for classification calls

use serde::{Deserialize, Serialize};

/// Role of a message in a chat exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message (instructions)
    System,
    /// User message
    User,
    /// Assistant message (model response)
    Assistant,
}

/// A message in a chat exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,
    /// Content of the message
    pub content: String,
}

impl Message {
    /// Create a new message
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Structured verdict produced by a classification call
///
/// Produced fresh per call and immutable once created. `raw` preserves the
/// full classifier payload for callers that want more than the flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationVerdict {
    /// Whether the classifier flagged the text
    pub flag: bool,
    /// The full classifier output
    pub raw: serde_json::Value,
}
