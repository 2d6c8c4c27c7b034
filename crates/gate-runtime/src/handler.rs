//! Processing delegates

use async_trait::async_trait;

use gate_classifier::{ChatClient, Message};

use crate::{GateError, Result};

/// Trait for the downstream processing delegate
///
/// The gate hands validated input text to a handler and receives produced
/// output text. What happens in between is opaque to the gate.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Process validated input into candidate output
    async fn handle(&self, input: &str) -> Result<String>;

    /// Get the handler name
    fn name(&self) -> &str;
}

/// Handler backed by an LLM chat completion
///
/// The simplest useful delegate: forward the input to a chat model with a
/// fixed set of instructions and return its reply.
pub struct ChatHandler {
    client: ChatClient,
    instructions: String,
}

impl ChatHandler {
    /// Create a new chat handler
    ///
    /// # Arguments
    /// * `client` - Chat client for the completion model
    /// * `instructions` - System instructions, e.g. "You are a helpful assistant."
    pub fn new(client: ChatClient, instructions: impl Into<String>) -> Self {
        Self {
            client,
            instructions: instructions.into(),
        }
    }
}

#[async_trait]
impl Handler for ChatHandler {
    async fn handle(&self, input: &str) -> Result<String> {
        let messages = vec![
            Message::system(self.instructions.clone()),
            Message::user(input.to_string()),
        ];

        let output = self
            .client
            .complete(messages)
            .await
            .map_err(|e| GateError::handler(e.to_string()))?;

        Ok(output)
    }

    fn name(&self) -> &str {
        "chat"
    }
}
