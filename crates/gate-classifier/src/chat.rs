//! OpenAI-compatible chat completions client
//!
//! One blocking-or-suspending round trip per call. Retry and backoff are
//! the caller's responsibility, wrapped around the whole request.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{
    error::{ClassifierError, Result},
    types::{Message, Role},
};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Client for an OpenAI-compatible chat completions API
///
/// Works against any endpoint that speaks the chat completions protocol,
/// e.g. Gemini's OpenAI-compatible surface via [`ChatClient::with_base_url`].
pub struct ChatClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl ChatClient {
    /// Create a new chat client
    ///
    /// # Arguments
    /// * `api_key` - API key for the service
    /// * `model` - Model to use, e.g. "gemini-2.0-flash" or "gpt-4o-mini"
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ClassifierError::config("API key cannot be empty"));
        }

        Ok(Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(60),
        })
    }

    /// Set the API base URL (without the trailing `/chat/completions`)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send messages and return the completion text
    pub async fn complete(&self, messages: Vec<Message>) -> Result<String> {
        self.request(messages, None).await
    }

    /// Send messages in JSON mode and return the completion text
    ///
    /// The service is asked for a JSON object response, which callers parse
    /// into their expected shape.
    pub async fn complete_json(&self, messages: Vec<Message>) -> Result<String> {
        self.request(messages, Some(serde_json::json!({"type": "json_object"})))
            .await
    }

    /// Convert our messages to wire format
    fn format_messages(&self, messages: &[Message]) -> Vec<ChatMessage> {
        messages
            .iter()
            .map(|msg| ChatMessage {
                role: match msg.role {
                    Role::System => "system".to_string(),
                    Role::User => "user".to_string(),
                    Role::Assistant => "assistant".to_string(),
                },
                content: msg.content.clone(),
            })
            .collect()
    }

    async fn request(
        &self,
        messages: Vec<Message>,
        response_format: Option<serde_json::Value>,
    ) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: self.format_messages(&messages),
            response_format,
        };

        tracing::debug!(model = %self.model, "Sending chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClassifierError::api(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let response: ChatResponse = response.json().await?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| ClassifierError::api("No choices in response"))?;

        Ok(choice.message.content.clone().unwrap_or_default())
    }
}

// Wire types

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
