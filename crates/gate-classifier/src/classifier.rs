//! Classifier trait and the chat-backed implementation

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    chat::ChatClient,
    error::{ClassifierError, Result},
    types::{ClassificationVerdict, Message},
};

/// Trait for text classifiers
///
/// Implementations send a piece of text to a classification backend and
/// return a structured boolean verdict. Exactly one call to the backend per
/// invocation; no batching, no caching, no retries.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify a piece of text
    async fn classify(&self, text: &str) -> Result<ClassificationVerdict>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Classifier backed by an LLM chat completion
///
/// The policy lives in the instructions; the wire contract is always a JSON
/// object with a boolean `flag` field.
pub struct VerdictClassifier {
    client: ChatClient,
    instructions: String,
}

impl VerdictClassifier {
    /// Create a new classifier with policy instructions
    ///
    /// # Arguments
    /// * `client` - Chat client for the classification model
    /// * `instructions` - What the classifier should flag, e.g.
    ///   "You check if the user is asking about the prime minister or not."
    pub fn new(client: ChatClient, instructions: impl Into<String>) -> Self {
        Self {
            client,
            instructions: instructions.into(),
        }
    }

    fn system_prompt(&self) -> String {
        format!(
            "{}\n\nRespond with a JSON object containing a boolean \"flag\" field. \
             Set \"flag\" to true if the text matches what you are checking for, \
             and false otherwise.",
            self.instructions
        )
    }
}

#[async_trait]
impl Classifier for VerdictClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationVerdict> {
        let messages = vec![
            Message::system(self.system_prompt()),
            Message::user(text.to_string()),
        ];

        let content = self.client.complete_json(messages).await?;

        let raw = parse_verdict_json(&content)?;
        let flag = raw
            .get("flag")
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                ClassifierError::schema(format!(
                    "Classifier response has no boolean \"flag\" field: {}",
                    raw
                ))
            })?;

        tracing::debug!(model = %self.client.model(), flag, "Classification verdict");

        Ok(ClassificationVerdict { flag, raw })
    }

    fn name(&self) -> &str {
        "verdict"
    }
}

/// Parse classifier output as JSON, tolerating a markdown code fence
///
/// Models sometimes wrap JSON-mode output in ```json fences.
fn parse_verdict_json(content: &str) -> Result<Value> {
    let trimmed = content.trim();

    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    if let Some(inner) = extract_fenced_block(trimmed) {
        if let Ok(value) = serde_json::from_str(inner) {
            return Ok(value);
        }
    }

    Err(ClassifierError::schema(format!(
        "Classifier response is not valid JSON: {}",
        content
    )))
}

fn extract_fenced_block(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("```")?;
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let end = rest.rfind("```")?;
    Some(rest[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let value = parse_verdict_json("{\"flag\": true}").unwrap();
        assert_eq!(value["flag"], true);
    }

    #[test]
    fn test_parse_fenced_json() {
        let value = parse_verdict_json("```json\n{\"flag\": false}\n```").unwrap();
        assert_eq!(value["flag"], false);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_verdict_json("the text is fine");
        assert!(matches!(result, Err(ClassifierError::Schema(_))));
    }

    #[test]
    fn test_system_prompt_includes_instructions_and_contract() {
        let client = ChatClient::new("test-key", "gemini-2.0-flash").unwrap();
        let classifier = VerdictClassifier::new(client, "Check for mentions of the president.");

        let prompt = classifier.system_prompt();
        assert!(prompt.contains("Check for mentions of the president."));
        assert!(prompt.contains("\"flag\""));
    }

    // Verdict extraction from already-parsed payloads, without the network
    #[test]
    fn test_flag_extraction_requires_boolean() {
        let raw: Value = serde_json::json!({"flag": "yes"});
        assert!(raw.get("flag").and_then(Value::as_bool).is_none());

        let raw: Value = serde_json::json!({"flag": true, "detail": "mentions PM"});
        assert_eq!(raw.get("flag").and_then(Value::as_bool), Some(true));
    }
}
