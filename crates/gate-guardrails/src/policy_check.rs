//! Classifier-backed policy check

use async_trait::async_trait;
use std::sync::Arc;

use gate_classifier::Classifier;

use crate::{
    guardrail::{GateResult, Guardrail},
    trip::Trip,
    Result,
};

const DEFAULT_REASON: &str = "policy violation";

/// Guardrail that delegates the pass/trip decision to a text classifier
///
/// Calls the classifier exactly once per evaluation. A flagged verdict
/// trips; an unflagged verdict passes. Classifier failures propagate
/// unchanged so the caller never mistakes "could not check" for "safe".
pub struct PolicyCheck {
    name: String,
    classifier: Arc<dyn Classifier>,
    reason: String,
}

impl PolicyCheck {
    /// Create a new policy check
    ///
    /// # Arguments
    /// * `name` - Name of this guardrail, e.g. "prime_minister_check"
    /// * `classifier` - Classifier deciding whether the policy is violated
    pub fn new(name: impl Into<String>, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            name: name.into(),
            classifier,
            reason: DEFAULT_REASON.to_string(),
        }
    }

    /// Set the reason reported when this check trips
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}

#[async_trait]
impl Guardrail for PolicyCheck {
    fn name(&self) -> &str {
        &self.name
    }

    async fn evaluate(&self, text: &str) -> Result<GateResult> {
        let verdict = self.classifier.classify(text).await?;

        if verdict.flag {
            tracing::warn!(guardrail = %self.name, "Policy check tripped");
            return Ok(GateResult::Tripped(Trip::new(
                &self.name,
                &self.reason,
                verdict,
            )));
        }

        Ok(GateResult::Passed(text.to_string()))
    }
}
