//! Guardrail chain for evaluating multiple guardrails in order

use std::sync::Arc;

use crate::{
    guardrail::{GateResult, Guardrail},
    Result,
};

/// Ordered chain of guardrails
///
/// Guardrails are evaluated in attachment order and the chain
/// short-circuits on the first trip. An empty chain passes everything.
#[derive(Clone, Default)]
pub struct GuardrailChain {
    guardrails: Vec<Arc<dyn Guardrail>>,
}

impl GuardrailChain {
    /// Create a new, empty chain
    pub fn new() -> Self {
        Self {
            guardrails: Vec::new(),
        }
    }

    /// Add a guardrail to the chain
    pub fn with_guardrail<G: Guardrail + 'static>(mut self, guardrail: G) -> Self {
        self.guardrails.push(Arc::new(guardrail));
        self
    }

    /// Add an already-shared guardrail to the chain
    pub fn with_shared_guardrail(mut self, guardrail: Arc<dyn Guardrail>) -> Self {
        self.guardrails.push(guardrail);
        self
    }

    /// Get the number of guardrails in the chain
    pub fn len(&self) -> usize {
        self.guardrails.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.guardrails.is_empty()
    }

    /// Evaluate text against the chain
    ///
    /// Returns the first trip encountered, or a pass once every guardrail
    /// has passed. Evaluation errors abort the chain immediately.
    pub async fn evaluate(&self, text: &str) -> Result<GateResult> {
        for guardrail in &self.guardrails {
            match guardrail.evaluate(text).await? {
                GateResult::Tripped(trip) => {
                    tracing::warn!(
                        guardrail = %guardrail.name(),
                        reason = %trip.reason,
                        "Guardrail tripped, halting chain"
                    );
                    return Ok(GateResult::Tripped(trip));
                }
                GateResult::Passed(_) => {
                    tracing::debug!(guardrail = %guardrail.name(), "Guardrail passed");
                }
            }
        }

        Ok(GateResult::Passed(text.to_string()))
    }
}
