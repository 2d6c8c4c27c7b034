//! Guardrail trait definition

use async_trait::async_trait;

use crate::{Result, Trip};

/// Outcome of a single guardrail evaluation
///
/// Exactly one variant per evaluation, consumed once by the caller.
/// `Tripped` is produced if and only if the underlying verdict flagged
/// the text.
#[derive(Debug, Clone)]
pub enum GateResult {
    /// The text passed; carries the text onward
    Passed(String),
    /// A guardrail tripped; carries the trip record
    Tripped(Trip),
}

impl GateResult {
    /// Whether the evaluation passed
    pub fn is_passed(&self) -> bool {
        matches!(self, GateResult::Passed(_))
    }

    /// Whether the evaluation tripped
    pub fn is_tripped(&self) -> bool {
        matches!(self, GateResult::Tripped(_))
    }

    /// The trip record, if tripped
    pub fn trip(&self) -> Option<&Trip> {
        match self {
            GateResult::Tripped(trip) => Some(trip),
            GateResult::Passed(_) => None,
        }
    }
}

/// Trait for implementing guardrails
///
/// Guardrails evaluate text flowing through the gate and decide pass/trip.
/// Evaluation is stateless: nothing persists across calls, and the same
/// text against a deterministic backend yields the same result.
///
/// Errors are propagated, not swallowed. A guardrail that could not reach
/// a verdict must not be treated as having passed.
#[async_trait]
pub trait Guardrail: Send + Sync {
    /// Get the name of this guardrail
    fn name(&self) -> &str;

    /// Evaluate a piece of text
    async fn evaluate(&self, text: &str) -> Result<GateResult>;
}
