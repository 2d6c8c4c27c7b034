//! Guardrail trip records

use gate_classifier::ClassificationVerdict;
use serde::{Deserialize, Serialize};

/// A tripped guardrail
///
/// Records which guardrail tripped, why, and the verdict that tripped it.
/// This is all a caller ever sees of a blocked request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Name of the guardrail that tripped
    pub guardrail: String,

    /// Human-readable reason
    pub reason: String,

    /// The classification verdict behind the trip
    pub verdict: ClassificationVerdict,

    /// When the trip occurred
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Trip {
    /// Create a new trip record
    pub fn new(
        guardrail: impl Into<String>,
        reason: impl Into<String>,
        verdict: ClassificationVerdict,
    ) -> Self {
        Self {
            guardrail: guardrail.into(),
            reason: reason.into(),
            verdict,
            timestamp: chrono::Utc::now(),
        }
    }
}
