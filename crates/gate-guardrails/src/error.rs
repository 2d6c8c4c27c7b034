//! Error types for guardrails

use gate_classifier::ClassifierError;
use gate_core::CoreError;

/// Result type for guardrail operations
pub type Result<T> = std::result::Result<T, GuardrailError>;

/// Errors that can occur in guardrail operations
///
/// A guardrail that cannot reach a verdict fails with an error; it never
/// reports a pass it did not make.
#[derive(Debug, thiserror::Error)]
pub enum GuardrailError {
    /// Classification call failed
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Generic evaluation error
    #[error("Guardrail error: {0}")]
    Evaluation(String),

    /// Generic error from gate-core
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl GuardrailError {
    /// Create an evaluation error
    pub fn evaluation<S: Into<String>>(msg: S) -> Self {
        Self::Evaluation(msg.into())
    }
}
