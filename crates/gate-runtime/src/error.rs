//! Error types for gate enforcement

use gate_classifier::ClassifierError;
use gate_core::CoreError;
use gate_guardrails::GuardrailError;

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;

/// Errors that can occur while running a request through the gate
///
/// Policy trips are not errors; they are reported through
/// [`crate::RunOutcome`]. These variants cover infrastructure failures,
/// which terminate the request without a pass/trip determination.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Guardrail evaluation failed
    #[error("Guardrail error: {0}")]
    Guardrail(#[from] GuardrailError),

    /// Classification call failed
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Processing delegate failed
    #[error("Handler error: {0}")]
    Handler(String),

    /// Gate not configured properly
    #[error("Gate configuration error: {0}")]
    Configuration(String),

    /// Generic error from gate-core
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl GateError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a handler error
    pub fn handler<S: Into<String>>(msg: S) -> Self {
        Self::Handler(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = GateError::config("missing handler");
        assert!(matches!(err, GateError::Configuration(_)));
    }

    #[test]
    fn test_classifier_error_conversion() {
        let err = GateError::from(ClassifierError::api("unreachable"));
        assert!(matches!(err, GateError::Classifier(_)));
    }

    #[test]
    fn test_guardrail_error_conversion() {
        let err = GateError::from(GuardrailError::evaluation("no verdict"));
        assert!(err.to_string().contains("no verdict"));
    }
}
