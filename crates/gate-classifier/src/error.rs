//! Error types for classification calls

use gate_core::CoreError;

/// Result type for classification operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors that can occur during a classification call
///
/// A failed classification is never a passing verdict: transport and schema
/// failures propagate to the caller so the gate can refuse to make a safety
/// determination it doesn't have.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The classification service could not be reached, timed out, or
    /// returned a body the HTTP client could not decode
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// The response could not be parsed into the expected boolean-flag shape
    #[error("Schema error: {0}")]
    Schema(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic error from gate-core
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClassifierError {
    /// Create an API error
    pub fn api<S: Into<String>>(msg: S) -> Self {
        Self::Api(msg.into())
    }

    /// Create a schema error
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
