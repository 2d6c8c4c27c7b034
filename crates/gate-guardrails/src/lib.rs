//! Gate Guardrails
//!
//! Policy checks applied to text flowing through a pipeline. Each guardrail
//! produces a pass/trip verdict; a trip halts further processing.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use gate_classifier::{ChatClient, VerdictClassifier};
//! use gate_guardrails::{GuardrailChain, PolicyCheck};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ChatClient::new("api-key", "gemini-2.0-flash")?;
//! let classifier = VerdictClassifier::new(
//!     client,
//!     "You check if the user is asking about the prime minister or not.",
//! );
//!
//! let chain = GuardrailChain::new()
//!     .with_guardrail(PolicyCheck::new("prime_minister_check", Arc::new(classifier)));
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod error;
pub mod guardrail;
pub mod policy_check;
pub mod trip;

// Re-exports
pub use chain::GuardrailChain;
pub use error::{GuardrailError, Result};
pub use guardrail::{GateResult, Guardrail};
pub use policy_check::PolicyCheck;
pub use trip::Trip;
