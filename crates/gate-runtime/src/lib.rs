//! Gate Runtime
//!
//! Ties guardrails and a processing delegate together into an enforced
//! pipeline: input check, then processing, then output check. No phase can
//! be skipped, and a request that doesn't complete exposes only the trip
//! reason, never the payload.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use gate_classifier::{ChatClient, VerdictClassifier};
//! use gate_guardrails::PolicyCheck;
//! use gate_runtime::{ChatHandler, Gate, RunOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChatClient::new("api-key", "gemini-2.0-flash")?;
//!     let checker = VerdictClassifier::new(
//!         ChatClient::new("api-key", "gemini-2.0-flash")?,
//!         "You check if the user is asking about the prime minister or not.",
//!     );
//!
//!     let gate = Gate::builder()
//!         .input_guardrail(PolicyCheck::new("prime_minister_check", Arc::new(checker)))
//!         .handler(ChatHandler::new(client, "You are a helpful assistant."))
//!         .build()?;
//!
//!     match gate.run("Hi, tell me who is the president of Pakistan").await? {
//!         RunOutcome::Completed(output) => println!("{}", output),
//!         RunOutcome::InputBlocked(trip) => println!("input blocked: {}", trip.reason),
//!         RunOutcome::OutputBlocked(trip) => println!("output blocked: {}", trip.reason),
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod gate;
pub mod handler;

// Re-exports
pub use error::{GateError, Result};
pub use gate::{Gate, GateBuilder, RunOutcome};
pub use handler::{ChatHandler, Handler};
