//! Gate Classifier
//!
//! Classification calls for the textgate policy gate. A piece of text is
//! sent to a small, single-purpose classification model and comes back as
//! a structured boolean verdict.
//!
//! # Example
//!
//! ```no_run
//! use gate_classifier::{ChatClient, Classifier, VerdictClassifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChatClient::new("api-key", "gemini-2.0-flash")?;
//!     let classifier = VerdictClassifier::new(
//!         client,
//!         "You check if the user is asking about the prime minister or not.",
//!     );
//!
//!     let verdict = classifier.classify("Who is the prime minister?").await?;
//!     println!("flagged: {}", verdict.flag);
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod classifier;
pub mod error;
pub mod types;

// Re-exports
pub use chat::ChatClient;
pub use classifier::{Classifier, VerdictClassifier};
pub use error::{ClassifierError, Result};
pub use types::{ClassificationVerdict, Message, Role};
