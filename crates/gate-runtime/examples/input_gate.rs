//! Input Gate Demo
//!
//! Blocks prime-minister questions before they reach the assistant.
//! Requires GEMINI_API_KEY.
//!
//! Run with:
//! ```bash
//! cargo run -p gate-runtime --example input_gate
//! ```

use std::sync::Arc;

use gate_classifier::{ChatClient, VerdictClassifier};
use gate_core::config::GateConfig;
use gate_guardrails::PolicyCheck;
use gate_runtime::{ChatHandler, Gate, RunOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GateConfig::default();
    let api_key = config.classifier.resolve_api_key()?;

    let checker_client = ChatClient::new(&api_key, &config.classifier.model)?
        .with_base_url(&config.classifier.base_url);
    let assistant_client = ChatClient::new(&api_key, &config.classifier.model)?
        .with_base_url(&config.classifier.base_url);

    let prime_minister_check = VerdictClassifier::new(
        checker_client,
        "You check if the user is asking about the prime minister or not.",
    );

    let gate = Gate::builder()
        .input_guardrail(PolicyCheck::new(
            "prime_minister_check",
            Arc::new(prime_minister_check),
        ))
        .handler(ChatHandler::new(
            assistant_client,
            "You are a helpful assistant.",
        ))
        .build()?;

    let request = "Hi, tell me who is the president of Pakistan";
    println!("🛡️  Input gate demo\n");
    println!("Request: {}\n", request);

    match gate.run(request).await? {
        RunOutcome::Completed(output) => {
            println!("✅ Passed both checks:\n{}", output);
        }
        RunOutcome::InputBlocked(trip) => {
            println!("❌ Input blocked by {}: {}", trip.guardrail, trip.reason);
        }
        RunOutcome::OutputBlocked(trip) => {
            println!("❌ Output blocked by {}: {}", trip.guardrail, trip.reason);
        }
    }

    Ok(())
}
