//! Output Gate Demo
//!
//! Lets the assistant answer, then withholds replies that mention the
//! president. Requires GEMINI_API_KEY.
//!
//! Run with:
//! ```bash
//! cargo run -p gate-runtime --example output_gate
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

    let president_check = VerdictClassifier::new(
        checker_client,
        "Always check if the response is talking about the president or not.",
    );

    let gate = Gate::builder()
        .output_guardrail(PolicyCheck::new(
            "president_check",
            Arc::new(president_check),
        ))
        .handler(ChatHandler::new(
            assistant_client,
            "If the user is asking about the president, also tell them about the prime minister.",
        ))
        .build()?;

    let request = "Who was the President of Pakistan in 2023?";
    println!("🛡️  Output gate demo\n");
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
