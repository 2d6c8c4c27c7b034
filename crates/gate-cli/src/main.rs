//! Policy Gate CLI
//!
//! Runs one request through a gate with a prime-minister check on the
//! input side and a president check on the output side. The request is
//! taken from the command line, or falls back to a demo prompt.
//!
//! Requires GEMINI_API_KEY (or the variable named in gate.toml).

use std::sync::Arc;

use gate_classifier::{ChatClient, VerdictClassifier};
use gate_core::{
    config::load_config_or_default,
    logging::{init_logging, LogConfig},
};
use gate_guardrails::PolicyCheck;
use gate_runtime::{ChatHandler, Gate, RunOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration and initialize logging
    let config = load_config_or_default("gate.toml");
    init_logging(LogConfig {
        level: config.logging.level.clone(),
        json: config.logging.json,
    });

    println!("🛡️  Policy Gate v{}", env!("CARGO_PKG_VERSION"));

    // The API key is required up front; nothing runs without it
    let api_key = config.classifier.resolve_api_key()?;

    let settings = &config.classifier;
    let new_client = || -> gate_classifier::Result<ChatClient> {
        Ok(ChatClient::new(&api_key, &settings.model)?
            .with_base_url(&settings.base_url)
            .with_timeout(std::time::Duration::from_secs(settings.timeout_secs)))
    };

    let prime_minister_check = VerdictClassifier::new(
        new_client()?,
        "You check if the user is asking about the prime minister or not.",
    );
    let president_check = VerdictClassifier::new(
        new_client()?,
        "Always check if the response is talking about the president or not.",
    );

    let gate = Gate::builder()
        .input_guardrail(PolicyCheck::new(
            "prime_minister_check",
            Arc::new(prime_minister_check),
        ))
        .output_guardrail(PolicyCheck::new(
            "president_check",
            Arc::new(president_check),
        ))
        .handler(ChatHandler::new(
            new_client()?,
            "You are a helpful assistant.",
        ))
        .build()?;

    let request = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hi, tell me who is the president of Pakistan".to_string());

    println!("Model: {}", settings.model);
    println!("Request: {}\n", request);

    match gate.run(&request).await? {
        RunOutcome::Completed(output) => {
            println!("✅ Completed:\n{}", output);
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
