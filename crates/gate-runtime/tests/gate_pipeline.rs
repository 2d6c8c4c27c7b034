//! End-to-end tests for the gate pipeline
//!
//! These tests drive the full input-check / process / output-check flow
//! with deterministic classifier and handler stand-ins.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gate_classifier::{ClassificationVerdict, Classifier, ClassifierError};
use gate_core::config::ClassifierSettings;
use gate_guardrails::PolicyCheck;
use gate_runtime::{Gate, Handler, Result, RunOutcome};

/// Classifier with a fixed verdict
struct StaticClassifier {
    flag: bool,
}

#[async_trait]
impl Classifier for StaticClassifier {
    async fn classify(&self, _text: &str) -> gate_classifier::Result<ClassificationVerdict> {
        Ok(ClassificationVerdict {
            flag: self.flag,
            raw: serde_json::json!({"flag": self.flag}),
        })
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Classifier that flags text containing a phrase
struct PhraseClassifier {
    phrase: &'static str,
}

#[async_trait]
impl Classifier for PhraseClassifier {
    async fn classify(&self, text: &str) -> gate_classifier::Result<ClassificationVerdict> {
        let flag = text.to_lowercase().contains(self.phrase);
        Ok(ClassificationVerdict {
            flag,
            raw: serde_json::json!({"flag": flag}),
        })
    }

    fn name(&self) -> &str {
        "phrase"
    }
}

/// Classifier whose backend is unreachable
struct UnreachableClassifier;

#[async_trait]
impl Classifier for UnreachableClassifier {
    async fn classify(&self, _text: &str) -> gate_classifier::Result<ClassificationVerdict> {
        Err(ClassifierError::api("connection refused"))
    }

    fn name(&self) -> &str {
        "unreachable"
    }
}

/// Handler that counts invocations and returns a fixed reply
struct RecordingHandler {
    calls: Arc<AtomicUsize>,
    reply: String,
}

impl RecordingHandler {
    fn new(calls: Arc<AtomicUsize>, reply: impl Into<String>) -> Self {
        Self {
            calls,
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Handler for RecordingHandler {
    async fn handle(&self, _input: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[tokio::test]
async fn flagged_input_blocks_and_skips_processing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Gate::builder()
        .input_guardrail(PolicyCheck::new(
            "input_check",
            Arc::new(StaticClassifier { flag: true }),
        ))
        .handler(RecordingHandler::new(Arc::clone(&calls), "reply"))
        .build()
        .unwrap();

    let outcome = gate.run("anything").await.unwrap();

    match outcome {
        RunOutcome::InputBlocked(trip) => {
            assert_eq!(trip.guardrail, "input_check");
            assert_eq!(trip.reason, "policy violation");
        }
        other => panic!("expected InputBlocked, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0, "handler must never run");
}

#[tokio::test]
async fn clean_input_invokes_processing_exactly_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Gate::builder()
        .input_guardrail(PolicyCheck::new(
            "input_check",
            Arc::new(StaticClassifier { flag: false }),
        ))
        .handler(RecordingHandler::new(Arc::clone(&calls), "reply"))
        .build()
        .unwrap();

    let outcome = gate.run("anything").await.unwrap();

    assert!(outcome.is_completed());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn flagged_output_is_withheld() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Gate::builder()
        .output_guardrail(PolicyCheck::new(
            "output_check",
            Arc::new(StaticClassifier { flag: true }),
        ))
        .handler(RecordingHandler::new(
            Arc::clone(&calls),
            "the president is ...",
        ))
        .build()
        .unwrap();

    let outcome = gate.run("anything").await.unwrap();

    match &outcome {
        RunOutcome::OutputBlocked(trip) => assert_eq!(trip.guardrail, "output_check"),
        other => panic!("expected OutputBlocked, got {:?}", other),
    }
    // The produced text is never exposed, only the trip
    assert!(outcome.output().is_none());
}

#[tokio::test]
async fn same_text_yields_same_outcome_variant() {
    let gate = Gate::builder()
        .input_guardrail(PolicyCheck::new(
            "input_check",
            Arc::new(PhraseClassifier {
                phrase: "prime minister",
            }),
        ))
        .handler(RecordingHandler::new(Arc::new(AtomicUsize::new(0)), "reply"))
        .build()
        .unwrap();

    let first = gate.run("Who is the prime minister?").await.unwrap();
    let second = gate.run("Who is the prime minister?").await.unwrap();

    assert!(matches!(first, RunOutcome::InputBlocked(_)));
    assert!(matches!(second, RunOutcome::InputBlocked(_)));
}

#[tokio::test]
async fn president_question_passes_prime_minister_policy() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Gate::builder()
        .input_guardrail(PolicyCheck::new(
            "prime_minister_check",
            Arc::new(PhraseClassifier {
                phrase: "prime minister",
            }),
        ))
        .handler(RecordingHandler::new(
            Arc::clone(&calls),
            "Asif Ali Zardari is the president of Pakistan.",
        ))
        .build()
        .unwrap();

    let outcome = gate
        .run("Hi, tell me who is the president of Pakistan")
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(outcome.is_completed());
    assert_eq!(
        outcome.output(),
        Some("Asif Ali Zardari is the president of Pakistan.")
    );
}

#[tokio::test]
async fn classifier_failure_is_an_error_not_a_pass() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Gate::builder()
        .input_guardrail(PolicyCheck::new(
            "input_check",
            Arc::new(UnreachableClassifier),
        ))
        .handler(RecordingHandler::new(Arc::clone(&calls), "reply"))
        .build()
        .unwrap();

    let result = gate.run("anything").await;

    assert!(result.is_err(), "transport failure must propagate");
    assert_eq!(
        calls.load(Ordering::SeqCst),
        0,
        "processing must not run without a safety determination"
    );
}

#[tokio::test]
async fn output_classifier_failure_withholds_output() {
    let gate = Gate::builder()
        .output_guardrail(PolicyCheck::new(
            "output_check",
            Arc::new(UnreachableClassifier),
        ))
        .handler(RecordingHandler::new(Arc::new(AtomicUsize::new(0)), "secret"))
        .build()
        .unwrap();

    let result = gate.run("anything").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn both_sides_check_independently() {
    // Input side flags prime-minister mentions, output side flags president
    // mentions; the two policies are independent.
    let gate = Gate::builder()
        .input_guardrail(PolicyCheck::new(
            "prime_minister_check",
            Arc::new(PhraseClassifier {
                phrase: "prime minister",
            }),
        ))
        .output_guardrail(PolicyCheck::new(
            "president_check",
            Arc::new(PhraseClassifier { phrase: "president" }),
        ))
        .handler(RecordingHandler::new(
            Arc::new(AtomicUsize::new(0)),
            "The president of Pakistan in 2023 was Arif Alvi.",
        ))
        .build()
        .unwrap();

    let outcome = gate.run("Who leads Pakistan?").await.unwrap();

    match outcome {
        RunOutcome::OutputBlocked(trip) => assert_eq!(trip.guardrail, "president_check"),
        other => panic!("expected OutputBlocked, got {:?}", other),
    }
}

#[test]
fn missing_secret_fails_before_any_request() {
    let settings = ClassifierSettings {
        api_key_env: "GATE_PIPELINE_TEST_UNSET_KEY".to_string(),
        ..Default::default()
    };

    let result = settings.resolve_api_key();
    assert!(result.is_err(), "startup must fail fast without the secret");
}
