//! Gate enforcement pipeline

use std::sync::Arc;

use gate_guardrails::{GateResult, Guardrail, GuardrailChain, Trip};

use crate::{error::GateError, handler::Handler, Result};

/// Final outcome of running a request through the gate
///
/// Trips are expected, frequent states, reported as values rather than
/// raised from deep call stacks. Infrastructure failures surface as `Err`
/// from [`Gate::run`] instead.
#[derive(Debug)]
pub enum RunOutcome {
    /// Both checks passed; carries the produced output
    Completed(String),
    /// The input-side chain tripped; processing never ran
    InputBlocked(Trip),
    /// The output-side chain tripped; the produced text is withheld
    OutputBlocked(Trip),
}

impl RunOutcome {
    /// Whether the request completed
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }

    /// The produced output, if the request completed
    pub fn output(&self) -> Option<&str> {
        match self {
            RunOutcome::Completed(output) => Some(output),
            _ => None,
        }
    }

    /// The trip record, if the request was blocked
    pub fn trip(&self) -> Option<&Trip> {
        match self {
            RunOutcome::InputBlocked(trip) | RunOutcome::OutputBlocked(trip) => Some(trip),
            RunOutcome::Completed(_) => None,
        }
    }
}

/// The gate: guardrail chains around a processing delegate
///
/// Holds no mutable state. `run` borrows `&self`, so independent requests
/// may be processed concurrently without locking, provided the classifier
/// and handler are themselves safe for concurrent use.
pub struct Gate {
    input_guardrails: GuardrailChain,
    output_guardrails: GuardrailChain,
    handler: Arc<dyn Handler>,
}

impl Gate {
    /// Create a new gate builder
    pub fn builder() -> GateBuilder {
        GateBuilder::new()
    }

    /// Run a request through the gate
    ///
    /// Phases run in strict order within a request:
    /// 1. the input chain evaluates the raw request; a trip ends the
    ///    request as [`RunOutcome::InputBlocked`] and the handler never runs;
    /// 2. the handler produces a candidate output;
    /// 3. the output chain evaluates the candidate; a trip ends the request
    ///    as [`RunOutcome::OutputBlocked`] and the candidate is withheld.
    ///
    /// A guardrail that fails to reach a verdict aborts the request with an
    /// error: inability to make a safety determination is never "safe".
    pub async fn run(&self, request: &str) -> Result<RunOutcome> {
        tracing::info!(handler = %self.handler.name(), "Gate received request");

        // Input check
        tracing::debug!("Checking input");
        if let GateResult::Tripped(trip) = self.input_guardrails.evaluate(request).await? {
            tracing::warn!(guardrail = %trip.guardrail, "Input blocked");
            return Ok(RunOutcome::InputBlocked(trip));
        }

        // Processing
        tracing::debug!(handler = %self.handler.name(), "Input passed, processing");
        let candidate = self.handler.handle(request).await?;

        // Output check
        tracing::debug!("Checking output");
        if let GateResult::Tripped(trip) = self.output_guardrails.evaluate(&candidate).await? {
            tracing::warn!(guardrail = %trip.guardrail, "Output blocked");
            return Ok(RunOutcome::OutputBlocked(trip));
        }

        tracing::info!("Request completed");
        Ok(RunOutcome::Completed(candidate))
    }

    /// Number of input-side guardrails
    pub fn input_guardrail_count(&self) -> usize {
        self.input_guardrails.len()
    }

    /// Number of output-side guardrails
    pub fn output_guardrail_count(&self) -> usize {
        self.output_guardrails.len()
    }
}

/// Builder for constructing a [`Gate`]
pub struct GateBuilder {
    input_guardrails: GuardrailChain,
    output_guardrails: GuardrailChain,
    handler: Option<Arc<dyn Handler>>,
}

impl GateBuilder {
    /// Create a new gate builder
    pub fn new() -> Self {
        Self {
            input_guardrails: GuardrailChain::new(),
            output_guardrails: GuardrailChain::new(),
            handler: None,
        }
    }

    /// Attach an input-side guardrail
    ///
    /// May be called repeatedly; guardrails are evaluated in attachment
    /// order. Zero guardrails is valid: that side of the gate passes
    /// everything.
    pub fn input_guardrail<G: Guardrail + 'static>(mut self, guardrail: G) -> Self {
        self.input_guardrails = self.input_guardrails.with_guardrail(guardrail);
        self
    }

    /// Attach an output-side guardrail
    pub fn output_guardrail<G: Guardrail + 'static>(mut self, guardrail: G) -> Self {
        self.output_guardrails = self.output_guardrails.with_guardrail(guardrail);
        self
    }

    /// Set the processing delegate
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Build the gate
    pub fn build(self) -> Result<Gate> {
        let handler = self
            .handler
            .ok_or_else(|| GateError::config("Processing handler not set"))?;

        Ok(Gate {
            input_guardrails: self.input_guardrails,
            output_guardrails: self.output_guardrails,
            handler,
        })
    }
}

impl Default for GateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
