//! Run coordination
//!
//! One user action maps to one [`ComparisonRunner::run`] call: validate the
//! input, then issue the one or two generation requests strictly one after
//! another and hand the records back for rendering. A comparison's total
//! latency is the sum of its two calls; there is no cancellation and no
//! state shared between calls.

use crate::metrics::{RunOutcome, RunRecord};
use crate::providers::{Dispatcher, GenerationRequest};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Allowed range for the max-tokens setting
pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 50..=2000;

/// Allowed range for the temperature setting
pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=2.0;

/// The three user-triggerable actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Query both models and compare the outcomes
    Compare,
    /// Query only the first model
    TestFirst,
    /// Query only the second model
    TestSecond,
}

/// Input for one action, checked before anything is dispatched
#[derive(Debug, Clone)]
pub struct RunInput {
    /// First model identifier
    pub first_model: String,
    /// Second model identifier
    pub second_model: String,
    /// Prompt text
    pub prompt: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// Input problems that block an action before any request is sent
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// No API key was supplied on the command line or via the environment
    #[error("Please enter your OpenRouter API key")]
    MissingCredential,

    /// The prompt is empty or whitespace-only
    #[error("Please enter a prompt to test")]
    EmptyPrompt,

    /// Max tokens outside the form's range
    #[error("max tokens must be between 50 and 2000, got {0}")]
    MaxTokensOutOfRange(u32),

    /// Temperature outside the form's range
    #[error("temperature must be between 0.0 and 2.0, got {0}")]
    TemperatureOutOfRange(f32),
}

impl RunInput {
    /// Check the input against the form constraints
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }
        if !MAX_TOKENS_RANGE.contains(&self.max_tokens) {
            return Err(ValidationError::MaxTokensOutOfRange(self.max_tokens));
        }
        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(ValidationError::TemperatureOutOfRange(self.temperature));
        }
        Ok(())
    }

    fn request_for(&self, model: &str) -> GenerationRequest {
        GenerationRequest {
            model: model.to_string(),
            prompt: self.prompt.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

/// Executes user actions against a dispatcher
pub struct ComparisonRunner<D: Dispatcher> {
    dispatcher: D,
}

impl<D: Dispatcher> ComparisonRunner<D> {
    /// Create a runner over the given dispatcher
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    /// Run one action: validate, then dispatch sequentially.
    ///
    /// When validation fails no request is issued at all.
    pub async fn run(
        &self,
        action: Action,
        input: &RunInput,
    ) -> Result<RunOutcome, ValidationError> {
        input.validate()?;

        let models: Vec<&str> = match action {
            Action::Compare => vec![input.first_model.as_str(), input.second_model.as_str()],
            Action::TestFirst => vec![input.first_model.as_str()],
            Action::TestSecond => vec![input.second_model.as_str()],
        };

        let mut records = Vec::with_capacity(models.len());
        for model in models {
            tracing::info!(model, "querying model");
            let result = self.dispatcher.dispatch(&input.request_for(model)).await;
            tracing::info!(
                model,
                success = result.is_success(),
                elapsed_secs = result.elapsed_secs(),
                "call finished"
            );
            records.push(RunRecord {
                model: model.to_string(),
                result,
            });
        }

        Ok(RunOutcome {
            prompt: input.prompt.clone(),
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::CallResult;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Dispatcher that records every call instead of touching the network
    struct MockDispatcher {
        calls: AtomicUsize,
        models_seen: Mutex<Vec<String>>,
    }

    impl MockDispatcher {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                models_seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Dispatcher for MockDispatcher {
        async fn dispatch(&self, request: &GenerationRequest) -> CallResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.models_seen.lock().unwrap().push(request.model.clone());
            CallResult::success("mock reply".to_string(), 1.0, json!({}))
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    fn input() -> RunInput {
        RunInput {
            first_model: "qwen/qwen3-32b".to_string(),
            second_model: "qwen/qwen3-14b".to_string(),
            prompt: "Say hello".to_string(),
            max_tokens: 200,
            temperature: 0.7,
        }
    }

    #[tokio::test]
    async fn test_compare_dispatches_both_models_in_order() {
        let runner = ComparisonRunner::new(MockDispatcher::new());

        let outcome = runner.run(Action::Compare, &input()).await.unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].model, "qwen/qwen3-32b");
        assert_eq!(outcome.records[1].model, "qwen/qwen3-14b");
        assert_eq!(runner.dispatcher.calls.load(Ordering::SeqCst), 2);

        let seen = runner.dispatcher.models_seen.lock().unwrap();
        assert_eq!(seen.as_slice(), ["qwen/qwen3-32b", "qwen/qwen3-14b"]);
    }

    #[tokio::test]
    async fn test_single_tests_dispatch_one_model() {
        let runner = ComparisonRunner::new(MockDispatcher::new());

        let outcome = runner.run(Action::TestFirst, &input()).await.unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].model, "qwen/qwen3-32b");

        let outcome = runner.run(Action::TestSecond, &input()).await.unwrap();
        assert_eq!(outcome.records[0].model, "qwen/qwen3-14b");

        assert_eq!(runner.dispatcher.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_prompt_blocks_without_dispatch() {
        let runner = ComparisonRunner::new(MockDispatcher::new());

        let mut blank = input();
        blank.prompt = "   ".to_string();

        for action in [Action::Compare, Action::TestFirst, Action::TestSecond] {
            let err = runner.run(action, &blank).await.unwrap_err();
            assert_eq!(err, ValidationError::EmptyPrompt);
        }
        assert_eq!(runner.dispatcher.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_parameter_ranges() {
        let mut out_of_range = input();
        out_of_range.max_tokens = 49;
        assert_eq!(
            out_of_range.validate(),
            Err(ValidationError::MaxTokensOutOfRange(49))
        );

        let mut out_of_range = input();
        out_of_range.max_tokens = 2001;
        assert!(out_of_range.validate().is_err());

        let mut out_of_range = input();
        out_of_range.temperature = 2.5;
        assert_eq!(
            out_of_range.validate(),
            Err(ValidationError::TemperatureOutOfRange(2.5))
        );

        assert!(input().validate().is_ok());
    }
}
