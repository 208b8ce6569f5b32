//! Call outcomes and derived statistics
//!
//! Every dispatched request is normalized into a [`CallResult`] before it
//! reaches rendering or export. A result is immutable once constructed; the
//! comparison math in [`Comparison`] reads two finished records and never
//! mutates them.

use serde::{Deserialize, Serialize};

/// Placeholder text substituted when a model returns a blank generation.
///
/// A blank generation is still a successful call; the placeholder lets the
/// report flag it instead of printing nothing.
pub const EMPTY_RESPONSE_PLACEHOLDER: &str = "[Empty response from model]";

/// Derived text statistics for a successful generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Whitespace-separated word count
    pub word_count: usize,
    /// Unicode character count
    pub char_count: usize,
    /// Words generated per second of wall-clock time (0 when elapsed is 0)
    pub words_per_second: f64,
}

impl GenerationStats {
    /// Measure a generation against its elapsed wall-clock time
    pub fn measure(text: &str, elapsed_secs: f64) -> Self {
        let word_count = text.split_whitespace().count();
        let char_count = text.chars().count();
        let words_per_second = if elapsed_secs > 0.0 {
            word_count as f64 / elapsed_secs
        } else {
            0.0
        };
        Self {
            word_count,
            char_count,
            words_per_second,
        }
    }
}

/// Normalized outcome of one generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallResult {
    /// The request returned 200 with a parseable body
    Success {
        /// Generated text (the placeholder when the model returned a blank)
        text: String,
        /// Wall-clock seconds from dispatch to full body receipt
        elapsed_secs: f64,
        /// Derived text statistics
        stats: GenerationStats,
        /// Raw decoded response body, kept for diagnostics
        raw_response: serde_json::Value,
    },
    /// The request failed at the transport, HTTP, or parse layer
    Failure {
        /// Human-readable error message
        error: String,
        /// Wall-clock seconds; 0.0 when the request never completed
        elapsed_secs: f64,
        /// HTTP status code, when a response was received
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
        /// Raw response text, when available
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_body: Option<String>,
    },
}

impl CallResult {
    /// Build a success result, deriving the text statistics
    pub fn success(text: String, elapsed_secs: f64, raw_response: serde_json::Value) -> Self {
        let stats = GenerationStats::measure(&text, elapsed_secs);
        CallResult::Success {
            text,
            elapsed_secs,
            stats,
            raw_response,
        }
    }

    /// Build a failure result
    pub fn failure(
        error: impl Into<String>,
        elapsed_secs: f64,
        status_code: Option<u16>,
        raw_body: Option<String>,
    ) -> Self {
        CallResult::Failure {
            error: error.into(),
            elapsed_secs,
            status_code,
            raw_body,
        }
    }

    /// Whether this is the success variant
    pub fn is_success(&self) -> bool {
        matches!(self, CallResult::Success { .. })
    }

    /// Elapsed wall-clock seconds, present on both variants
    pub fn elapsed_secs(&self) -> f64 {
        match self {
            CallResult::Success { elapsed_secs, .. } | CallResult::Failure { elapsed_secs, .. } => {
                *elapsed_secs
            }
        }
    }

    /// Derived statistics, present only on success
    pub fn stats(&self) -> Option<&GenerationStats> {
        match self {
            CallResult::Success { stats, .. } => Some(stats),
            CallResult::Failure { .. } => None,
        }
    }

    /// Whether this success carries the blank-generation placeholder
    pub fn is_empty_generation(&self) -> bool {
        matches!(self, CallResult::Success { text, .. } if text == EMPTY_RESPONSE_PLACEHOLDER)
    }
}

/// One model's outcome within a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Model identifier the call was issued against
    pub model: String,
    /// Normalized call outcome
    pub result: CallResult,
}

/// All records produced by a single user action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// The prompt submitted to every model in the run
    pub prompt: String,
    /// One record per dispatched call, in dispatch order
    pub records: Vec<RunRecord>,
}

impl RunOutcome {
    /// Head-to-head comparison, present only for a two-model run where both
    /// calls succeeded
    pub fn comparison(&self) -> Option<Comparison> {
        match self.records.as_slice() {
            [first, second] => Comparison::between(first, second),
            _ => None,
        }
    }
}

/// Timing comparison of two successful calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Model with the lower elapsed time (the first model on an exact tie)
    pub faster_model: String,
    /// Relative speed improvement of the faster model, in percent
    pub speed_improvement_pct: f64,
    /// Elapsed seconds for the first model
    pub first_elapsed_secs: f64,
    /// Elapsed seconds for the second model
    pub second_elapsed_secs: f64,
}

impl Comparison {
    /// Compare two records; `None` unless both calls succeeded.
    pub fn between(first: &RunRecord, second: &RunRecord) -> Option<Self> {
        if !first.result.is_success() || !second.result.is_success() {
            return None;
        }

        let first_elapsed_secs = first.result.elapsed_secs();
        let second_elapsed_secs = second.result.elapsed_secs();

        let faster_model = if first_elapsed_secs <= second_elapsed_secs {
            first.model.clone()
        } else {
            second.model.clone()
        };

        let slower = first_elapsed_secs.max(second_elapsed_secs);
        let speed_improvement_pct = if slower > 0.0 {
            (first_elapsed_secs - second_elapsed_secs).abs() / slower * 100.0
        } else {
            0.0
        };

        Some(Self {
            faster_model,
            speed_improvement_pct,
            first_elapsed_secs,
            second_elapsed_secs,
        })
    }
}
