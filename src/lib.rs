//! model-duel - side-by-side comparison of hosted LLM responses
//!
//! One prompt goes to two selectable models behind the OpenRouter routing
//! API; the two normalized outcomes are rendered next to each other with
//! elapsed-time and word-rate statistics.
//!
//! # Architecture
//!
//! - **Providers**: the OpenRouter HTTP dispatcher and its wire types
//! - **Metrics**: normalized call outcomes and derived text statistics
//! - **Runner**: per-action validation and strictly sequential dispatch
//! - **Report**: plain-text rendering of one or two outcomes
//! - **Output**: JSON export of a run's records
//!
//! # Example
//!
//! ```rust,no_run
//! use model_duel::providers::OpenRouterDispatcher;
//! use model_duel::{Action, ComparisonRunner, RunInput};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let dispatcher = OpenRouterDispatcher::new("your-api-key".to_string())?;
//!     let runner = ComparisonRunner::new(dispatcher);
//!
//!     let input = RunInput {
//!         first_model: "qwen/qwen3-32b".to_string(),
//!         second_model: "qwen/qwen3-14b".to_string(),
//!         prompt: "Say hello".to_string(),
//!         max_tokens: 200,
//!         temperature: 0.7,
//!     };
//!
//!     let outcome = runner.run(Action::Compare, &input).await?;
//!     println!("{}", model_duel::report::render(&outcome));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod credentials;
pub mod metrics;
pub mod output;
pub mod prompt;
pub mod providers;
pub mod report;
pub mod runner;

// Re-export commonly used types
pub use metrics::{CallResult, Comparison, GenerationStats, RunOutcome, RunRecord};
pub use output::JsonExporter;
pub use providers::{Dispatcher, GenerationRequest, OpenRouterDispatcher};
pub use runner::{Action, ComparisonRunner, RunInput, ValidationError};
