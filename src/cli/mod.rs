//! CLI argument parsing and command handling

use crate::credentials;
use crate::output::JsonExporter;
use crate::prompt;
use crate::providers::{OpenRouterDispatcher, MODEL_CATALOG};
use crate::report;
use crate::runner::{
    Action, ComparisonRunner, RunInput, ValidationError, MAX_TOKENS_RANGE, TEMPERATURE_RANGE,
};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// model-duel - side-by-side response and latency comparison for hosted LLMs
#[derive(Parser, Debug)]
#[command(name = "model-duel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First model to query
    #[arg(long, default_value = "qwen/qwen3-32b", value_parser = parse_model)]
    pub first_model: String,

    /// Second model to query
    #[arg(long, default_value = "qwen/qwen3-14b", value_parser = parse_model)]
    pub second_model: String,

    /// Prompt text to send
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Read the prompt from a file instead
    #[arg(long, conflicts_with = "prompt")]
    pub prompt_file: Option<PathBuf>,

    /// Maximum tokens in the response (50-2000)
    #[arg(long, default_value = "200", value_parser = parse_max_tokens)]
    pub max_tokens: u32,

    /// Temperature for sampling (0.0-2.0)
    #[arg(long, default_value = "0.7", value_parser = parse_temperature)]
    pub temperature: f32,

    /// OpenRouter API key (falls back to the OPENROUTER_API_KEY variable)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Write the run's records to a JSON file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The three trigger actions; comparing both models is the default
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Command {
    /// Query both models and compare their responses
    Compare,
    /// Query a single model
    Test {
        /// Which of the two selected models to query
        #[arg(value_enum)]
        slot: ModelSlot,
    },
}

/// Selector for one of the two configured models
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModelSlot {
    /// The model given by --first-model
    First,
    /// The model given by --second-model
    Second,
}

fn parse_model(s: &str) -> Result<String, String> {
    if MODEL_CATALOG.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "unknown model '{s}', expected one of: {}",
            MODEL_CATALOG.join(", ")
        ))
    }
}

fn parse_max_tokens(s: &str) -> Result<u32, String> {
    let value: u32 = s.parse().map_err(|_| format!("invalid max tokens: {s}"))?;
    if MAX_TOKENS_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(format!("max tokens must be between 50 and 2000, got {value}"))
    }
}

fn parse_temperature(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("invalid temperature: {s}"))?;
    if TEMPERATURE_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(format!("temperature must be between 0.0 and 2.0, got {value}"))
    }
}

impl Cli {
    /// Execute the selected action end to end
    pub async fn run(&self) -> Result<()> {
        let action = match self.command {
            None | Some(Command::Compare) => Action::Compare,
            Some(Command::Test {
                slot: ModelSlot::First,
            }) => Action::TestFirst,
            Some(Command::Test {
                slot: ModelSlot::Second,
            }) => Action::TestSecond,
        };

        // 1. Resolve the credential; nothing is dispatched without one
        let credential = match credentials::resolve(self.api_key.clone()) {
            Some(credential) => credential,
            None => return Err(ValidationError::MissingCredential.into()),
        };
        tracing::debug!(source = ?credential.source(), "resolved API credential");

        // 2. Load the prompt
        let prompt_text = prompt::load_prompt(self.prompt.clone(), self.prompt_file.as_deref())?;

        let input = RunInput {
            first_model: self.first_model.clone(),
            second_model: self.second_model.clone(),
            prompt: prompt_text,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        self.print_banner(action);

        // 3. Build the dispatcher and runner
        let dispatcher = OpenRouterDispatcher::new(credential.into_token())?;
        let runner = ComparisonRunner::new(dispatcher);

        // 4. Run the action behind a spinner
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        spinner.set_message(match action {
            Action::Compare => "Comparing models...".to_string(),
            Action::TestFirst => format!("Testing {}...", input.first_model),
            Action::TestSecond => format!("Testing {}...", input.second_model),
        });
        spinner.enable_steady_tick(Duration::from_millis(100));

        let run_result = runner.run(action, &input).await;
        spinner.finish_and_clear();
        let outcome = run_result?;

        // 5. Render the report
        println!("{}", report::render(&outcome));

        // 6. Export if requested
        if let Some(path) = &self.json {
            JsonExporter::export(&outcome, path)?;
            println!("✓ JSON exported to: {}", path.display());
        }

        Ok(())
    }

    fn print_banner(&self, action: Action) {
        let action_label = match action {
            Action::Compare => "compare both models",
            Action::TestFirst => "test first model",
            Action::TestSecond => "test second model",
        };

        println!("\n{}", "=".repeat(70));
        println!("   model-duel - AI Model Comparison");
        println!("{}", "=".repeat(70));
        println!();
        println!("Configuration:");
        println!("  First model:   {}", self.first_model);
        println!("  Second model:  {}", self.second_model);
        println!("  Max tokens:    {}", self.max_tokens);
        println!("  Temperature:   {}", self.temperature);
        println!("  Action:        {action_label}");
        println!("{}", "=".repeat(70));
        println!();
    }
}
