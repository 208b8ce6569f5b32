//! OpenRouter dispatcher implementation

use super::{ChatRequest, ChatResponse, Dispatcher, GenerationRequest};
use crate::metrics::{CallResult, EMPTY_RESPONSE_PLACEHOLDER};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";

/// App identification headers OpenRouter asks API consumers to send
const HTTP_REFERER: &str = "https://github.com/model-duel/model-duel";
const APP_TITLE: &str = "model-duel";

/// Fixed per-request timeout; there are no retries past it
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenRouter API dispatcher
#[derive(Debug, Clone)]
pub struct OpenRouterDispatcher {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenRouterDispatcher {
    /// Create a dispatcher against the production endpoint
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, OPENROUTER_API_BASE.to_string())
    }

    /// Create a dispatcher against a custom base URL
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Get the chat completions endpoint URL
    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send the request and read the full body; transport errors bubble out
    async fn execute(&self, request: &ChatRequest) -> reqwest::Result<(u16, String)> {
        let response = self
            .client
            .post(self.chat_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", HTTP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl Dispatcher for OpenRouterDispatcher {
    async fn dispatch(&self, request: &GenerationRequest) -> CallResult {
        let chat_request = ChatRequest::from(request);
        tracing::debug!(model = %request.model, "dispatching chat completion");

        let start = Instant::now();
        match self.execute(&chat_request).await {
            Ok((status, body)) => {
                // Elapsed covers receipt of the full body, on both the
                // success and HTTP-error paths.
                let elapsed_secs = start.elapsed().as_secs_f64();
                normalize_response(status, body, elapsed_secs)
            }
            Err(e) => {
                // A request that never completed reports 0.0 elapsed.
                tracing::warn!(model = %request.model, error = %e, "request failed");
                CallResult::failure(format!("Request failed: {e}"), 0.0, None, None)
            }
        }
    }

    fn name(&self) -> &str {
        "openrouter"
    }
}

/// Normalize a completed HTTP exchange into a call result
fn normalize_response(status: u16, body: String, elapsed_secs: f64) -> CallResult {
    if status != 200 {
        return CallResult::failure(
            format!("Error {status}: {body}"),
            elapsed_secs,
            Some(status),
            Some(body),
        );
    }

    let raw: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            return CallResult::failure(
                format!("Failed to parse response: {e}"),
                elapsed_secs,
                None,
                Some(body),
            );
        }
    };

    let content = match extract_content(&raw) {
        Ok(content) => content,
        Err(reason) => {
            return CallResult::failure(
                format!("Failed to parse response: {reason}"),
                elapsed_secs,
                None,
                Some(body),
            );
        }
    };

    let text = if content.trim().is_empty() {
        EMPTY_RESPONSE_PLACEHOLDER.to_string()
    } else {
        content
    };

    CallResult::success(text, elapsed_secs, raw)
}

/// Pull the first choice's message content out of a decoded body
fn extract_content(raw: &serde_json::Value) -> std::result::Result<String, String> {
    let response: ChatResponse = serde_json::from_value(raw.clone()).map_err(|e| e.to_string())?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| "response contained no choices".to_string())
}
