//! Request dispatch to the routing API
//!
//! Wire types for the chat-completions protocol, the fixed model catalog,
//! and the [`Dispatcher`] trait implemented by the HTTP client in
//! [`openrouter`].

pub mod openrouter;

pub use openrouter::OpenRouterDispatcher;

use crate::metrics::CallResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Models selectable from the comparison surface
pub const MODEL_CATALOG: &[&str] = &[
    "qwen/qwen3-32b",
    "qwen/qwen3-14b",
    "anthropic/claude-3-haiku",
];

/// Parameters for one generation call, built fresh per user action
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Model identifier from the catalog
    pub model: String,
    /// Prompt text
    pub prompt: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// Chat-completion request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Message in a chat conversation
///
/// The role is optional on the wire for responses, so it defaults when
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub role: String,
    pub content: String,
}

/// Chat-completion response body (the subset this tool reads)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

/// A single completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Message,
}

impl From<&GenerationRequest> for ChatRequest {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            model: request.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

/// Trait for generation dispatchers
///
/// A dispatcher returns exactly one [`CallResult`] per request; transport
/// and protocol errors are folded into the result rather than raised.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Issue one generation request and normalize the outcome
    async fn dispatch(&self, request: &GenerationRequest) -> CallResult;

    /// Get the dispatcher name
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_from_generation_request() {
        let request = GenerationRequest {
            model: "qwen/qwen3-32b".to_string(),
            prompt: "Say hello".to_string(),
            max_tokens: 200,
            temperature: 0.7,
        };

        let chat_request = ChatRequest::from(&request);
        assert_eq!(chat_request.model, "qwen/qwen3-32b");
        assert_eq!(chat_request.messages.len(), 1);
        assert_eq!(chat_request.messages[0].role, "user");
        assert_eq!(chat_request.messages[0].content, "Say hello");
        assert_eq!(chat_request.max_tokens, 200);
    }

    #[test]
    fn test_response_message_without_role() {
        let message: Message = serde_json::from_str(r#"{"content": "hi"}"#).unwrap();
        assert_eq!(message.role, "");
        assert_eq!(message.content, "hi");
    }

    #[test]
    fn test_request_body_field_order() {
        let request = GenerationRequest {
            model: "qwen/qwen3-14b".to_string(),
            prompt: "p".to_string(),
            max_tokens: 50,
            temperature: 0.0,
        };
        let body = serde_json::to_string(&ChatRequest::from(&request)).unwrap();
        assert!(body.starts_with(r#"{"model":"#));
        assert!(body.contains(r#""messages":[{"role":"user","content":"p"}]"#));
    }
}
