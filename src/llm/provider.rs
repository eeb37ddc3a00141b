//! LLM provider trait definition.

use super::types::GenerationResponse;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Options for a generation request.
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative).
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_tokens: None,
            timeout: Duration::from_secs(120),
        }
    }
}

/// Errors that can occur when interacting with an LLM provider.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Request timeout")]
    Timeout,
}

/// A text-generation backend.
///
/// Implementations connect to different LLM services (Ollama, OpenAI
/// compatible APIs, ...) behind one interface. A backend may also report a
/// soft failure through [`GenerationResponse::error`] instead of `Err`.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name recorded on results (e.g. "ollama", "openai").
    fn name(&self) -> &str;

    /// Model being used.
    fn model(&self) -> &str;

    /// Generate text for a system/user prompt pair.
    async fn generate_text(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &CompletionOptions,
    ) -> Result<GenerationResponse, LlmError>;

    /// Check if the provider is healthy and reachable.
    async fn health_check(&self) -> Result<(), LlmError>;
}

/// Map a transport error the way every client does: timeouts are their own
/// variant, everything else is a connection failure.
pub(crate) fn map_request_error(e: reqwest::Error) -> LlmError {
    if e.is_timeout() {
        LlmError::Timeout
    } else {
        LlmError::Connection(e.to_string())
    }
}
