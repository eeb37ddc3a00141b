//! LLM provider abstraction layer.
//!
//! The expansion engine talks to text-generation backends only through the
//! [`LlmProvider`] trait, so any number of them can be cascaded and tests can
//! inject their own.

mod ollama;
mod openai;
mod provider;
mod types;

pub use ollama::OllamaProvider;
pub use openai::{ApiKeySource, OpenAIProvider};
#[cfg(feature = "mock")]
pub use provider::MockLlmProvider;
pub use provider::{CompletionOptions, LlmError, LlmProvider};
pub use types::{GenerationResponse, Message, MessageRole, TokenUsage};
