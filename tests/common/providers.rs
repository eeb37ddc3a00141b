use async_trait::async_trait;
use shot_prompt_compiler::llm::{CompletionOptions, GenerationResponse, LlmError, LlmProvider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// What a scripted provider answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    /// Response carrying an error field.
    ErrorField(String),
    /// Response with no usable text.
    Empty,
    /// Transport failure.
    Down,
}

/// Provider answering every request with the same scripted reply and
/// counting how many times it was called.
pub struct CountingProvider {
    name: String,
    reply: Reply,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl CountingProvider {
    pub fn new(name: &str, reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new("scripted", Reply::Text(text.to_string()))
    }

    pub fn down(name: &str) -> Arc<Self> {
        Self::new(name, Reply::Down)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for CountingProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn generate_text(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _options: &CompletionOptions,
    ) -> Result<GenerationResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Text(text) => Ok(GenerationResponse::text(text.clone())),
            Reply::ErrorField(message) => Ok(GenerationResponse::failed(message.clone())),
            Reply::Empty => Ok(GenerationResponse {
                data: vec!["   ".to_string()],
                ..Default::default()
            }),
            Reply::Down => Err(LlmError::Connection("connection refused".to_string())),
        }
    }

    async fn health_check(&self) -> Result<(), LlmError> {
        match self.reply {
            Reply::Down => Err(LlmError::Connection("connection refused".to_string())),
            _ => Ok(()),
        }
    }
}
