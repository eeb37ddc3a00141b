//! Client for chat-completion APIs in the OpenAI wire format
//! (OpenAI itself, OpenRouter, vLLM, llama.cpp server, ...).

use super::provider::{map_request_error, CompletionOptions, LlmError, LlmProvider};
use super::types::{GenerationResponse, Message, TokenUsage};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

const KEY_COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the bearer token comes from.
#[derive(Debug, Clone)]
pub enum ApiKeySource {
    None,
    Static(String),
    /// Run through `sh -c` before every request; stdout is the key.
    Command(String),
}

impl ApiKeySource {
    async fn resolve(&self) -> Result<Option<String>, LlmError> {
        match self {
            ApiKeySource::None => Ok(None),
            ApiKeySource::Static(key) => Ok(Some(key.clone())),
            ApiKeySource::Command(cmd) => run_key_command(cmd).await.map(Some),
        }
    }
}

async fn run_key_command(cmd: &str) -> Result<String, LlmError> {
    debug!(command = %cmd, "Resolving API key from command");

    let Ok(spawned) = tokio::time::timeout(
        KEY_COMMAND_TIMEOUT,
        Command::new("sh").arg("-c").arg(cmd).output(),
    )
    .await
    else {
        warn!(command = %cmd, "Key command timed out");
        return Err(LlmError::Timeout);
    };

    let output = spawned.map_err(|e| {
        warn!(command = %cmd, error = %e, "Key command could not be started");
        LlmError::Connection(format!("key command could not be started: {}", e))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(command = %cmd, status = %output.status, stderr = %stderr, "Key command failed");
        return Err(LlmError::Connection(format!(
            "key command exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let key = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if key.is_empty() {
        return Err(LlmError::Connection("key command printed nothing".to_string()));
    }
    Ok(key)
}

pub struct OpenAIProvider {
    client: Client,
    name: String,
    base_url: String,
    model: String,
    key: ApiKeySource,
}

impl OpenAIProvider {
    /// `base_url` includes the version segment, e.g. `https://api.openai.com/v1`.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, api_key: Option<String>) -> Self {
        let key = api_key.map_or(ApiKeySource::None, ApiKeySource::Static);
        Self::with_key_source(base_url, model, key)
    }

    /// Create a provider whose API key is produced by a shell command run
    /// before each request.
    pub fn with_key_command(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key_command: String,
    ) -> Self {
        Self::with_key_source(base_url, model, ApiKeySource::Command(api_key_command))
    }

    pub fn with_key_source(
        base_url: impl Into<String>,
        model: impl Into<String>,
        key: ApiKeySource,
    ) -> Self {
        Self {
            client: Client::new(),
            name: "openai".to_string(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            key,
        }
    }

    /// Override the name recorded on expansion results.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    async fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, LlmError> {
        Ok(match self.key.resolve().await? {
            Some(key) => request.bearer_auth(key),
            None => request,
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_text(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &CompletionOptions,
    ) -> Result<GenerationResponse, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = OpenAIChatRequest {
            model: self.model.clone(),
            messages: Message::conversation(system_prompt, user_prompt)
                .iter()
                .map(OpenAIMessage::from)
                .collect(),
            temperature: Some(options.temperature),
            max_tokens: options.max_tokens,
        };

        debug!(
            model = %self.model,
            system_len = system_prompt.len(),
            user_len = user_prompt.len(),
            "Sending generation request to OpenAI-compatible API"
        );

        let response = self
            .authorized(self.client.post(&url).json(&request))
            .await?
            .timeout(options.timeout)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimited);
        }
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let generation = response
            .json::<OpenAIChatResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("chat completion body: {}", e)))?
            .into_generation();
        debug!(
            candidates = generation.data.len(),
            total_tokens = generation.total_tokens,
            "Received generation response from OpenAI-compatible API"
        );
        Ok(generation)
    }

    async fn health_check(&self) -> Result<(), LlmError> {
        let url = format!("{}/models", self.base_url);

        let response = self
            .authorized(self.client.get(&url).timeout(Duration::from_secs(5)))
            .await?
            .send()
            .await
            .map_err(map_request_error)?;

        match response.status() {
            status if status.is_success() => Ok(()),
            status => Err(LlmError::Api {
                status: status.as_u16(),
                message: format!("GET {} failed", url),
            }),
        }
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

impl From<&Message> for OpenAIMessage {
    fn from(msg: &Message) -> Self {
        OpenAIMessage {
            role: msg.role.as_str().to_string(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
    error: Option<OpenAIError>,
}

impl OpenAIChatResponse {
    fn into_generation(self) -> GenerationResponse {
        let usage = self
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        GenerationResponse {
            data: self
                .choices
                .into_iter()
                .filter_map(|choice| choice.message.content)
                .collect(),
            error: self.error.map(|e| e.message),
            total_tokens: usage.total_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAIError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_conversion() {
        let msg = Message::user("Hello");
        let openai: OpenAIMessage = (&msg).into();
        assert_eq!(openai.role, "user");
        assert_eq!(openai.content, "Hello");
    }

    #[test]
    fn test_response_into_generation() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "[SUBJECT: Mara]"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;
        let parsed: OpenAIChatResponse = serde_json::from_str(body).unwrap();
        let generation = parsed.into_generation();

        assert_eq!(generation.data, vec!["[SUBJECT: Mara]".to_string()]);
        assert_eq!(generation.total_tokens, 15);
        assert!(generation.error.is_none());
    }

    #[test]
    fn test_error_body_becomes_soft_failure() {
        let body = r#"{"error": {"message": "model overloaded", "type": "server_error"}}"#;
        let parsed: OpenAIChatResponse = serde_json::from_str(body).unwrap();
        let generation = parsed.into_generation();

        assert!(generation.data.is_empty());
        assert_eq!(generation.error.as_deref(), Some("model overloaded"));
        assert!(generation.usable_text().is_none());
    }

    #[tokio::test]
    async fn test_static_and_command_keys() {
        assert_eq!(ApiKeySource::None.resolve().await.unwrap(), None);
        assert_eq!(
            ApiKeySource::Static("sk-test".to_string()).resolve().await.unwrap(),
            Some("sk-test".to_string())
        );
        assert_eq!(
            ApiKeySource::Command("echo rotated-key".to_string())
                .resolve()
                .await
                .unwrap(),
            Some("rotated-key".to_string())
        );
        assert!(ApiKeySource::Command("exit 1".to_string())
            .resolve()
            .await
            .is_err());
    }
}
