//! Ollama LLM provider implementation.

use super::provider::{map_request_error, CompletionOptions, LlmError, LlmProvider};
use super::types::{GenerationResponse, Message, TokenUsage};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Ollama LLM provider.
///
/// Connects to an Ollama server and uses its `/api/chat` endpoint with
/// streaming disabled.
pub struct OllamaProvider {
    client: Client,
    name: String,
    base_url: String,
    model: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the Ollama server (e.g., "http://localhost:11434").
    /// * `model` - Model to use (e.g., "llama3.1:8b").
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            name: "ollama".to_string(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// Override the name recorded on expansion results.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn build_request(&self, messages: &[Message], options: &CompletionOptions) -> OllamaChatRequest {
        OllamaChatRequest {
            model: self.model.clone(),
            messages: messages.iter().map(OllamaMessage::from).collect(),
            stream: false,
            options: Some(OllamaOptions {
                temperature: Some(options.temperature),
                num_predict: options.max_tokens.map(|n| n as i32),
            }),
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
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
        let url = format!("{}/api/chat", self.base_url);
        let request = self.build_request(&Message::conversation(system_prompt, user_prompt), options);

        debug!(
            model = %self.model,
            system_len = system_prompt.len(),
            user_len = user_prompt.len(),
            "Sending generation request to Ollama"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(options.timeout)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let generation = response
            .json::<OllamaChatResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("chat body: {}", e)))?
            .into_generation();
        debug!(
            total_tokens = generation.total_tokens,
            failed = generation.error.is_some(),
            "Received generation response from Ollama"
        );
        Ok(generation)
    }

    /// Reachability plus a warning when the model is not pulled.
    async fn health_check(&self) -> Result<(), LlmError> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: format!("GET {} failed", url),
            });
        }

        let installed: Vec<String> = response
            .json::<OllamaTagsResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("tags body: {}", e)))?
            .models
            .into_iter()
            .map(|m| m.name)
            .collect();
        if !installed.contains(&self.model) {
            warn!(model = %self.model, installed = ?installed, "Model is not pulled on this Ollama host");
        }
        Ok(())
    }
}

// Ollama API types

#[derive(Debug, Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OllamaMessage {
    role: String,
    #[serde(default)]
    content: String,
}

impl From<&Message> for OllamaMessage {
    fn from(msg: &Message) -> Self {
        OllamaMessage {
            role: msg.role.as_str().to_string(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    #[serde(default)]
    message: Option<OllamaMessage>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

impl OllamaChatResponse {
    fn into_generation(self) -> GenerationResponse {
        let usage = TokenUsage {
            prompt_tokens: self.prompt_eval_count.unwrap_or(0),
            completion_tokens: self.eval_count.unwrap_or(0),
            total_tokens: self.prompt_eval_count.unwrap_or(0) + self.eval_count.unwrap_or(0),
        };
        GenerationResponse {
            data: self.message.map(|m| m.content).into_iter().collect(),
            error: self.error,
            total_tokens: usage.total_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OllamaTagsResponse {
    models: Vec<OllamaModel>,
}

#[derive(Debug, Deserialize)]
struct OllamaModel {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_conversion() {
        let msg = Message::user("Hello");
        let ollama: OllamaMessage = (&msg).into();
        assert_eq!(ollama.role, "user");
        assert_eq!(ollama.content, "Hello");

        let msg = Message::system("You are a cinematographer");
        let ollama: OllamaMessage = (&msg).into();
        assert_eq!(ollama.role, "system");
    }

    #[test]
    fn test_request_shape() {
        let provider = OllamaProvider::new("http://localhost:11434/", "llama3.1:8b");
        let options = CompletionOptions {
            max_tokens: Some(400),
            ..Default::default()
        };
        let request = provider.build_request(&Message::conversation("sys", "user"), &options);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["options"]["num_predict"], 400);
        assert_eq!(provider.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "model": "llama3.1:8b",
            "message": {"role": "assistant", "content": "[LENS: 85mm]"},
            "done": true,
            "prompt_eval_count": 120,
            "eval_count": 30
        }"#;
        let parsed: OllamaChatResponse = serde_json::from_str(body).unwrap();
        let generation = parsed.into_generation();
        assert_eq!(generation.usable_text(), Some("[LENS: 85mm]"));
        assert_eq!(generation.total_tokens, 150);
    }

    #[test]
    fn test_error_body_without_message() {
        let parsed: OllamaChatResponse =
            serde_json::from_str(r#"{"error": "model 'llama9' not found"}"#).unwrap();
        let generation = parsed.into_generation();
        assert!(generation.data.is_empty());
        assert!(generation.usable_text().is_none());
    }

    #[test]
    fn test_custom_name() {
        let provider = OllamaProvider::new("http://gpu-box:11434", "qwen2.5").with_name("ollama-gpu");
        assert_eq!(provider.name(), "ollama-gpu");
        assert_eq!(provider.model(), "qwen2.5");
    }
}
