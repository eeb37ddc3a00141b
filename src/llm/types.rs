//! Common types for LLM interactions.

use serde::{Deserialize, Serialize};

/// Role of a message in a chat request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// The two-message conversation every generation request sends.
    pub fn conversation(system_prompt: &str, user_prompt: &str) -> Vec<Message> {
        vec![Message::system(system_prompt), Message::user(user_prompt)]
    }
}

/// Result of a generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResponse {
    /// Generated text candidates; the first is used.
    pub data: Vec<String>,
    /// Soft failure reported by the backend.
    pub error: Option<String>,
    pub total_tokens: u32,
}

impl GenerationResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            data: vec![text.into()],
            ..Default::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// First non-blank candidate, if the response carries no error.
    pub fn usable_text(&self) -> Option<&str> {
        if self.error.is_some() {
            return None;
        }
        self.data
            .iter()
            .map(String::as_str)
            .find(|text| !text.trim().is_empty())
    }
}

/// Token usage information.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let sys = Message::system("You are a cinematographer");
        assert_eq!(sys.role, MessageRole::System);
        assert_eq!(sys.content, "You are a cinematographer");

        let conversation = Message::conversation("sys", "user");
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation[1].role, MessageRole::User);
    }

    #[test]
    fn test_usable_text() {
        assert_eq!(GenerationResponse::text("[LENS: 85mm]").usable_text(), Some("[LENS: 85mm]"));
        assert!(GenerationResponse::text("   ").usable_text().is_none());
        assert!(GenerationResponse::default().usable_text().is_none());
        assert!(GenerationResponse::failed("quota").usable_text().is_none());

        let with_error = GenerationResponse {
            data: vec!["text".to_string()],
            error: Some("partial".to_string()),
            total_tokens: 0,
        };
        assert!(with_error.usable_text().is_none());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
