//! Minimal `ChatBackend` trait and reqwest-based skeleton for the
//! generative-language service behind the coach's chat turns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod observability;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("malformed completion payload: {0}")]
    MalformedResponse(String),
    #[error("configuration error: {0}")]
    Config(String),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: ChoiceMessage,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[async_trait]
pub trait ChatBackend: Send + Sync + 'static {
    /// Run one completion turn: a system prompt carrying the user's coaching
    /// context plus the raw user message, returning the assistant text.
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ChatError>;
}
