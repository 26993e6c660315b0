//! HTTP client implementation for the chat-completions backend.
//!
//! This module provides a reqwest-based implementation of the
//! [`ChatBackend`](crate::ChatBackend) trait.

use crate::config::Config;
use crate::observability;
use crate::{ChatBackend, ChatError, ChatMessage, CompletionRequest, CompletionResponse};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Sampling temperature sent with every completion request.
pub const TEMPERATURE: f64 = 0.7;
/// Output-length cap sent with every completion request.
pub const MAX_TOKENS: u32 = 500;

/// Client for an OpenAI-compatible chat-completions API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestChatBackend {
    base_url: String,
    model: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl ReqwestChatBackend {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend (e.g., "https://api.openai.com")
    /// * `model` - The model identifier to request completions from
    /// * `api_key` - The bearer token for authentication
    /// * `timeout` - Per-request deadline; an elapsed deadline surfaces as
    ///   [`ChatError::Http`]
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        api_key: SecretString,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            client,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            &cfg.base_url,
            cfg.model.clone(),
            cfg.api_key.clone(),
            cfg.timeout,
        )
    }

    /// Build an authenticated POST request.
    fn post_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> ChatError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();
        ChatError::Api {
            status,
            body: body_snippet,
        }
    }
}

#[async_trait]
impl ChatBackend for ReqwestChatBackend {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ChatError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_message),
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let result = self.execute(&url, &request).await;
        match &result {
            Ok(_) => observability::record_completion("ok"),
            Err(e) => {
                tracing::debug!("completion request failed: {e}");
                observability::record_completion("error");
            }
        }
        result
    }
}

impl ReqwestChatBackend {
    async fn execute(
        &self,
        url: &str,
        request: &CompletionRequest,
    ) -> Result<String, ChatError> {
        let resp = self.post_request(url).json(request).send().await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }

        let completion: CompletionResponse = resp.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                ChatError::MalformedResponse("no completion text in payload".into())
            })
    }
}
