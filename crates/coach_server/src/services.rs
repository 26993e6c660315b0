//! Collaborator services: chat orchestration with the fallback contract, and
//! remote speech synthesis.

use std::sync::Arc;
use std::time::Duration;

use coach_chat_client::ChatBackend;
use tokio::time::timeout;

use crate::domains::dialogue;
use crate::error::CoachError;
use crate::prompts;
use crate::types::ConversationContext;

/// Where a chat answer came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerSource {
    Backend,
    Fallback,
}

/// Answers chat turns through the generative backend when one is configured
/// and healthy, and through the deterministic dialogue engine otherwise.
/// Failure handling is a substitution, never a retry: any backend error or
/// an elapsed deadline re-answers the same turn locally.
#[derive(Clone)]
pub struct ChatService {
    backend: Option<Arc<dyn ChatBackend>>,
    deadline: Duration,
}

impl ChatService {
    pub fn new(backend: Option<Arc<dyn ChatBackend>>, deadline: Duration) -> Self {
        Self { backend, deadline }
    }

    /// Service without a backend; every turn is answered by the fallback
    /// engine. Used when no API key is configured.
    pub fn fallback_only() -> Self {
        Self::new(None, Duration::from_secs(0))
    }

    pub async fn respond(
        &self,
        message: &str,
        ctx: &ConversationContext,
    ) -> (String, AnswerSource) {
        let Some(backend) = &self.backend else {
            metrics::counter!("chat_gateway_fallback_total", "reason" => "disabled").increment(1);
            return (dialogue::respond(message, ctx), AnswerSource::Fallback);
        };

        let system_prompt = prompts::coaching_system_prompt(ctx);
        match timeout(self.deadline, backend.complete(&system_prompt, message)).await {
            Ok(Ok(text)) => {
                metrics::counter!("chat_gateway_success_total").increment(1);
                (text, AnswerSource::Backend)
            }
            Ok(Err(e)) => {
                tracing::warn!("chat backend failed, substituting fallback engine: {e}");
                metrics::counter!("chat_gateway_fallback_total", "reason" => "error").increment(1);
                (dialogue::respond(message, ctx), AnswerSource::Fallback)
            }
            Err(_) => {
                tracing::warn!(
                    "chat backend exceeded {:?} deadline, substituting fallback engine",
                    self.deadline
                );
                metrics::counter!("chat_gateway_fallback_total", "reason" => "timeout").increment(1);
                (dialogue::respond(message, ctx), AnswerSource::Fallback)
            }
        }
    }
}

/// Fetches MP3 audio for a text from a remote synthesis endpoint. Audio has
/// no local fallback; failures surface as [`CoachError::Speech`].
#[derive(Clone, Debug)]
pub struct SpeechService {
    base_url: String,
    client: reqwest::Client,
}

impl SpeechService {
    pub fn new(base_url: &str, request_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, CoachError> {
        let url = format!("{}/translate_tts", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("ie", "UTF-8"), ("client", "tw-ob"), ("tl", "en"), ("q", text)])
            .send()
            .await
            .map_err(|e| CoachError::Speech(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CoachError::Speech(format!(
                "synthesis endpoint returned {}",
                resp.status()
            )));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| CoachError::Speech(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActivityLevel, DietPreference, Goal};
    use async_trait::async_trait;
    use coach_chat_client::ChatError;

    struct HealthyBackend;

    #[async_trait]
    impl ChatBackend for HealthyBackend {
        async fn complete(&self, _sys: &str, _msg: &str) -> Result<String, ChatError> {
            Ok("backend advice".to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl ChatBackend for FailingBackend {
        async fn complete(&self, _sys: &str, _msg: &str) -> Result<String, ChatError> {
            Err(ChatError::Api {
                status: 500,
                body: "boom".into(),
            })
        }
    }

    struct SlowBackend;

    #[async_trait]
    impl ChatBackend for SlowBackend {
        async fn complete(&self, _sys: &str, _msg: &str) -> Result<String, ChatError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("too late".to_string())
        }
    }

    fn ctx() -> ConversationContext {
        ConversationContext {
            diet_preference: DietPreference::Vegetarian,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::LoseWeight,
            target_calories: 1800,
        }
    }

    #[tokio::test]
    async fn healthy_backend_answers_the_turn() {
        let backend: Arc<dyn ChatBackend> = Arc::new(HealthyBackend);
        let service = ChatService::new(Some(backend), Duration::from_secs(5));
        let (text, source) = service.respond("what should I eat", &ctx()).await;
        assert_eq!(text, "backend advice");
        assert_eq!(source, AnswerSource::Backend);
    }

    #[tokio::test]
    async fn backend_error_substitutes_the_fallback_engine() {
        let backend: Arc<dyn ChatBackend> = Arc::new(FailingBackend);
        let service = ChatService::new(Some(backend), Duration::from_secs(5));
        let context = ctx();
        let (text, source) = service.respond("what should I eat", &context).await;
        assert_eq!(source, AnswerSource::Fallback);
        assert_eq!(text, dialogue::respond("what should I eat", &context));
    }

    #[tokio::test]
    async fn elapsed_deadline_substitutes_the_fallback_engine() {
        let backend: Arc<dyn ChatBackend> = Arc::new(SlowBackend);
        let service = ChatService::new(Some(backend), Duration::from_millis(20));
        let context = ctx();
        let (text, source) = service.respond("how long will this take", &context).await;
        assert_eq!(source, AnswerSource::Fallback);
        assert_eq!(text, dialogue::respond("how long will this take", &context));
    }

    #[tokio::test]
    async fn missing_backend_serves_fallback_only() {
        let service = ChatService::fallback_only();
        let context = ctx();
        let (text, source) = service.respond("hello", &context).await;
        assert_eq!(source, AnswerSource::Fallback);
        assert_eq!(text, dialogue::respond("hello", &context));
    }
}
