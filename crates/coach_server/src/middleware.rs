//! Middleware layer for cross-cutting concerns around the chat backend.

use std::sync::Arc;
use std::time::Instant;

use coach_chat_client::{ChatBackend, ChatError};
use tracing::debug;

/// Wrapper that logs every completion call with its duration and outcome,
/// keeping the backend implementation free of logging concerns.
#[derive(Clone)]
pub struct LoggingBackend<B: ChatBackend> {
    inner: Arc<B>,
}

impl<B: ChatBackend> LoggingBackend<B> {
    pub fn new(backend: B) -> Self {
        Self {
            inner: Arc::new(backend),
        }
    }
}

#[async_trait::async_trait]
impl<B: ChatBackend> ChatBackend for LoggingBackend<B> {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ChatError> {
        let start = Instant::now();
        debug!("Starting operation: complete");

        let result = self.inner.complete(system_prompt, user_message).await;

        let duration = start.elapsed();
        match &result {
            Ok(_) => debug!("Operation completed successfully: complete in {:?}", duration),
            Err(e) => debug!("Operation failed: complete in {:?} - error: {}", duration, e),
        }

        result
    }
}
