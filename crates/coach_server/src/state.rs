use metrics_exporter_prometheus::PrometheusHandle;

use crate::services::{ChatService, SpeechService};

/// Shared state behind every route handler.
pub struct AppState {
    pub chat: ChatService,
    pub speech: SpeechService,
    pub metrics: PrometheusHandle,
}
