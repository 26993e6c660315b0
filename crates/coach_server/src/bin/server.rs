use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tracing::info;

use coach_chat_client::ChatBackend;
use coach_chat_client::config::Config as ChatConfig;
use coach_chat_client::http_client::ReqwestChatBackend;
use coach_server::middleware::LoggingBackend;
use coach_server::routes;
use coach_server::services::{ChatService, SpeechService};
use coach_server::state::AppState;

const DEFAULT_TTS_BASE_URL: &str = "https://translate.google.com";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Configure logging from env var `COACH_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("COACH_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env.clone())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!(%log_env, "coach_server: log filter");

    let builder = PrometheusBuilder::new();
    let handle = builder.install_recorder()?;

    // A missing API key is not fatal: the service runs fallback-only and the
    // chat endpoint keeps answering deterministically.
    let chat = match ChatConfig::from_env() {
        Ok(cfg) => {
            let deadline = cfg.timeout;
            let backend: Arc<dyn ChatBackend> =
                Arc::new(LoggingBackend::new(ReqwestChatBackend::from_config(&cfg)));
            ChatService::new(Some(backend), deadline)
        }
        Err(e) => {
            tracing::warn!("chat backend not configured ({e}); serving fallback responses only");
            ChatService::fallback_only()
        }
    };

    let tts_base =
        std::env::var("COACH_TTS_BASE_URL").unwrap_or_else(|_| DEFAULT_TTS_BASE_URL.to_string());
    let speech = SpeechService::new(&tts_base, Duration::from_secs(10));

    let state = Arc::new(AppState {
        chat,
        speech,
        metrics: handle,
    });
    let app = routes::router(state);

    let addr: SocketAddr = std::env::var("ADDRESS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));
    info!(%addr, "starting HTTP server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    let server = axum::serve(listener, app.into_make_service());
    if let Err(e) = server
        .with_graceful_shutdown(async {
            signal::ctrl_c()
                .await
                .expect("failed to install ctrl+c handler");
        })
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
