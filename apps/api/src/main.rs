use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mediclarify_api::config::Config;
use mediclarify_api::llm_client::{self, OpenAiClient};
use mediclarify_api::routes::build_router;
use mediclarify_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MediClarify API v{}", env!("CARGO_PKG_VERSION"));

    // A missing or placeholder key is a warning, not a startup failure:
    // analysis requests simply fail upstream at call time.
    match config.openai_api_key.as_deref() {
        Some(key) if !Config::is_placeholder_key(key) => {
            info!(
                "Completion client initialized (model: {})",
                llm_client::MODEL
            );
        }
        _ => warn!(
            "OPENAI_API_KEY is not set or still the placeholder; analysis requests will fail until it is configured"
        ),
    }

    let completion = Arc::new(OpenAiClient::new(
        config.openai_api_key.clone().unwrap_or_default(),
    ));

    let state = AppState::new(completion);
    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
