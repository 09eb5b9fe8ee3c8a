use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use poem_api::config::Config;
use poem_api::llm_client::OllamaClient;
use poem_api::routes::build_router;
use poem_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("poem_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Poem API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the model client
    let oracle = OllamaClient::new(config.ollama_url.clone(), config.oracle_timeout)?;
    info!(
        "Model client initialized (endpoint: {}, poetry model: {}, translation model: {})",
        oracle.endpoint(),
        config.poetry_model,
        config.translation_model
    );

    let state = AppState::new(Arc::new(oracle), &config);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // local front-end only

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
