mod advisor;
mod config;
mod errors;
mod gemini;
mod proxy;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::session::SessionStore;
use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::proxy::ProxyService;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sahayak API v{}", env!("CARGO_PKG_VERSION"));

    if config.gemini_api_key.is_none() {
        // Startup continues: the proxy answers 500 per request instead.
        warn!("GEMINI_API_KEY is not set — generation requests will fail");
    }

    let gemini = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    );
    info!("Gemini client initialized (model: {})", gemini.model());

    let state = AppState {
        generator: Arc::new(ProxyService::new(gemini)),
        sessions: SessionStore::default(),
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
