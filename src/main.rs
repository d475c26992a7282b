//! Technovation - countdown and registration service for the symposium site
//!
//! This is the main entry point for the technovation server.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use technovation::{
    api::create_router,
    config::Config,
    countdown::SystemClock,
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("technovation={},tower_http=info", config.log_level()))
        .init();

    info!("Starting technovation server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, target={}, tick={}ms, submit delay={}ms",
          config.host, config.port, config.target, config.tick_ms, config.submit_delay_ms);

    // A bad countdown target is a configuration error, refuse to start
    let state = Arc::new(
        AppState::from_config(&config, Arc::new(SystemClock))
            .context("invalid countdown target")?,
    );

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /api/countdown              - Current countdown snapshot");
    info!("  GET  /api/countdown/stream       - Countdown snapshots (SSE)");
    info!("  GET  /api/schedule               - Event schedule");
    info!("  GET  /api/events                 - Selectable events and fees");
    info!("  POST /api/registrations/validate - Validate a registration");
    info!("  POST /api/registrations          - Submit a registration");
    info!("  GET  /health                     - Health check");

    // Open SSE streams would hold a graceful drain forever, so race instead
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    state.countdown.stop();
    info!("Server shutdown complete");
    Ok(())
}
