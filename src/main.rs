//! Layoff Insights - an HTTP server for tech layoff analytics
//!
//! This is the main entry point for the layoff-insights application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use layoff_insights::{
    api::{create_router, middleware::cors_layer},
    config::Config,
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "layoff_insights={0},tower_http={0}",
            config.log_level()
        ))
        .init();

    info!("Starting layoff-insights server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, cors_origin={}",
        config.host,
        config.port,
        config.cors_origin.as_deref().unwrap_or("*")
    );

    let cors = cors_layer(config.cors_origin.as_deref())?;
    let state = Arc::new(AppState::with_mock_data());
    let app = create_router(state, cors);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /api/tech-layoffs - Tech layoff figures");
    info!("  POST /api/analyze      - Layoff trend analysis");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
