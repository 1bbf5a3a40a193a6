use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use defi_il_calculator::{
    config::Settings,
    handlers::{create_calculator_routes, health_check},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone())),
        )
        .init();

    info!("Starting DeFi IL Calculator");

    let app_state = AppState {
        settings: settings.clone(),
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .merge(create_calculator_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API endpoints available at:");
    info!("  GET  /health - Service health");
    info!("  GET  /protocols - Supported protocols");
    info!("  POST /calculate - Strict IL calculation");
    info!("  POST /calculate/advanced - Advanced IL calculation");
    info!("  POST /scenarios - What-if scenario table");
    info!("API server running on {}:{}", settings.api.host, settings.api.port);

    axum::serve(listener, app).await?;
    Ok(())
}
