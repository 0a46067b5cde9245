//! Confeitaria Manager - Reporting Gateway server

use std::{net::SocketAddr, sync::Arc};

use confeitaria_backend::{create_app, AppState, ConfeitariaApiClient, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "confeitaria_gateway=debug,confeitaria_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Confeitaria Reporting Gateway");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Business API: {}", config.upstream.base_url);

    let api = ConfeitariaApiClient::new(&config.upstream)?;

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        api,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
