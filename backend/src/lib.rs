//! Confeitaria Manager - Reporting Gateway
//!
//! Backend-for-frontend over the business REST API. Fetches stock and report
//! snapshots with the caller's session, classifies stock levels and shapes
//! report charts for the dashboard.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
pub use external::ConfeitariaApiClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: ConfeitariaApiClient,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Confeitaria Manager Reporting Gateway v1"
}
