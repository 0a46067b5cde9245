//! Route definitions for the confeitaria gateway

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Session-scoped routes - stock status
        .nest("/stock", stock_routes())
        // Session-scoped routes - report charts and exports
        .nest("/reports", report_routes())
}

/// Stock routes
fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/overview", get(handlers::get_stock_overview))
        .route("/low", get(handlers::get_low_stock))
        .route("/summary", get(handlers::get_stock_summary))
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/charts", get(handlers::get_report_charts))
        .route("/sales", get(handlers::get_sales_report))
        .route("/flavors", get(handlers::get_flavor_report))
}
