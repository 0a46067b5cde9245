//! Stock handlers

use axum::{extract::State, Json};
use shared::{FlavorStockAggregate, StockSummary};

use crate::error::AppResult;
use crate::middleware::Session;
use crate::services::StockService;
use crate::AppState;

/// Get every flavor with its overall stock status
pub async fn get_stock_overview(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<Vec<FlavorStockAggregate>>> {
    let service = StockService::new(state.api.clone());
    let overview = service.overview(&session).await?;
    Ok(Json(overview))
}

/// Get the flavors that are running low
pub async fn get_low_stock(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<Vec<FlavorStockAggregate>>> {
    let service = StockService::new(state.api.clone());
    let low = service.low_stock(&session).await?;
    Ok(Json(low))
}

/// Get flavor counts per stock status
pub async fn get_stock_summary(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<StockSummary>> {
    let service = StockService::new(state.api.clone());
    let summary = service.summary(&session).await?;
    Ok(Json(summary))
}
