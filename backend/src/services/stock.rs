//! Stock service: fetch the stock overview and derive flavor statuses

use shared::{
    aggregate_stock, low_stock_flavors, stock_issues, FlavorStock, FlavorStockAggregate,
    StockSummary,
};

use crate::error::AppResult;
use crate::external::ConfeitariaApiClient;
use crate::middleware::Session;

/// Stock service for status overviews and low-stock alerts
#[derive(Clone)]
pub struct StockService {
    api: ConfeitariaApiClient,
}

impl StockService {
    pub fn new(api: ConfeitariaApiClient) -> Self {
        Self { api }
    }

    /// Every flavor with its overall status, in API order
    pub async fn overview(&self, session: &Session) -> AppResult<Vec<FlavorStockAggregate>> {
        let flavors = self.api.get_stock_overview(session).await?;
        tracing::debug!(flavors = flavors.len(), "Stock overview fetched");

        log_clamped_sizes(&flavors);
        Ok(aggregate_stock(flavors))
    }

    /// Flavors whose worst size is low
    pub async fn low_stock(&self, session: &Session) -> AppResult<Vec<FlavorStockAggregate>> {
        let aggregates = self.overview(session).await?;
        Ok(low_stock_flavors(&aggregates).into_iter().cloned().collect())
    }

    /// Flavor counts per status
    pub async fn summary(&self, session: &Session) -> AppResult<StockSummary> {
        let aggregates = self.overview(session).await?;
        Ok(StockSummary::from_aggregates(&aggregates))
    }
}

/// The classifier clamps out-of-range quantities; surface them in the logs.
fn log_clamped_sizes(flavors: &[FlavorStock]) {
    for issue in stock_issues(flavors) {
        tracing::warn!(
            flavor_id = %issue.flavor_id,
            size_id = %issue.size_id,
            "Clamping stock quantity: {}",
            issue
        );
    }
}
