//! Client for the business REST API
//!
//! Read-only access to the stock overview and report snapshots. Every call
//! forwards the caller's session and tags the request with an `x-request-id`.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{FlavorStock, ReportData};
use uuid::Uuid;

use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};
use crate::middleware::Session;

/// Business API client
#[derive(Clone)]
pub struct ConfeitariaApiClient {
    client: Client,
    base_url: String,
}

/// Report window sent to the API
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ReportFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

impl ConfeitariaApiClient {
    /// Create a client from configuration
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current stock of every flavor
    pub async fn get_stock_overview(&self, session: &Session) -> AppResult<Vec<FlavorStock>> {
        let flavors: Option<Vec<FlavorStock>> =
            self.get_json(session, "/stock/overview", &[]).await?;
        Ok(flavors.unwrap_or_default())
    }

    /// Fetch the report snapshot for a window. `None` when the API sends `null`.
    pub async fn get_report(
        &self,
        session: &Session,
        filter: &ReportFilter,
    ) -> AppResult<Option<ReportData>> {
        self.get_json(session, "/reports", &filter.query_pairs()).await
    }

    /// Check that the API answers at all
    pub async fn ping(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("Business API ping failed: {}", e);
                false
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&'static str, String)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();

        tracing::debug!(%request_id, %url, "Calling business API");

        let response = self
            .client
            .get(&url)
            .bearer_auth(session.bearer_token())
            .header("x-request-id", request_id.to_string())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%request_id, %status, "Business API returned an error");
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::SessionExpired,
                StatusCode::NOT_FOUND => AppError::NotFound(path.trim_start_matches('/').to_string()),
                _ => AppError::UpstreamStatus {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(%request_id, "Failed to parse business API response: {}", e);
            AppError::InvalidUpstreamPayload(e.to_string())
        })
    }
}
