//! Reporting handlers for chart series and data export

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::{Language, ReportCharts};

use crate::error::AppResult;
use crate::external::ReportFilter;
use crate::middleware::Session;
use crate::services::ReportingService;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub lang: Option<String>,
    pub format: Option<String>, // "json" or "csv"
}

impl ReportQuery {
    fn filter(&self) -> AppResult<ReportFilter> {
        ReportFilter::parse(self.start_date.as_deref(), self.end_date.as_deref())
    }

    fn language(&self, state: &AppState) -> Language {
        self.lang
            .as_deref()
            .map(Language::from_code)
            .unwrap_or_else(|| state.config.reports.language())
    }

    fn wants_csv(&self) -> bool {
        self.format.as_deref() == Some("csv")
    }
}

async fn load_charts(state: &AppState, session: &Session, query: &ReportQuery) -> AppResult<ReportCharts> {
    let filter = query.filter()?;
    let service = ReportingService::new(state.api.clone());
    service.charts(session, &filter, query.language(state)).await
}

fn csv_attachment(filename: &str, body: String) -> axum::response::Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// Get every chart series for a report window
pub async fn get_report_charts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<ReportCharts>> {
    let charts = load_charts(&state, &session, &query).await?;
    Ok(Json(charts))
}

/// Get the sales-by-period series
pub async fn get_sales_report(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let charts = load_charts(&state, &session, &query).await?;

    if query.wants_csv() {
        let csv = ReportingService::export_to_csv(&charts.sales_by_period)?;
        Ok(csv_attachment("sales_by_period.csv", csv))
    } else {
        Ok(Json(charts.sales_by_period).into_response())
    }
}

/// Get the flavor/size sales table
pub async fn get_flavor_report(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let charts = load_charts(&state, &session, &query).await?;

    if query.wants_csv() {
        let csv = ReportingService::export_flavor_sales_csv(&charts.flavor_sales)?;
        Ok(csv_attachment("flavor_sales.csv", csv))
    } else {
        Ok(Json(charts.flavor_sales).into_response())
    }
}
