//! Reporting service for chart series and data export

use serde::Serialize;
use shared::{
    validate_date_range, validate_report_period, DateRange, FlavorChartData, Language,
    ReportAggregator, ReportCharts,
};

use crate::error::{AppError, AppResult};
use crate::external::{ConfeitariaApiClient, ReportFilter};
use crate::middleware::Session;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    api: ConfeitariaApiClient,
}

impl ReportFilter {
    /// Build a filter from raw `YYYY-MM-DD` query values
    pub fn parse(start_date: Option<&str>, end_date: Option<&str>) -> AppResult<Self> {
        let start_date = start_date
            .filter(|s| !s.trim().is_empty())
            .map(validate_report_period)
            .transpose()?;
        let end_date = end_date
            .filter(|s| !s.trim().is_empty())
            .map(validate_report_period)
            .transpose()?;

        if let (Some(start), Some(end)) = (start_date, end_date) {
            validate_date_range(&DateRange { start, end })?;
        }

        Ok(Self {
            start_date,
            end_date,
        })
    }
}

impl ReportingService {
    pub fn new(api: ConfeitariaApiClient) -> Self {
        Self { api }
    }

    /// Fetch a report snapshot and shape every chart series from it
    pub async fn charts(
        &self,
        session: &Session,
        filter: &ReportFilter,
        language: Language,
    ) -> AppResult<ReportCharts> {
        let report = self.api.get_report(session, filter).await?;
        if report.is_none() {
            tracing::debug!(?filter, "API returned no report for window");
        }

        Ok(ReportAggregator::new(language).build(report.as_ref()))
    }

    /// Export report data as CSV
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record).map_err(|e| {
                AppError::Internal(format!("CSV serialization error: {}", e))
            })?;
        }
        finish_csv(wtr)
    }

    /// Export flavor sales with one column per size, zero-filled
    pub fn export_flavor_sales_csv(data: &FlavorChartData) -> AppResult<String> {
        let data = data.clone().zero_filled();
        let mut wtr = csv::Writer::from_writer(vec![]);

        let mut header = vec!["flavor".to_string(), "total".to_string()];
        header.extend(data.all_sizes.iter().cloned());
        wtr.write_record(&header)
            .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;

        for record in &data.records {
            let mut row = vec![record.flavor.clone(), record.total.to_string()];
            row.extend(
                data.all_sizes
                    .iter()
                    .map(|size| record.sizes.get(size).copied().unwrap_or(0).to_string()),
            );
            wtr.write_record(&row)
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
        }

        finish_csv(wtr)
    }
}

fn finish_csv(wtr: csv::Writer<Vec<u8>>) -> AppResult<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{FlavorSales, SizeSales};

    #[test]
    fn test_filter_parse() {
        let filter = ReportFilter::parse(Some("2024-03-01"), Some("2024-03-31")).unwrap();
        assert!(filter.start_date.is_some());
        assert!(filter.end_date.is_some());

        let empty = ReportFilter::parse(Some(""), None).unwrap();
        assert_eq!(empty, ReportFilter::default());
    }

    #[test]
    fn test_filter_parse_rejects_bad_input() {
        assert!(matches!(
            ReportFilter::parse(Some("01/03/2024"), None),
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            ReportFilter::parse(Some("2024-03-31"), Some("2024-03-01")),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn test_export_flavor_sales_csv() {
        let sales = vec![
            FlavorSales {
                flavor: "Brigadeiro".to_string(),
                size_sales: vec![SizeSales {
                    size: "500g".to_string(),
                    quantity: 10,
                }],
            },
            FlavorSales {
                flavor: "Beijinho".to_string(),
                size_sales: vec![SizeSales {
                    size: "1kg".to_string(),
                    quantity: 2,
                }],
            },
        ];
        let data = ReportAggregator::default().flavor_sales_to_chart_data(&sales);

        let csv = ReportingService::export_flavor_sales_csv(&data).unwrap();
        assert_eq!(
            csv,
            "flavor,total,500g,1kg\nBrigadeiro,10,10,0\nBeijinho,2,0,2\n"
        );
    }

    #[test]
    fn test_export_chart_items_csv() {
        let items = vec![shared::ChartDataItem {
            name: "01/03".to_string(),
            value: rust_decimal::Decimal::from(12),
            color: "#8B5CF6".to_string(),
        }];

        let csv = ReportingService::export_to_csv(&items).unwrap();
        assert!(csv.starts_with("name,value,color\n"));
        assert!(csv.contains("01/03,12"));
    }
}
