//! Report aggregation: reshape a report snapshot into chart-ready series
//!
//! Every operation is a pure mapping over borrowed input. Empty input yields
//! empty output, unknown enum values get the fallback label and color, and
//! series keep the order they arrived in.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    ChartDataItem, FlavorChartData, FlavorChartRecord, FlavorSales, FulfillmentShare,
    OrdersByStatus, ReceivedByPaymentMethod, ReportCharts, ReportData, RevenuePoint,
    RevenueVsReceived, SalesByPeriod, SizeQuantities,
};
use crate::types::Language;

/// Field names of a flavor record that a size key must not shadow
const RESERVED_SIZE_KEYS: [&str; 2] = ["flavor", "total"];

/// Key of a size inside a flavor record. A size named `flavor` or `total`
/// becomes `flavor_size` / `total_size` so it cannot overwrite the record field.
pub fn size_key(size: &str) -> String {
    if RESERVED_SIZE_KEYS.contains(&size) {
        format!("{}_size", size)
    } else {
        size.to_string()
    }
}

/// Color of every bar in the sales-by-period chart
pub const SALES_SERIES_COLOR: &str = "#8B5CF6";

/// Pattern used for period labels on every time axis
pub const SHORT_DATE_FORMAT: &str = "%d/%m";

/// Turn an ISO period (`2024-03-05` or `2024-03-05T10:00:00Z`) into `05/03`.
///
/// Only the calendar date is read, so no timezone can shift the day.
/// Periods that do not start with a valid date keep their raw text.
pub fn short_date_label(period: &str) -> String {
    period
        .get(..10)
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .map(|date| date.format(SHORT_DATE_FORMAT).to_string())
        .unwrap_or_else(|| period.to_string())
}

/// Builds chart series in a fixed display language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportAggregator {
    language: Language,
}

impl ReportAggregator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn orders_by_status_to_chart_items(&self, orders: &[OrdersByStatus]) -> Vec<ChartDataItem> {
        orders
            .iter()
            .map(|entry| ChartDataItem {
                name: entry.status.label(self.language).to_string(),
                value: Decimal::from(entry.count),
                color: entry.status.color().to_string(),
            })
            .collect()
    }

    pub fn on_demand_vs_stock_to_chart_items(
        &self,
        shares: &[FulfillmentShare],
    ) -> Vec<ChartDataItem> {
        shares
            .iter()
            .map(|entry| ChartDataItem {
                name: entry.kind.label(self.language).to_string(),
                value: Decimal::from(entry.quantity),
                color: entry.kind.color().to_string(),
            })
            .collect()
    }

    /// Stacked-bar data: one record per flavor, one key per size it sold.
    ///
    /// A size listed twice for the same flavor is summed, so `total` always
    /// equals the sum of the size keys. Sums saturate at `i64::MAX`. Sizes
    /// named like a record field are renamed with [`size_key`].
    pub fn flavor_sales_to_chart_data(&self, sales: &[FlavorSales]) -> FlavorChartData {
        let mut all_sizes: Vec<String> = Vec::new();
        let mut records = Vec::with_capacity(sales.len());

        for flavor in sales {
            let mut sizes = SizeQuantities::new();
            let mut total = 0i64;

            for entry in &flavor.size_sales {
                let key = size_key(&entry.size);
                if !all_sizes.contains(&key) {
                    all_sizes.push(key.clone());
                }
                sizes.add(&key, entry.quantity);
                total = total.saturating_add(entry.quantity);
            }

            records.push(FlavorChartRecord {
                flavor: flavor.flavor.clone(),
                total,
                sizes,
            });
        }

        for record in &mut records {
            record.sizes.sort_by_order(&all_sizes);
        }

        FlavorChartData { all_sizes, records }
    }

    pub fn sales_by_period_to_chart_items(&self, sales: &[SalesByPeriod]) -> Vec<ChartDataItem> {
        sales
            .iter()
            .map(|entry| ChartDataItem {
                name: short_date_label(&entry.period),
                value: entry.total_sold,
                color: SALES_SERIES_COLOR.to_string(),
            })
            .collect()
    }

    pub fn revenue_vs_received_to_series(&self, series: &[RevenueVsReceived]) -> Vec<RevenuePoint> {
        series
            .iter()
            .map(|entry| RevenuePoint {
                name: short_date_label(&entry.period),
                revenue: entry.revenue,
                received: entry.received,
            })
            .collect()
    }

    pub fn received_by_payment_method_to_chart_items(
        &self,
        received: &[ReceivedByPaymentMethod],
    ) -> Vec<ChartDataItem> {
        received
            .iter()
            .map(|entry| ChartDataItem {
                name: entry.method.label(self.language).to_string(),
                value: entry.amount,
                color: entry.method.color().to_string(),
            })
            .collect()
    }

    /// Run every mapping over one snapshot. A missing snapshot gives empty charts.
    pub fn build(&self, report: Option<&ReportData>) -> ReportCharts {
        let Some(report) = report else {
            return ReportCharts::default();
        };

        ReportCharts {
            kpis: report.kpis.clone(),
            orders_by_status: self.orders_by_status_to_chart_items(&report.orders_by_status),
            on_demand_vs_stock: self.on_demand_vs_stock_to_chart_items(&report.on_demand_vs_stock),
            flavor_sales: self.flavor_sales_to_chart_data(&report.total_by_flavor_and_size),
            sales_by_period: self.sales_by_period_to_chart_items(&report.sales_by_period),
            revenue_vs_received: self
                .revenue_vs_received_to_series(&report.financials.revenue_vs_received_by_period),
            received_by_payment_method: self.received_by_payment_method_to_chart_items(
                &report.financials.received_by_payment_method,
            ),
        }
    }
}
