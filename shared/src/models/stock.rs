//! Stock models and status classification
//!
//! A flavor is sold in several sizes; each size carries the quantity produced
//! for the current batch (`total_quantity`) and what is still on the shelf
//! (`remaining_quantity`). The status of a size is a threshold function over
//! `remaining / total`, and a flavor takes the worst status among its sizes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{flexible_id, null_as_default, Language};

/// Below this share of the batch a size is flagged as low (0.2)
pub const LOW_STOCK_RATIO: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Below this share of the batch a size is flagged as medium (0.6)
pub const MEDIUM_STOCK_RATIO: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Current inventory for one size of a flavor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "crate::validation::validate_remaining_within_total"))]
pub struct SizeStockSnapshot {
    #[serde(deserialize_with = "flexible_id")]
    pub size_id: String,
    pub name: String,
    #[validate(range(min = 0))]
    pub total_quantity: i64,
    #[validate(range(min = 0))]
    pub remaining_quantity: i64,
}

impl SizeStockSnapshot {
    pub fn status(&self) -> StockStatus {
        classify_size(self.total_quantity, self.remaining_quantity)
    }
}

/// Stock overview entry as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlavorStock {
    #[serde(deserialize_with = "flexible_id")]
    pub flavor_id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sizes: Vec<SizeStockSnapshot>,
}

/// Derived stock status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Low,
    Medium,
    High,
    OutOfStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 4] = [
        StockStatus::Low,
        StockStatus::Medium,
        StockStatus::High,
        StockStatus::OutOfStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Low => "low",
            StockStatus::Medium => "medium",
            StockStatus::High => "high",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }

    /// Display label in the default language
    pub fn label(&self) -> &'static str {
        self.label_in(Language::default())
    }

    pub fn label_in(&self, language: Language) -> &'static str {
        match (self, language) {
            (StockStatus::Low, Language::Portuguese) => "Estoque baixo",
            (StockStatus::Medium, Language::Portuguese) => "Estoque médio",
            (StockStatus::High, Language::Portuguese) => "Estoque alto",
            (StockStatus::OutOfStock, Language::Portuguese) => "Sem estoque",
            (StockStatus::Low, Language::English) => "Low stock",
            (StockStatus::Medium, Language::English) => "Medium stock",
            (StockStatus::High, Language::English) => "High stock",
            (StockStatus::OutOfStock, Language::English) => "Out of stock",
        }
    }

    /// Icon identifier understood by the UI icon set
    pub fn icon(&self) -> &'static str {
        match self {
            StockStatus::Low => "alert-circle",
            StockStatus::Medium => "alert-triangle",
            StockStatus::High => "check-circle",
            StockStatus::OutOfStock => "x-circle",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StockStatus::Low => "#EF4444",
            StockStatus::Medium => "#F59E0B",
            StockStatus::High => "#10B981",
            StockStatus::OutOfStock => "#9CA3AF",
        }
    }

    /// Lower is worse. `OutOfStock` ranks last: it only wins when no size is stocked.
    fn severity(&self) -> u8 {
        match self {
            StockStatus::Low => 0,
            StockStatus::Medium => 1,
            StockStatus::High => 2,
            StockStatus::OutOfStock => 3,
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify one size from its batch total and what is left.
///
/// `total <= 0` is always [`StockStatus::OutOfStock`]. A `remaining` outside
/// `[0, total]` is clamped into that range before the ratio is taken, so a
/// negative count reads as empty and an overcount reads as full.
pub fn classify_size(total: i64, remaining: i64) -> StockStatus {
    if total <= 0 {
        return StockStatus::OutOfStock;
    }

    let remaining = remaining.clamp(0, total);
    let ratio = Decimal::from(remaining) / Decimal::from(total);

    if ratio < LOW_STOCK_RATIO {
        StockStatus::Low
    } else if ratio < MEDIUM_STOCK_RATIO {
        StockStatus::Medium
    } else {
        StockStatus::High
    }
}

/// Reduce the sizes of a flavor to its worst status (empty => `OutOfStock`)
pub fn classify_flavor(sizes: &[SizeStockSnapshot]) -> StockStatus {
    sizes
        .iter()
        .map(SizeStockSnapshot::status)
        .min_by_key(StockStatus::severity)
        .unwrap_or(StockStatus::OutOfStock)
}

/// A flavor with its derived overall status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlavorStockAggregate {
    pub flavor_id: String,
    pub name: String,
    pub sizes: Vec<SizeStockSnapshot>,
    pub overall_status: StockStatus,
}

impl FlavorStockAggregate {
    pub fn from_snapshot(flavor: FlavorStock) -> Self {
        let overall_status = classify_flavor(&flavor.sizes);
        Self {
            flavor_id: flavor.flavor_id,
            name: flavor.name,
            sizes: flavor.sizes,
            overall_status,
        }
    }

    /// Per-size statuses, in the same order as `sizes`
    pub fn size_statuses(&self) -> Vec<(&SizeStockSnapshot, StockStatus)> {
        self.sizes.iter().map(|s| (s, s.status())).collect()
    }

    /// Clamped units left across all sizes, saturating at `i64::MAX`
    pub fn total_remaining(&self) -> i64 {
        self.sizes
            .iter()
            .map(|s| s.remaining_quantity.clamp(0, s.total_quantity.max(0)))
            .fold(0i64, i64::saturating_add)
    }
}

/// Attach an overall status to every flavor of a stock overview, keeping input order
pub fn aggregate_stock(flavors: Vec<FlavorStock>) -> Vec<FlavorStockAggregate> {
    flavors
        .into_iter()
        .map(FlavorStockAggregate::from_snapshot)
        .collect()
}

/// Flavors whose overall status is low
pub fn low_stock_flavors(aggregates: &[FlavorStockAggregate]) -> Vec<&FlavorStockAggregate> {
    aggregates
        .iter()
        .filter(|a| a.overall_status == StockStatus::Low)
        .collect()
}

/// Number of flavors per overall status, used for dashboard badges
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub out_of_stock: usize,
}

impl StockSummary {
    pub fn from_aggregates(aggregates: &[FlavorStockAggregate]) -> Self {
        aggregates
            .iter()
            .fold(Self::default(), |mut summary, a| {
                match a.overall_status {
                    StockStatus::Low => summary.low += 1,
                    StockStatus::Medium => summary.medium += 1,
                    StockStatus::High => summary.high += 1,
                    StockStatus::OutOfStock => summary.out_of_stock += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.out_of_stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(name: &str, total: i64, remaining: i64) -> SizeStockSnapshot {
        SizeStockSnapshot {
            size_id: name.to_string(),
            name: name.to_string(),
            total_quantity: total,
            remaining_quantity: remaining,
        }
    }

    #[test]
    fn test_threshold_constants() {
        assert_eq!(LOW_STOCK_RATIO.to_string(), "0.2");
        assert_eq!(MEDIUM_STOCK_RATIO.to_string(), "0.6");
    }

    #[test]
    fn test_classify_size_examples() {
        assert_eq!(classify_size(10, 1), StockStatus::Low);
        assert_eq!(classify_size(10, 5), StockStatus::Medium);
        assert_eq!(classify_size(10, 8), StockStatus::High);
    }

    #[test]
    fn test_classify_size_boundaries() {
        assert_eq!(classify_size(10, 2), StockStatus::Medium);
        assert_eq!(classify_size(10, 6), StockStatus::High);
        assert_eq!(classify_size(10, 10), StockStatus::High);
        assert_eq!(classify_size(10, 0), StockStatus::Low);
    }

    #[test]
    fn test_classify_size_zero_total() {
        assert_eq!(classify_size(0, 0), StockStatus::OutOfStock);
        assert_eq!(classify_size(0, 7), StockStatus::OutOfStock);
        assert_eq!(classify_size(-3, 1), StockStatus::OutOfStock);
    }

    #[test]
    fn test_classify_size_clamps_out_of_range() {
        assert_eq!(classify_size(10, 25), StockStatus::High);
        assert_eq!(classify_size(10, -4), StockStatus::Low);
    }

    #[test]
    fn test_classify_flavor_worst_wins() {
        let sizes = vec![size("250g", 10, 9), size("500g", 10, 4), size("1kg", 10, 1)];
        assert_eq!(classify_flavor(&sizes), StockStatus::Low);

        let sizes = vec![size("250g", 10, 9), size("500g", 10, 4)];
        assert_eq!(classify_flavor(&sizes), StockStatus::Medium);

        let sizes = vec![size("250g", 10, 9), size("500g", 0, 0)];
        assert_eq!(classify_flavor(&sizes), StockStatus::High);
    }

    #[test]
    fn test_classify_flavor_empty_and_unstocked() {
        assert_eq!(classify_flavor(&[]), StockStatus::OutOfStock);
        let sizes = vec![size("250g", 0, 0), size("500g", 0, 0)];
        assert_eq!(classify_flavor(&sizes), StockStatus::OutOfStock);
    }

    #[test]
    fn test_aggregate_preserves_order() {
        let flavors = vec![
            FlavorStock {
                flavor_id: "1".into(),
                name: "Brigadeiro".into(),
                sizes: vec![size("500g", 10, 1)],
            },
            FlavorStock {
                flavor_id: "2".into(),
                name: "Beijinho".into(),
                sizes: vec![],
            },
        ];

        let aggregates = aggregate_stock(flavors);
        assert_eq!(aggregates[0].name, "Brigadeiro");
        assert_eq!(aggregates[0].overall_status, StockStatus::Low);
        assert_eq!(aggregates[1].overall_status, StockStatus::OutOfStock);
        assert_eq!(low_stock_flavors(&aggregates).len(), 1);

        let summary = StockSummary::from_aggregates(&aggregates);
        assert_eq!(summary.low, 1);
        assert_eq!(summary.out_of_stock, 1);
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn test_deserialize_stock_overview() {
        let json = r#"[
            {"flavorId": 7, "name": "Ninho", "sizes": [
                {"sizeId": 1, "name": "250g", "totalQuantity": 20, "remainingQuantity": 15}
            ]},
            {"flavorId": "8", "name": "Paçoca", "sizes": null}
        ]"#;

        let flavors: Vec<FlavorStock> = serde_json::from_str(json).unwrap();
        assert_eq!(flavors[0].flavor_id, "7");
        assert_eq!(flavors[0].sizes[0].size_id, "1");
        assert!(flavors[1].sizes.is_empty());

        let aggregate = FlavorStockAggregate::from_snapshot(flavors[0].clone());
        let value = serde_json::to_value(&aggregate).unwrap();
        assert_eq!(value["overallStatus"], "high");
        assert_eq!(aggregate.total_remaining(), 15);
    }

    #[test]
    fn test_total_remaining_saturates() {
        let aggregate = FlavorStockAggregate::from_snapshot(FlavorStock {
            flavor_id: "1".to_string(),
            name: "Brigadeiro".to_string(),
            sizes: vec![
                size("500g", i64::MAX, i64::MAX),
                size("1kg", 10, 1),
                size("Cento", 10, -4),
            ],
        });

        assert_eq!(aggregate.total_remaining(), i64::MAX);
        assert_eq!(aggregate.overall_status, StockStatus::Low);
    }

    #[test]
    fn test_status_display_tables() {
        assert_eq!(StockStatus::Low.label(), "Estoque baixo");
        assert_eq!(StockStatus::OutOfStock.label_in(Language::English), "Out of stock");
        assert_eq!(StockStatus::High.icon(), "check-circle");
        assert_eq!(format!("{}", StockStatus::Medium), "Estoque médio");
    }
}
