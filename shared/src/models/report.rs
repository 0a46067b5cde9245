//! Report snapshot and chart series models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FulfillmentType, OrderStatus, PaymentMethod};
use crate::types::{null_as_default, null_as_zero};

// ============================================================================
// Report snapshot (as received from the API)
// ============================================================================

/// Aggregate report for one query window
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kpis: ReportKpis,
    /// Chronological, ascending by ISO date
    #[serde(default, deserialize_with = "null_as_default")]
    pub sales_by_period: Vec<SalesByPeriod>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub orders_by_status: Vec<OrdersByStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_by_flavor_and_size: Vec<FlavorSales>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub on_demand_vs_stock: Vec<FulfillmentShare>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub financials: Financials,
}

/// Headline numbers for the report window
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportKpis {
    #[serde(deserialize_with = "null_as_default")]
    pub total_orders: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub items_sold: i64,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "null_as_zero"
    )]
    pub total_revenue: Decimal,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "null_as_zero"
    )]
    pub total_received: Decimal,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "null_as_zero"
    )]
    pub average_ticket: Decimal,
}

impl ReportKpis {
    /// Revenue still to be received
    pub fn outstanding(&self) -> Decimal {
        (self.total_revenue - self.total_received).max(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesByPeriod {
    /// ISO date (`YYYY-MM-DD`, optionally with a time part)
    pub period: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_sold: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrdersByStatus {
    pub status: OrderStatus,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlavorSales {
    pub flavor: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size_sales: Vec<SizeSales>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizeSales {
    pub size: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FulfillmentShare {
    #[serde(rename = "type")]
    pub kind: FulfillmentType,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue_vs_received_by_period: Vec<RevenueVsReceived>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub received_by_payment_method: Vec<ReceivedByPaymentMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueVsReceived {
    pub period: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub received: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceivedByPaymentMethod {
    pub method: PaymentMethod,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

// ============================================================================
// Chart series (flat records for the charting layer)
// ============================================================================

/// One slice/bar/point of a simple chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartDataItem {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub color: String,
}

/// Units sold per size, keyed by size name and kept in insertion order.
///
/// Serializes as a JSON object whose keys follow that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeQuantities(Vec<(String, i64)>);

impl SizeQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, size: &str) -> Option<&i64> {
        self.0.iter().find(|(key, _)| key == size).map(|(_, qty)| qty)
    }

    pub fn contains_key(&self, size: &str) -> bool {
        self.get(size).is_some()
    }

    /// Add to a size, inserting it at the end when new. Saturates at `i64::MAX`.
    pub fn add(&mut self, size: &str, quantity: i64) {
        match self.0.iter_mut().find(|(key, _)| key == size) {
            Some((_, current)) => *current = current.saturating_add(quantity),
            None => self.0.push((size.to_string(), quantity)),
        }
    }

    /// Reorder entries to follow `order`; sizes missing from `order` go last
    pub fn sort_by_order(&mut self, order: &[String]) {
        self.0
            .sort_by_key(|(key, _)| order.iter().position(|s| s == key).unwrap_or(usize::MAX));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().map(|(_, qty)| *qty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(key, qty)| (key.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for SizeQuantities {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut sizes = Self::new();
        for (size, quantity) in iter {
            sizes.add(&size.into(), quantity);
        }
        sizes
    }
}

impl Serialize for SizeQuantities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (size, quantity) in &self.0 {
            map.serialize_entry(size, quantity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SizeQuantities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SizeQuantitiesVisitor;

        impl<'de> serde::de::Visitor<'de> for SizeQuantitiesVisitor {
            type Value = SizeQuantities;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of size name to quantity")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut sizes = SizeQuantities::new();
                while let Some((size, quantity)) = access.next_entry::<String, i64>()? {
                    sizes.add(&size, quantity);
                }
                Ok(sizes)
            }
        }

        deserializer.deserialize_map(SizeQuantitiesVisitor)
    }
}

/// Stacked-bar record for one flavor.
///
/// Sizes the flavor did not sell are absent from `sizes` rather than zero.
/// Size keys follow the order of [`FlavorChartData::all_sizes`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlavorChartRecord {
    pub flavor: String,
    pub total: i64,
    #[serde(flatten)]
    pub sizes: SizeQuantities,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlavorChartData {
    /// Every size seen across all flavors, in order of first appearance
    pub all_sizes: Vec<String>,
    pub records: Vec<FlavorChartRecord>,
}

impl FlavorChartData {
    /// Give every record a key for every size, filling gaps with zero
    pub fn zero_filled(mut self) -> Self {
        for record in &mut self.records {
            record.sizes = self
                .all_sizes
                .iter()
                .map(|size| (size.as_str(), record.sizes.get(size).copied().unwrap_or(0)))
                .collect();
        }
        self
    }
}

/// Revenue against cash actually received for one period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenuePoint {
    pub name: String,
    #[serde(rename = "Revenue", with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(rename = "Received", with = "rust_decimal::serde::float")]
    pub received: Decimal,
}

/// Every chart series derived from one report snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportCharts {
    pub kpis: ReportKpis,
    pub orders_by_status: Vec<ChartDataItem>,
    pub on_demand_vs_stock: Vec<ChartDataItem>,
    pub flavor_sales: FlavorChartData,
    pub sales_by_period: Vec<ChartDataItem>,
    pub revenue_vs_received: Vec<RevenuePoint>,
    pub received_by_payment_method: Vec<ChartDataItem>,
}
