//! WebAssembly module for the confeitaria management client
//!
//! Provides client-side computation for:
//! - Stock status per size and per flavor
//! - Chart series from report snapshots
//! - Period labels for time axes

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::reporting::*;
pub use shared::types::*;

fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn parse_overview(overview_json: &str) -> Result<Vec<FlavorStock>, JsValue> {
    let flavors: Vec<FlavorStock> = serde_json::from_str(overview_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid stock overview JSON: {}", e)))?;

    for issue in shared::validation::stock_issues(&flavors) {
        warn(&format!("Stock quantity clamped: {}", issue));
    }

    Ok(flavors)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Classify one size, returning `low`, `medium`, `high` or `out_of_stock`
#[wasm_bindgen]
pub fn classify_stock_size(total: i32, remaining: i32) -> String {
    classify_size(total.into(), remaining.into()).as_str().to_string()
}

/// Attach an overall status to every flavor of a stock overview
#[wasm_bindgen]
pub fn classify_stock_overview(overview_json: &str) -> Result<String, JsValue> {
    let flavors = parse_overview(overview_json)?;
    to_json(&aggregate_stock(flavors))
}

/// Count flavors per overall status
#[wasm_bindgen]
pub fn summarize_stock(overview_json: &str) -> Result<String, JsValue> {
    let aggregates = aggregate_stock(parse_overview(overview_json)?);
    to_json(&StockSummary::from_aggregates(&aggregates))
}

/// Build every chart series from a report snapshot.
/// An empty string or `null` yields empty charts.
#[wasm_bindgen]
pub fn build_report_charts(report_json: &str, language: &str) -> Result<String, JsValue> {
    let report: Option<ReportData> = if report_json.trim().is_empty() {
        None
    } else {
        serde_json::from_str(report_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid report JSON: {}", e)))?
    };

    let aggregator = ReportAggregator::new(Language::from_code(language));
    to_json(&aggregator.build(report.as_ref()))
}

/// Format an ISO period as `dd/MM`
#[wasm_bindgen]
pub fn format_period_label(period: &str) -> String {
    short_date_label(period)
}

/// Label, icon and color for every stock status, as `[key, label, icon, color]` rows
#[wasm_bindgen]
pub fn stock_status_legend(language: &str) -> js_sys::Array {
    let language = Language::from_code(language);
    StockStatus::ALL
        .iter()
        .map(|status| {
            let row = js_sys::Array::new();
            row.push(&JsValue::from_str(status.as_str()));
            row.push(&JsValue::from_str(status.label_in(language)));
            row.push(&JsValue::from_str(status.icon()));
            row.push(&JsValue::from_str(status.color()));
            JsValue::from(row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_stock_size() {
        assert_eq!(classify_stock_size(10, 1), "low");
        assert_eq!(classify_stock_size(10, 5), "medium");
        assert_eq!(classify_stock_size(10, 8), "high");
        assert_eq!(classify_stock_size(0, 3), "out_of_stock");
    }

    #[test]
    fn test_classify_stock_overview() {
        let json = r#"[{"flavorId": 1, "name": "Brigadeiro", "sizes": [
            {"sizeId": 1, "name": "500g", "totalQuantity": 10, "remainingQuantity": 1}
        ]}]"#;

        let output = classify_stock_overview(json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["overallStatus"], "low");
        assert_eq!(value[0]["flavorId"], "1");
    }

    #[test]
    fn test_summarize_stock_with_clamped_size() {
        let json = r#"[{"flavorId": 1, "name": "Brigadeiro", "sizes": [
            {"sizeId": 1, "name": "500g", "totalQuantity": 10, "remainingQuantity": 40}
        ]}]"#;

        let output = summarize_stock(json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["high"], 1);
        assert_eq!(value["low"], 0);
    }

    #[test]
    fn test_build_report_charts_empty() {
        for input in ["", "null", "{}"] {
            let output = build_report_charts(input, "pt-BR").unwrap();
            let value: serde_json::Value = serde_json::from_str(&output).unwrap();
            assert_eq!(value["ordersByStatus"], serde_json::json!([]));
            assert_eq!(value["flavorSales"]["allSizes"], serde_json::json!([]));
        }
    }

    #[test]
    fn test_build_report_charts_language() {
        let json = r#"{"ordersByStatus": [{"status": "CANCELLED", "count": 2}]}"#;

        let pt = build_report_charts(json, "pt").unwrap();
        assert!(pt.contains("Cancelado"));

        let en = build_report_charts(json, "en-US").unwrap();
        assert!(en.contains("Cancelled"));
    }

    #[test]
    fn test_format_period_label() {
        assert_eq!(format_period_label("2024-07-09"), "09/07");
    }
}
