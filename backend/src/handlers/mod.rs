//! HTTP handlers for the confeitaria gateway

pub mod health;
pub mod reporting;
pub mod stock;

pub use health::health_check;
pub use reporting::{get_flavor_report, get_report_charts, get_sales_report};
pub use stock::{get_low_stock, get_stock_overview, get_stock_summary};
