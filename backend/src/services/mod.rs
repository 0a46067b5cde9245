//! Business logic services for the confeitaria gateway

pub mod reporting;
pub mod stock;

pub use reporting::ReportingService;
pub use stock::StockService;
