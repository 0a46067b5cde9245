//! External API integrations

pub mod confeitaria_api;

pub use confeitaria_api::{ConfeitariaApiClient, ReportFilter};
