//! Boundary validation for snapshots received from the API
//!
//! The classifier clamps bad quantities instead of failing, so these checks
//! exist to let callers see and log what was clamped.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::models::{FlavorStock, SizeStockSnapshot};
use crate::types::DateRange;

/// Schema-level rule for [`SizeStockSnapshot`]: `remaining <= total`
pub fn validate_remaining_within_total(size: &SizeStockSnapshot) -> Result<(), ValidationError> {
    if size.remaining_quantity > size.total_quantity {
        let mut error = ValidationError::new("remaining_exceeds_total");
        error.message = Some("Remaining quantity cannot exceed total quantity".into());
        return Err(error);
    }
    Ok(())
}

/// A size whose quantities break `0 <= remaining <= total`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StockIssue {
    pub flavor_id: String,
    pub flavor_name: String,
    pub size_id: String,
    pub size_name: String,
    pub total_quantity: i64,
    pub remaining_quantity: i64,
}

impl std::fmt::Display for StockIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {}: remaining {} outside 0..={}",
            self.flavor_name, self.size_name, self.remaining_quantity, self.total_quantity
        )
    }
}

/// List every out-of-range size in a stock overview
pub fn stock_issues(flavors: &[FlavorStock]) -> Vec<StockIssue> {
    flavors
        .iter()
        .flat_map(|flavor| {
            flavor
                .sizes
                .iter()
                .filter(|size| size.validate().is_err())
                .map(move |size| StockIssue {
                    flavor_id: flavor.flavor_id.clone(),
                    flavor_name: flavor.name.clone(),
                    size_id: size.size_id.clone(),
                    size_name: size.name.clone(),
                    total_quantity: size.total_quantity,
                    remaining_quantity: size.remaining_quantity,
                })
        })
        .collect()
}

/// Errors for report filter input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportFilterError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Start date {start} is after end date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// Parse an ISO `YYYY-MM-DD` report boundary
pub fn validate_report_period(value: &str) -> Result<NaiveDate, ReportFilterError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ReportFilterError::InvalidDate(value.to_string()))
}

/// Check that a range does not end before it starts
pub fn validate_date_range(range: &DateRange) -> Result<(), ReportFilterError> {
    if range.start > range.end {
        return Err(ReportFilterError::InvertedRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok(())
}
