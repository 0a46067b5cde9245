//! Domain models for the confeitaria management platform

mod order;
mod report;
mod stock;

pub use order::*;
pub use report::*;
pub use stock::*;
