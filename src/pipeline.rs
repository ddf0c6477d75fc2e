// src/pipeline.rs
//! Pipeline capability traits — abstract the three stages of one run.
//!
//! Each trait describes a single capability, enabling testing each stage
//! in isolation. All stages are synchronous; a run is one straight line
//! through fetch, compose, deliver.

use crate::error::AppError;
use crate::formatting::MenuReport;
use crate::model::MenuPage;

/// Retrieves the menu page.
pub trait MenuSource {
    fn fetch(&self) -> Result<MenuPage, AppError>;
}

/// Transforms a fetched page into the day's report.
pub trait ReportComposer {
    fn compose(&self, page: &MenuPage) -> Result<MenuReport, AppError>;
}

/// Delivers a report to its destinations.
pub trait ReportDelivery {
    fn deliver(&self, report: &MenuReport) -> Result<(), AppError>;
}
