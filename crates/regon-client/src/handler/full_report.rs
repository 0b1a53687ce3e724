//! Full report retrieval.

use super::map_fault;
use regon_api::{FullReport, RegistryApi, SearchReport};
use regon_core::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Fetches named full reports for a record found by an earlier search.
///
/// Report names are free-form and checked by the registry, so nothing is
/// validated locally.
#[derive(Clone)]
pub struct FullReportHandler {
    api: Arc<dyn RegistryApi>,
}

impl std::fmt::Debug for FullReportHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullReportHandler").finish_non_exhaustive()
    }
}

impl FullReportHandler {
    /// Create a handler over a shared remote client.
    pub fn new(api: Arc<dyn RegistryApi>) -> Self {
        Self { api }
    }

    /// Fetch `report_name` for `report`.
    pub async fn fetch(&self, report: &SearchReport, report_name: &str) -> Result<FullReport> {
        let regon = report.regon.as_deref().unwrap_or_default();
        debug!(regon, report_name, "Fetching full report");

        self.api
            .full_report(report, report_name)
            .await
            .map_err(|fault| {
                map_fault(
                    fault,
                    || format!("Full report {report_name} for REGON {regon} not found"),
                    || info!(regon, report_name, "Full report not found"),
                )
            })
    }
}
