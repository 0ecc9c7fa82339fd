use crate::application::dto::EnrichResponse;
use crate::license_gap::domain::{FetchStatistics, GapPackage};
use crate::shared::Result;
use chrono::Local;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct FullReport<'a> {
    generated_at: String,
    ort_analyzer_file: String,
    statistics: &'a FetchStatistics,
    packages: &'a [GapPackage],
}

#[derive(Debug, Serialize)]
struct AcceptedReport<'a> {
    generated_at: String,
    ort_analyzer_file: String,
    count: usize,
    packages: Vec<&'a GapPackage>,
}

/// JsonReportExporter renders the machine-readable reports.
///
/// The full report carries the complete annotated gap package set plus
/// statistics; the accepted report only the packages whose fetch yielded
/// a usable license.
pub struct JsonReportExporter;

impl JsonReportExporter {
    /// Renders the full report (statistics + every gap package).
    pub fn full_report(response: &EnrichResponse, analyzer_file: &Path) -> Result<String> {
        let report = FullReport {
            generated_at: Local::now().to_rfc3339(),
            ort_analyzer_file: analyzer_file.display().to_string(),
            statistics: &response.statistics,
            packages: &response.packages,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Renders the accepted-results report (license found on PyPI only).
    pub fn accepted_report(response: &EnrichResponse, analyzer_file: &Path) -> Result<String> {
        let packages = response.accepted_packages();
        let report = AcceptedReport {
            generated_at: Local::now().to_rfc3339(),
            ort_analyzer_file: analyzer_file.display().to_string(),
            count: packages.len(),
            packages,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
