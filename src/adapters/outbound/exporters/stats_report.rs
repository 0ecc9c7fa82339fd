use crate::license_gap::domain::FetchStatistics;
use chrono::Local;
use std::fmt::Write;
use std::path::Path;

/// StatsReportExporter renders the plain-text statistics summary.
pub struct StatsReportExporter;

impl StatsReportExporter {
    pub fn render(statistics: &FetchStatistics, analyzer_file: &Path) -> String {
        let mut output = String::new();

        // Infallible writes into a String
        let _ = writeln!(output, "PyPI License Fetch Statistics");
        let _ = writeln!(output, "{}", "=".repeat(50));
        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "Generated: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(output, "ORT Analyzer File: {}", analyzer_file.display());
        let _ = writeln!(output);
        let _ = writeln!(output, "Statistics:");
        let _ = writeln!(output, "  Total missing: {}", statistics.total_missing);
        let _ = writeln!(output, "  PyPI packages: {}", statistics.pypi_packages);
        let _ = writeln!(
            output,
            "  Non-PyPI packages: {}",
            statistics.non_pypi_packages
        );
        let _ = writeln!(
            output,
            "  Successfully fetched: {}",
            statistics.successfully_fetched
        );
        let _ = writeln!(output, "  Fetch errors: {}", statistics.fetch_errors);
        let _ = writeln!(output, "  Licenses found: {}", statistics.licenses_found);
        let _ = writeln!(
            output,
            "  Licenses still missing: {}",
            statistics.licenses_still_missing
        );
        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "ScanCode Workload Reduction: {:.1}%",
            statistics.workload_reduction_percent()
        );
        let _ = writeln!(
            output,
            "Packages still needing ScanCode: {}",
            statistics.licenses_still_missing
        );

        output
    }
}
