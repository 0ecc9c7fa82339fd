use crate::license_gap::domain::{FetchStatus, GapPackage};

const HEADER: &str = "id,ecosystem,name,version,purl,declared_licenses,spdx_expression,fetched_license,fetched_classifiers,status";

/// CsvReportExporter renders the tabular report: one row per gap package
/// with its parsed coordinates, declared license data, and fetch status.
pub struct CsvReportExporter;

impl CsvReportExporter {
    /// Renders the CSV report. An empty gap set yields an empty string
    /// (the artifact file is still written, just empty).
    pub fn render(packages: &[GapPackage]) -> String {
        if packages.is_empty() {
            return String::new();
        }

        let mut lines = Vec::with_capacity(packages.len() + 1);
        lines.push(HEADER.to_string());

        for package in packages {
            lines.push(Self::render_row(package));
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    fn render_row(package: &GapPackage) -> String {
        let coords = package.coordinates();
        let status = package.status();

        // The fetched columns are only populated for accepted results,
        // so a reviewer scanning the table sees licenses only where the
        // registry actually produced one.
        let (fetched_license, fetched_classifiers) = match &package.fetched_license {
            Some(outcome) if status == FetchStatus::FoundInRegistry => {
                (outcome.license.clone(), outcome.classifiers.join("; "))
            }
            _ => (String::new(), String::new()),
        };

        let fields = [
            package.record.id.as_str(),
            coords.ecosystem.as_str(),
            coords.name.as_str(),
            coords.version.as_str(),
            package.record.purl.as_str(),
            &package.record.declared_licenses.join(", "),
            package.record.spdx_expression.as_str(),
            &fetched_license,
            &fetched_classifiers,
            &status.to_string(),
        ];

        fields
            .iter()
            .map(|field| Self::escape(field))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Minimal CSV quoting: fields containing a comma, quote, or newline
    /// are wrapped in quotes with embedded quotes doubled.
    fn escape(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}
