use crate::license_gap::domain::GapPackage;
use crate::shared::Result;
use chrono::Local;
use serde::Serialize;
use std::collections::BTreeMap;

/// Warning every curation suggestion carries. Suggestions are proposals
/// for human review, never applied automatically.
const REVIEW_WARNING: &str = "⚠️ REVIEW REQUIRED - Verify from source repository before applying!";

#[derive(Debug, Serialize)]
struct CurationEntry {
    id: String,
    curations: CurationData,
}

#[derive(Debug, Serialize)]
struct CurationData {
    comment: String,
    concluded_license: String,
    declared_license_mapping: BTreeMap<String, String>,
    homepage_url: String,
    pypi_classifiers: Vec<String>,
}

/// CurationExporter renders ORT curation suggestions for the packages
/// whose license was found on PyPI.
pub struct CurationExporter;

impl CurationExporter {
    /// Renders the YAML curation-suggestions document for the accepted
    /// results. Packages without a resolved license are skipped.
    pub fn render(accepted: &[&GapPackage]) -> Result<String> {
        let date = Local::now().format("%Y-%m-%d");

        let entries: Vec<CurationEntry> = accepted
            .iter()
            .filter_map(|package| {
                let outcome = package.fetched_license.as_ref()?;
                if outcome.license.is_empty() {
                    return None;
                }

                let mut mapping = BTreeMap::new();
                mapping.insert("NOASSERTION".to_string(), outcome.license.clone());

                Some(CurationEntry {
                    id: package.record.id.clone(),
                    curations: CurationData {
                        comment: format!(
                            "License fetched from PyPI API on {}. License: {}. {}",
                            date, outcome.license, REVIEW_WARNING
                        ),
                        concluded_license: outcome.license.clone(),
                        declared_license_mapping: mapping,
                        homepage_url: outcome.home_page.clone(),
                        pypi_classifiers: outcome.classifiers.clone(),
                    },
                })
            })
            .collect();

        Ok(serde_yaml_ng::to_string(&entries)?)
    }
}
