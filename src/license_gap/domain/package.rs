use super::coordinates::{PackageCoordinates, PYPI_ECOSYSTEM};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One package entry taken from the ORT analyzer result.
///
/// The `id` is the ORT coordinate string (`<Ecosystem>::<name>:<version>`)
/// and acts as the sole join key across all downstream artifacts. All
/// other fields are provenance carried through unchanged; missing fields
/// in the source document default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub id: String,
    #[serde(default)]
    pub purl: String,
    #[serde(default)]
    pub declared_licenses: Vec<String>,
    #[serde(default)]
    pub spdx_expression: String,
    #[serde(default)]
    pub homepage_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source_artifact_url: String,
    #[serde(default)]
    pub vcs_url: String,
    #[serde(default)]
    pub vcs_type: String,
}

/// Result of one PyPI query attempt for a gap package.
///
/// "No license found" and "fetch failed" are distinct terminal states:
/// `succeeded == true` with an empty `license` means PyPI answered but
/// carried no usable license data, while `succeeded == false` means the
/// request itself failed and `error` holds the failure description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchOutcome {
    #[serde(rename = "success")]
    pub succeeded: bool,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub license_expression: String,
    #[serde(default)]
    pub license_field: String,
    #[serde(default)]
    pub classifiers: Vec<String>,
    #[serde(default)]
    pub home_page: String,
    #[serde(default)]
    pub project_urls: BTreeMap<String, String>,
    #[serde(default)]
    pub package_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FetchOutcome {
    /// Creates a failed outcome carrying the failure description.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Returns true if the fetch succeeded and yielded a non-empty license.
    pub fn found_license(&self) -> bool {
        self.succeeded && !self.license.is_empty()
    }
}

/// Status of a gap package for the tabular report, derived from its
/// fetch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Enrichment did not run for this package
    NotChecked,
    /// PyPI returned a usable license
    FoundInRegistry,
    /// PyPI answered but carried no usable license data
    RegistryNoLicense,
    /// The PyPI request failed
    FetchError,
    /// The package does not belong to the PyPI ecosystem
    NonRegistry,
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchStatus::NotChecked => write!(f, "NOT_CHECKED"),
            FetchStatus::FoundInRegistry => write!(f, "FOUND_IN_REGISTRY"),
            FetchStatus::RegistryNoLicense => write!(f, "REGISTRY_NO_LICENSE"),
            FetchStatus::FetchError => write!(f, "FETCH_ERROR"),
            FetchStatus::NonRegistry => write!(f, "NON_REGISTRY"),
        }
    }
}

/// A package classified as license-missing, extended with the outcome of
/// the registry query once enrichment has run.
///
/// Created during the initial scan over the analyzer result; the
/// orchestrator attaches at most one `FetchOutcome`. A gap package
/// without an outcome has not been enriched (enrichment is skippable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapPackage {
    #[serde(flatten)]
    pub record: PackageRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_license: Option<FetchOutcome>,
}

impl GapPackage {
    pub fn new(record: PackageRecord) -> Self {
        Self {
            record,
            fetched_license: None,
        }
    }

    /// Parses this package's ORT coordinate string.
    pub fn coordinates(&self) -> PackageCoordinates {
        PackageCoordinates::parse(&self.record.id)
    }

    /// Returns true if enrichment resolved a license for this package.
    pub fn has_resolved_license(&self) -> bool {
        self.fetched_license
            .as_ref()
            .is_some_and(FetchOutcome::found_license)
    }

    /// Derives the report status from the attached fetch outcome.
    pub fn status(&self) -> FetchStatus {
        let Some(outcome) = &self.fetched_license else {
            return FetchStatus::NotChecked;
        };

        if outcome.succeeded {
            if outcome.license.is_empty() {
                FetchStatus::RegistryNoLicense
            } else {
                FetchStatus::FoundInRegistry
            }
        } else if self.coordinates().ecosystem == PYPI_ECOSYSTEM {
            FetchStatus::FetchError
        } else {
            FetchStatus::NonRegistry
        }
    }
}
