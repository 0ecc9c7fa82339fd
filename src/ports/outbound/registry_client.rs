use crate::shared::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Raw license-related fields of one registry response, before any
/// precedence or normalization rules are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryLicenseData {
    /// Legacy free-text `license` field
    pub license: Option<String>,
    /// Modern SPDX-style `license_expression` field
    pub license_expression: Option<String>,
    /// Full classifier list, unfiltered
    pub classifiers: Vec<String>,
    /// `home_page` field
    pub home_page: Option<String>,
    /// `project_urls` mapping
    pub project_urls: BTreeMap<String, String>,
    /// Canonical registry page for the package
    pub package_url: Option<String>,
}

/// RegistryClient port for querying an external package registry.
///
/// The current implementation targets the PyPI JSON API; a second
/// ecosystem would add another implementation of this trait, selected by
/// the parsed ecosystem tag.
///
/// # Async Support
/// Fetches are async so the orchestrator can run a bounded number of
/// them concurrently. Implementations must be `Send + Sync`.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Fetches the license-related metadata for one package version.
    ///
    /// # Errors
    /// Returns an error if the request fails, the registry answers with
    /// a non-success status, or the response cannot be parsed. The
    /// orchestrator converts such errors into failed fetch outcomes;
    /// they never abort the batch.
    async fn fetch_license(&self, package_name: &str, version: &str)
        -> Result<RegistryLicenseData>;
}
