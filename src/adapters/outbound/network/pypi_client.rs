use crate::ports::outbound::{RegistryClient, RegistryLicenseData};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Per-request timeout for the PyPI JSON API.
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct PyPiPackageResponse {
    info: PyPiInfo,
}

#[derive(Debug, Deserialize)]
struct PyPiInfo {
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    license_expression: Option<String>,
    #[serde(default)]
    classifiers: Vec<String>,
    #[serde(default)]
    home_page: Option<String>,
    #[serde(default)]
    project_urls: Option<BTreeMap<String, Option<String>>>,
    #[serde(default)]
    package_url: Option<String>,
}

/// PyPiRegistryClient adapter for fetching license metadata from the
/// PyPI JSON API.
///
/// This adapter implements the RegistryClient port with a single bounded
/// request per package: one GET against
/// `https://pypi.org/pypi/{name}/{version}/json` with a fixed timeout
/// and no retry. The orchestrator treats every error here as a
/// per-package failed outcome, so a flaky network degrades the run
/// instead of aborting it.
pub struct PyPiRegistryClient {
    client: reqwest::Client,
}

impl PyPiRegistryClient {
    /// Creates a new PyPI client with the fixed request timeout.
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("ort-pypi-fetch/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Validates a package name or version for URL safety.
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        // Security: Prevent URL injection attacks
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    async fn fetch_from_pypi(&self, package_name: &str, version: &str) -> Result<PyPiInfo> {
        // Security: Validate URL components before using them
        Self::validate_url_component(package_name, "Package name")?;
        Self::validate_url_component(version, "Version")?;

        let encoded_package = urlencoding::encode(package_name);
        let encoded_version = urlencoding::encode(version);

        let url = format!(
            "https://pypi.org/pypi/{}/{}/json",
            encoded_package, encoded_version
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("PyPI API returned status code {}", response.status());
        }

        let package_response: PyPiPackageResponse = response.json().await?;
        Ok(package_response.info)
    }
}

#[async_trait]
impl RegistryClient for PyPiRegistryClient {
    async fn fetch_license(
        &self,
        package_name: &str,
        version: &str,
    ) -> Result<RegistryLicenseData> {
        let info = self.fetch_from_pypi(package_name, version).await?;

        // project_urls values can be null in PyPI responses
        let project_urls = info
            .project_urls
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();

        Ok(RegistryLicenseData {
            license: info.license,
            license_expression: info.license_expression,
            classifiers: info.classifiers,
            home_page: info.home_page,
            project_urls,
            package_url: info.package_url,
        })
    }
}
