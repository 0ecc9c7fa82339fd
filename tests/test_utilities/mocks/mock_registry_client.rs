use async_trait::async_trait;
use ort_pypi_fetch::prelude::*;
use std::collections::HashMap;

/// Mock RegistryClient for testing
pub struct MockRegistryClient {
    pub responses: HashMap<String, RegistryLicenseData>,
    pub should_fail: bool,
}

impl MockRegistryClient {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            should_fail: false,
        }
    }

    /// Registers a response with a license expression for a coordinate.
    pub fn with_license(mut self, package: &str, version: &str, expression: &str) -> Self {
        self.responses.insert(
            format!("{}@{}", package, version),
            RegistryLicenseData {
                license_expression: Some(expression.to_string()),
                classifiers: vec![format!("License :: OSI Approved :: {} License", expression)],
                home_page: Some(format!("https://example.org/{}", package)),
                ..RegistryLicenseData::default()
            },
        );
        self
    }

    /// Registers a response with no usable license data for a coordinate.
    pub fn with_no_license(mut self, package: &str, version: &str) -> Self {
        self.responses.insert(
            format!("{}@{}", package, version),
            RegistryLicenseData::default(),
        );
        self
    }

    /// Registers a raw response for a coordinate.
    pub fn with_data(mut self, package: &str, version: &str, data: RegistryLicenseData) -> Self {
        self.responses
            .insert(format!("{}@{}", package, version), data);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            responses: HashMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockRegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistryClient for MockRegistryClient {
    async fn fetch_license(
        &self,
        package_name: &str,
        version: &str,
    ) -> Result<RegistryLicenseData> {
        if self.should_fail {
            anyhow::bail!("connection refused");
        }

        let key = format!("{}@{}", package_name, version);
        Ok(self.responses.get(&key).cloned().unwrap_or_default())
    }
}
