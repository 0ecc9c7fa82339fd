use ort_pypi_fetch::prelude::*;
use std::path::Path;

/// Mock AnalyzerResultReader for testing
pub struct MockAnalyzerReader {
    pub packages: Vec<PackageRecord>,
    pub should_fail: bool,
}

impl MockAnalyzerReader {
    pub fn new(packages: Vec<PackageRecord>) -> Self {
        Self {
            packages,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            packages: vec![],
            should_fail: true,
        }
    }
}

impl AnalyzerResultReader for MockAnalyzerReader {
    fn read_packages(&self, _path: &Path) -> Result<Vec<PackageRecord>> {
        if self.should_fail {
            anyhow::bail!("Mock analyzer reader failure");
        }
        Ok(self.packages.clone())
    }
}
