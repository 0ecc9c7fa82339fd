use std::path::PathBuf;

/// EnrichRequest - Internal request DTO for the license gap enrichment
/// use case.
#[derive(Debug, Clone)]
pub struct EnrichRequest {
    /// Path to the ORT analyzer-result.yml file
    pub analyzer_file: PathBuf,
    /// Whether to query PyPI for the gap packages. When false the run
    /// stops after the gap scan and only statistics are meaningful.
    pub fetch: bool,
}

impl EnrichRequest {
    pub fn new(analyzer_file: PathBuf, fetch: bool) -> Self {
        Self {
            analyzer_file,
            fetch,
        }
    }
}
