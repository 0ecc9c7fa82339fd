use crate::license_gap::domain::PackageRecord;
use crate::shared::Result;
use std::path::Path;

/// AnalyzerResultReader port for loading the upstream analysis document.
///
/// Implementations parse an ORT analyzer result into the flat package
/// records the gap scan works on. Missing optional fields must default
/// to empty; only a fundamentally malformed document is an error.
pub trait AnalyzerResultReader {
    /// Reads and parses all package entries from the analyzer result.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the document lacks
    /// the expected top-level structure. This is the only process-fatal
    /// error of the whole run.
    fn read_packages(&self, path: &Path) -> Result<Vec<PackageRecord>>;
}
