use crate::shared::Result;
use std::path::PathBuf;

/// ReportSink port for persisting rendered report artifacts.
///
/// Exporters produce strings; the sink decides where they land
/// (an output directory on disk in the default wiring).
pub trait ReportSink {
    /// Writes one named artifact and returns the path it landed at.
    fn write_report(&self, file_name: &str, content: &str) -> Result<PathBuf>;
}
