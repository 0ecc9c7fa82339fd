/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the application core uses to reach
/// external systems (package registry, file system, console).
pub mod analyzer_reader;
pub mod progress_reporter;
pub mod registry_client;
pub mod report_sink;

pub use analyzer_reader::AnalyzerResultReader;
pub use progress_reporter::ProgressReporter;
pub use registry_client::{RegistryClient, RegistryLicenseData};
pub use report_sink::ReportSink;
