mod mock_analyzer_reader;
mod mock_progress_reporter;
mod mock_registry_client;

pub use mock_analyzer_reader::MockAnalyzerReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_registry_client::MockRegistryClient;
