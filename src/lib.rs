//! ort-pypi-fetch - License gap enrichment for ORT analyzer results
//!
//! This library identifies packages with missing or uncertain license
//! information in an ORT analyzer result, fetches candidate licenses from
//! the PyPI JSON API, and renders the run into machine-readable reports
//! and human-reviewable curation suggestions. It follows hexagonal
//! architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`license_gap`): Gap models, coordinate parsing,
//!   statistics, and the classification/selection policies
//! - **Application Layer** (`application`): The enrichment use case and
//!   its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): PyPI client, YAML reader, report writers,
//!   console progress, exporters
//! - **Shared** (`shared`): Common error types and the `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use ort_pypi_fetch::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let analyzer_reader = YamlAnalyzerReader::new();
//! let registry_client = CachingRegistryClient::new(PyPiRegistryClient::new()?);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! let use_case = EnrichLicensesUseCase::new(analyzer_reader, registry_client, progress_reporter);
//! let request = EnrichRequest::new(PathBuf::from("analyzer-result.yml"), true);
//! let response = use_case.execute(request).await?;
//!
//! println!("{} licenses recovered", response.statistics.licenses_found);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod license_gap;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::exporters::{
        CsvReportExporter, CurationExporter, JsonReportExporter, StatsReportExporter,
    };
    pub use crate::adapters::outbound::filesystem::{OutputDirWriter, YamlAnalyzerReader};
    pub use crate::adapters::outbound::network::{CachingRegistryClient, PyPiRegistryClient};
    pub use crate::application::dto::{EnrichRequest, EnrichResponse};
    pub use crate::application::use_cases::EnrichLicensesUseCase;
    pub use crate::license_gap::domain::{
        FetchOutcome, FetchStatistics, FetchStatus, GapPackage, PackageCoordinates, PackageRecord,
        PYPI_ECOSYSTEM,
    };
    pub use crate::license_gap::policies::{GapPolicy, LicenseSelection};
    pub use crate::ports::outbound::{
        AnalyzerResultReader, ProgressReporter, RegistryClient, RegistryLicenseData, ReportSink,
    };
    pub use crate::shared::error::{EnrichError, ExitCode};
    pub use crate::shared::Result;
}
