pub mod coordinates;
pub mod package;
pub mod statistics;

pub use coordinates::{PackageCoordinates, PYPI_ECOSYSTEM};
pub use package::{FetchOutcome, FetchStatus, GapPackage, PackageRecord};
pub use statistics::FetchStatistics;
