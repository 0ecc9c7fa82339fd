use serde::Serialize;

/// Running tally of the enrichment run, mutated only by the orchestrator.
///
/// Invariants after any run:
/// - `pypi_packages + non_pypi_packages == total_missing`
/// - `licenses_found + licenses_still_missing == successfully_fetched`
///
/// Field names match the keys of the exported statistics artifacts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchStatistics {
    /// Packages classified as license-missing
    pub total_missing: usize,
    /// Gap packages eligible for a PyPI lookup
    pub pypi_packages: usize,
    /// Gap packages outside the PyPI ecosystem (never queried)
    pub non_pypi_packages: usize,
    /// Queries that completed without a transport/HTTP error
    pub successfully_fetched: usize,
    /// Queries that failed
    pub fetch_errors: usize,
    /// Successful queries that yielded a usable license
    pub licenses_found: usize,
    /// Successful queries with no usable license data
    pub licenses_still_missing: usize,
}

impl FetchStatistics {
    /// Share of gap packages resolved by the registry, as a percentage.
    /// This quantifies how much deep-scan workload the fetch removed.
    /// Returns 0.0 for an empty gap set.
    pub fn workload_reduction_percent(&self) -> f64 {
        if self.total_missing == 0 {
            return 0.0;
        }
        (self.licenses_found as f64 / self.total_missing as f64) * 100.0
    }
}
