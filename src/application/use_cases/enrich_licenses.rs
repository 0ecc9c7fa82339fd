use crate::application::dto::{EnrichRequest, EnrichResponse};
use crate::license_gap::domain::{
    FetchOutcome, FetchStatistics, GapPackage, PackageCoordinates, PackageRecord,
};
use crate::license_gap::policies::{GapPolicy, LicenseSelection};
use crate::ports::outbound::{
    AnalyzerResultReader, ProgressReporter, RegistryClient, RegistryLicenseData,
};
use crate::shared::Result;
use futures::stream::{self, StreamExt};

/// Upper bound on in-flight registry requests. Fetches run concurrently
/// up to this limit, but outcomes are attached in input order so the
/// exported reports and statistics are deterministic.
const MAX_CONCURRENT_FETCHES: usize = 8;

/// EnrichLicensesUseCase - Core use case for license gap resolution
///
/// Loads the analyzer result, isolates the packages whose license is
/// missing or uncertain, queries PyPI for the eligible ones, and keeps
/// the running statistics. Every per-package failure is recorded in that
/// package's own fetch outcome; only the initial document load can fail
/// the run.
///
/// # Type Parameters
/// * `AR` - AnalyzerResultReader implementation
/// * `REG` - RegistryClient implementation
/// * `PR` - ProgressReporter implementation
pub struct EnrichLicensesUseCase<AR, REG, PR> {
    analyzer_reader: AR,
    registry_client: REG,
    progress_reporter: PR,
}

impl<AR, REG, PR> EnrichLicensesUseCase<AR, REG, PR>
where
    AR: AnalyzerResultReader,
    REG: RegistryClient,
    PR: ProgressReporter,
{
    /// Creates a new EnrichLicensesUseCase with injected dependencies
    pub fn new(analyzer_reader: AR, registry_client: REG, progress_reporter: PR) -> Self {
        Self {
            analyzer_reader,
            registry_client,
            progress_reporter,
        }
    }

    /// Executes the enrichment use case.
    ///
    /// # Arguments
    /// * `request` - analyzer file path and whether to fetch from PyPI
    ///
    /// # Returns
    /// EnrichResponse with the annotated gap package set and statistics
    pub async fn execute(&self, request: EnrichRequest) -> Result<EnrichResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading ORT analyzer result from: {}",
            request.analyzer_file.display()
        ));

        let records = self.analyzer_reader.read_packages(&request.analyzer_file)?;

        self.progress_reporter.report(&format!(
            "📦 Analyzing {} package(s) from ORT results...",
            records.len()
        ));

        let mut packages = Self::collect_gap_packages(records);
        let mut statistics = FetchStatistics {
            total_missing: packages.len(),
            ..FetchStatistics::default()
        };

        self.progress_reporter.report(&format!(
            "🔍 Found {} package(s) with missing or uncertain licenses",
            packages.len()
        ));

        let accepted = if request.fetch {
            self.fetch_outcomes(&mut packages, &mut statistics).await
        } else {
            Vec::new()
        };

        Ok(EnrichResponse::new(packages, accepted, statistics))
    }

    /// One pass over all package records, keeping those the gap policy
    /// flags. Input order is preserved.
    fn collect_gap_packages(records: Vec<PackageRecord>) -> Vec<GapPackage> {
        records
            .into_iter()
            .filter(|record| {
                GapPolicy::is_license_missing(&record.declared_licenses, &record.spdx_expression)
            })
            .map(GapPackage::new)
            .collect()
    }

    /// Queries PyPI for every registry-eligible gap package and attaches
    /// exactly one FetchOutcome to each gap package.
    ///
    /// Requests run concurrently up to MAX_CONCURRENT_FETCHES; results
    /// are collected first and then attached in a strictly input-ordered
    /// pass, so classification and statistics do not depend on network
    /// completion order.
    ///
    /// Returns the indices of the accepted results (license found).
    async fn fetch_outcomes(
        &self,
        packages: &mut [GapPackage],
        statistics: &mut FetchStatistics,
    ) -> Vec<usize> {
        self.progress_reporter
            .report("🌐 Fetching license information from the PyPI API...");

        // Pass 1: settle non-eligible packages immediately and plan the
        // registry lookups for the rest.
        let mut jobs: Vec<(usize, PackageCoordinates)> = Vec::new();
        for (index, package) in packages.iter_mut().enumerate() {
            let coords = package.coordinates();
            if coords.is_registry_eligible() {
                jobs.push((index, coords));
            } else {
                statistics.non_pypi_packages += 1;
                package.fetched_license = Some(FetchOutcome::failure(format!(
                    "Non-PyPI package ({})",
                    coords.ecosystem
                )));
            }
        }

        // Pass 2: run the planned lookups with bounded concurrency.
        let total = jobs.len();
        let client = &self.registry_client;
        let mut fetch_stream = stream::iter(jobs)
            .map(|(index, coords)| async move {
                let outcome = match client.fetch_license(&coords.name, &coords.version).await {
                    Ok(data) => Self::outcome_from_registry(data),
                    Err(e) => FetchOutcome::failure(e.to_string()),
                };
                (index, coords, outcome)
            })
            .buffer_unordered(MAX_CONCURRENT_FETCHES);

        let mut completed = 0usize;
        let mut outcomes: Vec<(usize, FetchOutcome)> = Vec::with_capacity(total);
        while let Some((index, coords, outcome)) = fetch_stream.next().await {
            completed += 1;
            self.progress_reporter
                .report_progress(completed, total, Some(&coords.to_string()));
            outcomes.push((index, outcome));
        }
        drop(fetch_stream);

        // Pass 3: attach outcomes and update counters in input order.
        for (index, outcome) in outcomes {
            packages[index].fetched_license = Some(outcome);
        }

        let mut accepted = Vec::new();
        for (index, package) in packages.iter().enumerate() {
            let coords = package.coordinates();
            if !coords.is_registry_eligible() {
                continue;
            }
            statistics.pypi_packages += 1;

            // Every eligible package received an outcome in pass 2
            let Some(outcome) = &package.fetched_license else {
                continue;
            };

            if outcome.succeeded {
                statistics.successfully_fetched += 1;
                if outcome.license.is_empty() {
                    statistics.licenses_still_missing += 1;
                    self.progress_reporter.report(&format!(
                        "  ⚠ {} has no license info in PyPI metadata",
                        coords
                    ));
                } else {
                    statistics.licenses_found += 1;
                    accepted.push(index);
                    self.progress_reporter
                        .report(&format!("  ✓ {} → {}", coords, outcome.license));
                }
            } else {
                statistics.fetch_errors += 1;
                self.progress_reporter.report_error(&format!(
                    "  ✗ {} fetch failed: {}",
                    coords,
                    outcome.error.as_deref().unwrap_or("Unknown")
                ));
            }
        }

        self.progress_reporter
            .report_completion("✅ PyPI API fetch complete");

        accepted
    }

    /// Converts a raw registry response into a successful FetchOutcome,
    /// applying the license precedence and normalization rules.
    fn outcome_from_registry(data: RegistryLicenseData) -> FetchOutcome {
        let license_expression = data.license_expression.unwrap_or_default();
        let license_field = data.license.unwrap_or_default();

        FetchOutcome {
            succeeded: true,
            license: LicenseSelection::determine(&license_expression, &license_field),
            license_expression,
            license_field,
            classifiers: LicenseSelection::license_classifiers(&data.classifiers),
            home_page: data.home_page.unwrap_or_default(),
            project_urls: data.project_urls,
            package_url: data.package_url.unwrap_or_default(),
            error: None,
        }
    }
}
