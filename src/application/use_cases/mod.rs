mod enrich_licenses;

pub use enrich_licenses::EnrichLicensesUseCase;
