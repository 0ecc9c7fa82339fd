mod adapters;
mod application;
mod cli;
mod license_gap;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::exporters::{
    CsvReportExporter, CurationExporter, JsonReportExporter, StatsReportExporter,
};
use adapters::outbound::filesystem::{OutputDirWriter, YamlAnalyzerReader};
use adapters::outbound::network::{CachingRegistryClient, PyPiRegistryClient};
use application::dto::{EnrichRequest, EnrichResponse};
use application::use_cases::EnrichLicensesUseCase;
use cli::Args;
use owo_colors::OwoColorize;
use ports::outbound::ReportSink;
use shared::error::{EnrichError, ExitCode};
use shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    let args = Args::parse_args();

    validate_analyzer_file(&args.analyzer_file)?;

    // Create adapters (Dependency Injection)
    let analyzer_reader = YamlAnalyzerReader::new();
    let registry_client = CachingRegistryClient::new(PyPiRegistryClient::new()?);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = EnrichLicensesUseCase::new(analyzer_reader, registry_client, progress_reporter);

    let request = EnrichRequest::new(args.analyzer_file.clone(), args.fetch);
    let response = use_case.execute(request).await?;

    print_summary(&response);

    write_reports(&args, &response)?;

    Ok(())
}

fn validate_analyzer_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(EnrichError::AnalyzerResultNotFound {
            path: path.to_path_buf(),
            suggestion: "Run the ORT analyzer first and pass the path to its analyzer-result.yml"
                .to_string(),
        }
        .into());
    }
    Ok(())
}

/// Prints the final textual report: every outcome counter, the accepted
/// results, and the packages still needing a deep scan.
fn print_summary(response: &EnrichResponse) {
    let statistics = &response.statistics;

    println!();
    println!("{}", "=".repeat(80));
    println!("PYPI LICENSE FETCH REPORT");
    println!("{}", "=".repeat(80));
    println!();
    println!("📊 Statistics:");
    println!(
        "   Total packages with missing licenses: {}",
        statistics.total_missing
    );
    println!("   PyPI packages: {}", statistics.pypi_packages);
    println!("   Non-PyPI packages: {}", statistics.non_pypi_packages);
    println!(
        "   Successfully fetched from PyPI: {}",
        statistics.successfully_fetched
    );
    println!("   Licenses found in PyPI: {}", statistics.licenses_found);
    println!(
        "   Still missing after PyPI fetch: {}",
        statistics.licenses_still_missing
    );
    println!("   Fetch errors: {}", statistics.fetch_errors);

    let accepted = response.accepted_packages();
    if !accepted.is_empty() {
        println!();
        println!(
            "✅ Packages with licenses found in PyPI ({}):",
            accepted.len()
        );
        println!();
        for (position, package) in accepted.iter().enumerate() {
            println!("{}. {}", position + 1, package.record.id);
            if let Some(outcome) = &package.fetched_license {
                println!("   License: {}", outcome.license);
                if !outcome.classifiers.is_empty() {
                    println!("   Classifiers:");
                    for classifier in outcome.classifiers.iter().take(3) {
                        println!("      - {}", classifier);
                    }
                }
            }
            println!();
        }
    }

    let unresolved = response.unresolved_packages();
    if !unresolved.is_empty() {
        println!();
        println!(
            "⚠ Packages still needing ScanCode analysis ({}):",
            unresolved.len()
        );
        for (position, package) in unresolved.iter().take(10).enumerate() {
            let coords = package.coordinates();
            println!(
                "   {}. {}:{} ({})",
                position + 1,
                coords.name,
                coords.version,
                coords.ecosystem
            );
        }
        if unresolved.len() > 10 {
            println!("   ... and {} more", unresolved.len() - 10);
        }
    }
}

fn write_reports(args: &Args, response: &EnrichResponse) -> Result<()> {
    let sink = OutputDirWriter::new(args.output_dir.clone());

    // The statistics summary is always written
    sink.write_report(
        "pypi-fetch-stats.txt",
        &StatsReportExporter::render(&response.statistics, &args.analyzer_file),
    )?;

    if args.json {
        sink.write_report(
            "pypi-licenses-full.json",
            &JsonReportExporter::full_report(response, &args.analyzer_file)?,
        )?;
        sink.write_report(
            "pypi-licenses-found.json",
            &JsonReportExporter::accepted_report(response, &args.analyzer_file)?,
        )?;
    }

    if args.csv {
        sink.write_report(
            "pypi-licenses.csv",
            &CsvReportExporter::render(&response.packages),
        )?;
    }

    if args.curations && !response.accepted.is_empty() {
        sink.write_report(
            "curation-suggestions.yml",
            &CurationExporter::render(&response.accepted_packages())?,
        )?;
        eprintln!(
            "{}",
            "⚠️  IMPORTANT: Review and verify all curation suggestions before using!".yellow()
        );
    }

    eprintln!(
        "\n{} PyPI license fetch complete. Outputs saved to: {}",
        "✅".green(),
        sink.output_dir().display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_analyzer_file_missing() {
        let result = validate_analyzer_file(&PathBuf::from("/nonexistent/analyzer-result.yml"));
        assert!(result.is_err());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("ORT analyzer result not found"));
    }

    #[test]
    fn test_validate_analyzer_file_existing() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_analyzer_file(temp.path()).is_ok());
    }
}
