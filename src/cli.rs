use clap::Parser;
use std::path::PathBuf;

/// Fetch missing license information from the PyPI API for ORT analyzer results
#[derive(Parser, Debug)]
#[command(name = "ort-pypi-fetch")]
#[command(version)]
#[command(
    about = "Identify packages with missing licenses in an ORT analyzer result and fetch them from PyPI",
    long_about = None
)]
pub struct Args {
    /// Path to the ORT analyzer-result.yml file
    pub analyzer_file: PathBuf,

    /// Attempt to fetch missing licenses from PyPI
    #[arg(long)]
    pub fetch: bool,

    /// Export the full report and the accepted-results report to JSON
    #[arg(long)]
    pub json: bool,

    /// Export the tabular report to CSV
    #[arg(long)]
    pub csv: bool,

    /// Generate curation suggestions YAML (requires manual review!)
    #[arg(long)]
    pub curations: bool,

    /// Output directory for reports
    #[arg(long, default_value = "pypi-licenses")]
    pub output_dir: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
