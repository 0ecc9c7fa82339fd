/// Report exporters - pure renderers over the enrichment response
///
/// Each exporter turns the annotated gap package set (or the statistics)
/// into one artifact string; writing it anywhere is the ReportSink's job.
mod csv_report;
mod curation_report;
mod json_report;
mod stats_report;

pub use csv_report::CsvReportExporter;
pub use curation_report::CurationExporter;
pub use json_report::JsonReportExporter;
pub use stats_report::StatsReportExporter;
