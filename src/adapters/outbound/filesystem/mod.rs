mod analyzer_reader;
mod report_sink;

pub use analyzer_reader::YamlAnalyzerReader;
pub use report_sink::OutputDirWriter;
