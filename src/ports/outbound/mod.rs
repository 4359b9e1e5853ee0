/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the application core uses to load
/// the scan report, serialize artifacts, persist them and report progress.
pub mod artifact_formatter;
pub mod artifact_writer;
pub mod progress_reporter;
pub mod scan_report_reader;

pub use artifact_formatter::ArtifactFormatter;
pub use artifact_writer::ArtifactWriter;
pub use progress_reporter::ProgressReporter;
pub use scan_report_reader::ScanReportReader;
