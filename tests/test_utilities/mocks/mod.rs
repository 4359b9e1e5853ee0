/// Mock implementations for testing
mod mock_artifact_writer;
mod mock_progress_reporter;
mod mock_scan_report_reader;

pub use mock_artifact_writer::MockArtifactWriter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_scan_report_reader::MockScanReportReader;
