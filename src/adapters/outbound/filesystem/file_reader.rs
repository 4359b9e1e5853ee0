use crate::code_insights::domain::ScanReport;
use crate::ports::outbound::ScanReportReader;
use crate::shared::error::InsightsError;
use crate::shared::security::{validate_readable_file, MAX_REPORT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for loading vet JSON reports from disk
///
/// Implements the ScanReportReader port. The file is checked before it is
/// read (no symlinks, regular file, size limit) and decoded with serde_json.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_report_content(&self, path: &Path) -> Result<String> {
        validate_readable_file(path, MAX_REPORT_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanReportReader for FileSystemReader {
    fn read_scan_report(&self, path: &Path) -> Result<ScanReport> {
        if !path.exists() {
            return Err(InsightsError::ReportNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content =
            self.read_report_content(path)
                .map_err(|e| InsightsError::ReportReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                })?;

        serde_json::from_str(&content).map_err(|e| {
            InsightsError::ReportParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
