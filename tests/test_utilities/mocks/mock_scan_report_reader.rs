use std::path::Path;
use vet_code_insights::prelude::*;

/// Mock ScanReportReader for testing
///
/// Decodes an in-memory vet JSON document instead of touching the filesystem.
pub struct MockScanReportReader {
    content: String,
    should_fail: bool,
}

impl MockScanReportReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ScanReportReader for MockScanReportReader {
    fn read_scan_report(&self, path: &Path) -> Result<ScanReport> {
        if self.should_fail {
            anyhow::bail!("Mock failure: could not read {}", path.display());
        }
        Ok(serde_json::from_str(&self.content)?)
    }
}
