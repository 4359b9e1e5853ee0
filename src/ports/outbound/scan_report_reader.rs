use crate::code_insights::domain::ScanReport;
use crate::shared::Result;
use std::path::Path;

/// ScanReportReader port for loading the vet JSON report
///
/// This port abstracts where the scan report comes from and how it is
/// decoded. The derivation services only ever see a successfully loaded
/// [`ScanReport`].
pub trait ScanReportReader {
    /// Reads and decodes the scan report at the given path
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report file does not exist or cannot be read
    /// - The content is not a valid vet JSON report
    fn read_scan_report(&self, path: &Path) -> Result<ScanReport>;
}
