use crate::code_insights::domain::ReportHeader;
use crate::code_insights::policies::VerdictPolicy;
use std::path::PathBuf;

/// Report title used when neither the CLI nor the config sets one
pub const DEFAULT_REPORT_TITLE: &str = "Vet Dependency Scanning";

/// Reporter used when neither the CLI nor the config sets one
pub const DEFAULT_REPORT_VENDOR: &str = "safedep/vet";

/// InsightsRequest - Internal request DTO for Code Insights generation
#[derive(Debug, Clone)]
pub struct InsightsRequest {
    /// Path to the vet JSON report
    pub report_path: PathBuf,
    /// Title and reporter shown on the generated report
    pub header: ReportHeader,
    /// Rule deciding the PASSED/FAILED verdict
    pub policy: VerdictPolicy,
}

impl InsightsRequest {
    pub fn new(report_path: PathBuf, header: ReportHeader, policy: VerdictPolicy) -> Self {
        Self {
            report_path,
            header,
            policy,
        }
    }
}
