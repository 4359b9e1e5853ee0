use crate::code_insights::domain::{
    DataPoint, FindingTally, InsightsReport, ReportHeader, ReportResult, ReportType, ScanReport,
};
use crate::code_insights::policies::VerdictPolicy;

const DETAILS_ISSUES_FOUND: &str = "Issues found, please check the report for details.";
const DETAILS_NO_ISSUES: &str = "No issues found.";

/// ReportAggregator service for building the Code Insights summary report
///
/// Tallies every finding in the scan report, applies the configured
/// [`VerdictPolicy`] and renders the verdict, details text and the
/// key/value data points. Pure: the scan report is only read.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportAggregator {
    policy: VerdictPolicy,
}

impl ReportAggregator {
    pub fn new(policy: VerdictPolicy) -> Self {
        Self { policy }
    }

    /// Counts findings by category across all packages
    pub fn tally(document: &ScanReport) -> FindingTally {
        document
            .packages
            .iter()
            .flat_map(|package| package.findings())
            .collect()
    }

    /// Generates the summary report for a scan
    ///
    /// # Arguments
    /// * `document` - The loaded vet scan report
    /// * `header` - Title and reporter to show on the report
    pub fn generate_report(&self, document: &ScanReport, header: &ReportHeader) -> InsightsReport {
        self.report_from_tally(&Self::tally(document), header)
    }

    /// Builds the summary report from counts already taken with [`Self::tally`]
    pub fn report_from_tally(&self, tally: &FindingTally, header: &ReportHeader) -> InsightsReport {
        let result = self.policy.verdict(tally);

        InsightsReport {
            title: header.title.clone(),
            details: Self::details(result, tally),
            report_type: ReportType::Security,
            reporter: header.reporter.clone(),
            result,
            data: Self::data_points(result, tally),
        }
    }

    fn details(result: ReportResult, tally: &FindingTally) -> String {
        match result {
            ReportResult::Failed => DETAILS_ISSUES_FOUND.to_string(),
            ReportResult::Passed if tally.suspicious > 0 => format!(
                "Found {} suspicious packages, human review is recommended",
                tally.suspicious
            ),
            ReportResult::Passed => DETAILS_NO_ISSUES.to_string(),
        }
    }

    fn data_points(result: ReportResult, tally: &FindingTally) -> Vec<DataPoint> {
        vec![
            DataPoint::boolean("Safe to Merge", result == ReportResult::Passed),
            DataPoint::number("Malicious Packages", tally.malicious),
            DataPoint::number("Suspicious Packages", tally.suspicious),
            DataPoint::number("Vulnerabilities", tally.vulnerabilities),
            DataPoint::number("Threats", tally.threats),
            DataPoint::number("Violations", tally.violations),
        ]
    }
}
