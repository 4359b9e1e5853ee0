use crate::application::dto::{InsightsRequest, InsightsResponse};
use crate::code_insights::domain::{FindingTally, MalwareType, ScanReport};
use crate::code_insights::services::{Annotator, ReportAggregator};
use crate::ports::outbound::{ProgressReporter, ScanReportReader};
use crate::shared::Result;

/// GenerateInsightsUseCase - Core use case for Code Insights generation
///
/// Loads the vet report through the reader port, then derives the summary
/// report and the annotations from the same immutable document.
///
/// # Type Parameters
/// * `R` - ScanReportReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateInsightsUseCase<R, PR> {
    report_reader: R,
    progress_reporter: PR,
}

impl<R, PR> GenerateInsightsUseCase<R, PR>
where
    R: ScanReportReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateInsightsUseCase with injected dependencies
    pub fn new(report_reader: R, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            progress_reporter,
        }
    }

    /// Executes the Code Insights generation use case
    ///
    /// # Errors
    /// Only load failures are returned; derivation itself cannot fail.
    pub fn execute(&self, request: InsightsRequest) -> Result<InsightsResponse> {
        // Step 1: Load the scan report
        let document = self.load_report(&request)?;

        // Step 2: Derive both artifacts
        let response = Self::derive(&document, &request);

        // Step 3: Summarize
        self.report_summary(&document, &response);

        Ok(response)
    }

    /// Derives the report and annotations from an already loaded document
    pub fn derive(document: &ScanReport, request: &InsightsRequest) -> InsightsResponse {
        let tally = ReportAggregator::tally(document);
        let report =
            ReportAggregator::new(request.policy).report_from_tally(&tally, &request.header);
        let annotations = Annotator::generate_annotations(document);

        InsightsResponse::new(report, annotations, tally)
    }

    fn load_report(&self, request: &InsightsRequest) -> Result<ScanReport> {
        self.progress_reporter.report(&format!(
            "🔍 Loading vet JSON report: {}",
            request.report_path.display()
        ));

        let document = self.report_reader.read_scan_report(&request.report_path)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} package(s) from {} manifest(s)",
            document.packages.len(),
            document.manifests.len()
        ));

        Ok(document)
    }

    fn report_summary(&self, document: &ScanReport, response: &InsightsResponse) {
        self.progress_reporter.report(&format!(
            "📊 Findings: {}",
            Self::describe_tally(&response.tally)
        ));

        let unrecognised = Self::count_unrecognised_malware(document);
        if unrecognised > 0 {
            self.progress_reporter.report_error(&format!(
                "Skipped {} malware result(s) of unknown type",
                unrecognised
            ));
        }

        self.progress_reporter.report(&format!(
            "📝 Generated {} annotation(s)",
            response.annotations.len()
        ));
        self.progress_reporter.report(&format!(
            "🛡️  Verdict: {} - {}",
            response.report.result, response.report.details
        ));
    }

    fn count_unrecognised_malware(document: &ScanReport) -> usize {
        document
            .packages
            .iter()
            .flat_map(|package| &package.malware_info)
            .filter(|info| info.kind == MalwareType::Unknown)
            .count()
    }

    fn describe_tally(tally: &FindingTally) -> String {
        format!(
            "{} malicious, {} suspicious, {} vulnerabilities, {} threats, {} violations",
            tally.malicious, tally.suspicious, tally.vulnerabilities, tally.threats, tally.violations
        )
    }
}
