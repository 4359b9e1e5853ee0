use crate::code_insights::domain::{Annotation, FindingTally, InsightsReport};

/// InsightsResponse - Internal response DTO from Code Insights generation
///
/// Holds both derived artifacts; adapters serialize and persist them.
/// `tally` is the set of counts the report was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightsResponse {
    pub report: InsightsReport,
    pub annotations: Vec<Annotation>,
    pub tally: FindingTally,
}

impl InsightsResponse {
    pub fn new(report: InsightsReport, annotations: Vec<Annotation>, tally: FindingTally) -> Self {
        Self {
            report,
            annotations,
            tally,
        }
    }

    /// Whether the scan verdict allows merging
    pub fn is_safe_to_merge(&self) -> bool {
        self.report.is_passed()
    }
}
