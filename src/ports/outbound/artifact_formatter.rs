use crate::code_insights::domain::{Annotation, InsightsReport};
use crate::shared::Result;

/// ArtifactFormatter port for serializing Code Insights artifacts
pub trait ArtifactFormatter {
    fn format_report(&self, report: &InsightsReport) -> Result<String>;

    fn format_annotations(&self, annotations: &[Annotation]) -> Result<String>;
}
