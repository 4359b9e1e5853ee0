use crate::code_insights::domain::{Annotation, InsightsReport};
use crate::ports::outbound::ArtifactFormatter;
use crate::shared::error::InsightsError;
use crate::shared::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// JsonFormatter adapter for Code Insights JSON artifacts
///
/// Produces pretty JSON indented with tabs, ready to be uploaded to the
/// Bitbucket Code Insights API.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_tab_indented_json<T: Serialize + ?Sized>(value: &T, artifact: &str) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

        value
            .serialize(&mut serializer)
            .map_err(|e| InsightsError::SerializationError {
                artifact: artifact.to_string(),
                details: e.to_string(),
            })?;

        String::from_utf8(buffer).map_err(|e| {
            InsightsError::SerializationError {
                artifact: artifact.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactFormatter for JsonFormatter {
    fn format_report(&self, report: &InsightsReport) -> Result<String> {
        Self::to_tab_indented_json(report, "report")
    }

    fn format_annotations(&self, annotations: &[Annotation]) -> Result<String> {
        Self::to_tab_indented_json(annotations, "annotations")
    }
}
