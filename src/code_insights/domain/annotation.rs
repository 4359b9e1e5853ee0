use super::scan_report::Risk;
use serde::Serialize;

/// Annotation - one finding rendered for inline display on a pull request
///
/// Serializes with the field names of the Bitbucket Code Insights
/// annotation resource. Optional fields and an empty path are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub title: String,
    pub annotation_type: AnnotationType,
    pub summary: String,
    pub severity: AnnotationSeverity,
    #[serde(rename = "path", skip_serializing_if = "String::is_empty")]
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnotationType {
    Vulnerability,
    Bug,
    CodeSmell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnotationSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl From<Risk> for AnnotationSeverity {
    /// Unknown risk falls back to LOW.
    fn from(risk: Risk) -> Self {
        match risk {
            Risk::Critical => AnnotationSeverity::Critical,
            Risk::High => AnnotationSeverity::High,
            Risk::Medium => AnnotationSeverity::Medium,
            Risk::Low | Risk::Unknown => AnnotationSeverity::Low,
        }
    }
}
