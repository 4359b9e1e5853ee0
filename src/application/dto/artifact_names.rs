/// Default file name of the summary report artifact
pub const DEFAULT_REPORT_FILE: &str = "code-insights-report.json";

/// Default file name of the annotations artifact
pub const DEFAULT_ANNOTATIONS_FILE: &str = "code-insights-annotations.json";

/// ArtifactNames - file names the generated artifacts are saved under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    pub report_file: String,
    pub annotations_file: String,
}

impl ArtifactNames {
    pub fn new(report_file: impl Into<String>, annotations_file: impl Into<String>) -> Self {
        Self {
            report_file: report_file.into(),
            annotations_file: annotations_file.into(),
        }
    }
}

impl Default for ArtifactNames {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_FILE, DEFAULT_ANNOTATIONS_FILE)
    }
}
