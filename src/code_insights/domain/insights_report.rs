use serde::Serialize;

/// InsightsReport - the Code Insights summary report
///
/// Serializes with the field names of the Bitbucket Code Insights
/// report resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsReport {
    pub title: String,
    pub details: String,
    pub report_type: ReportType,
    pub reporter: String,
    pub result: ReportResult,
    pub data: Vec<DataPoint>,
}

impl InsightsReport {
    pub fn is_passed(&self) -> bool {
        self.result == ReportResult::Passed
    }
}

/// Title and reporter shown for the report; both come from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub title: String,
    pub reporter: String,
}

impl ReportHeader {
    pub fn new(title: impl Into<String>, reporter: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            reporter: reporter.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    Security,
}

/// Verdict of the whole scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportResult {
    Passed,
    Failed,
}

impl std::fmt::Display for ReportResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportResult::Passed => write!(f, "PASSED"),
            ReportResult::Failed => write!(f, "FAILED"),
        }
    }
}

/// A named value shown in the report's key/value panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub title: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
    pub value: DataValue,
}

impl DataPoint {
    pub fn boolean(title: &str, value: bool) -> Self {
        Self {
            title: title.to_string(),
            data_type: DataType::Boolean,
            value: DataValue::Boolean(value),
        }
    }

    pub fn number(title: &str, value: usize) -> Self {
        Self {
            title: title.to_string(),
            data_type: DataType::Number,
            value: DataValue::Number(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Boolean,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DataValue {
    Boolean(bool),
    Number(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_point_serialization() {
        let boolean = serde_json::to_value(DataPoint::boolean("Safe to Merge", true)).unwrap();
        assert_eq!(
            boolean,
            json!({"title": "Safe to Merge", "type": "BOOLEAN", "value": true})
        );

        let number = serde_json::to_value(DataPoint::number("Threats", 3)).unwrap();
        assert_eq!(number, json!({"title": "Threats", "type": "NUMBER", "value": 3}));
    }

    #[test]
    fn test_report_serialization_field_names() {
        let report = InsightsReport {
            title: "Scan".to_string(),
            details: "No issues found.".to_string(),
            report_type: ReportType::Security,
            reporter: "safedep/vet".to_string(),
            result: ReportResult::Passed,
            data: vec![],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["report_type"], "SECURITY");
        assert_eq!(value["result"], "PASSED");
        assert_eq!(value["reporter"], "safedep/vet");
        assert!(report.is_passed());
    }

    #[test]
    fn test_report_result_display() {
        assert_eq!(ReportResult::Passed.to_string(), "PASSED");
        assert_eq!(ReportResult::Failed.to_string(), "FAILED");
    }
}
