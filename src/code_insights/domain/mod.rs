pub mod annotation;
pub mod finding;
pub mod insights_report;
pub mod scan_report;

pub use annotation::{Annotation, AnnotationSeverity, AnnotationType};
pub use finding::{Finding, FindingTally};
pub use insights_report::{
    DataPoint, DataType, DataValue, InsightsReport, ReportHeader, ReportResult, ReportType,
};
pub use scan_report::{
    Filter, MalwareInfo, MalwareType, Manifest, PackageDetails, PackageEntry, Risk, ScanReport,
    Threat, Violation, Vulnerability, VulnerabilitySeverity,
};
