/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod artifact_names;
mod insights_request;
mod insights_response;

pub use artifact_names::{ArtifactNames, DEFAULT_ANNOTATIONS_FILE, DEFAULT_REPORT_FILE};
pub use insights_request::{InsightsRequest, DEFAULT_REPORT_TITLE, DEFAULT_REPORT_VENDOR};
pub use insights_response::InsightsResponse;
