//! vet-code-insights - Bitbucket Code Insights artifacts from vet scan reports
//!
//! This library turns the JSON report written by the `vet` dependency
//! scanner into a Code Insights summary report (pass/fail verdict plus
//! metrics) and one annotation per finding, following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`code_insights`): scan report model, findings, verdict
//!   policy, and the pure aggregation/annotation services
//! - **Application Layer** (`application`): use cases and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error types, result alias and filesystem guards
//!
//! # Example
//!
//! ```no_run
//! use vet_code_insights::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateInsightsUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = InsightsRequest::new(
//!     PathBuf::from("vet-report.json"),
//!     ReportHeader::new("Dependency Scanning", "safedep/vet"),
//!     VerdictPolicy::DEFAULT,
//! );
//! let response = use_case.execute(request)?;
//!
//! let publisher = PublishArtifactsUseCase::new(
//!     JsonFormatter::new(),
//!     FileSystemWriter::new(PathBuf::from(".")),
//!     StderrProgressReporter::new(),
//! );
//! publisher.execute(&response, &ArtifactNames::default())?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod code_insights;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutWriter,
    };
    pub use crate::adapters::outbound::formatters::JsonFormatter;
    pub use crate::application::dto::{ArtifactNames, InsightsRequest, InsightsResponse};
    pub use crate::application::use_cases::{GenerateInsightsUseCase, PublishArtifactsUseCase};
    pub use crate::code_insights::domain::{
        Annotation, AnnotationSeverity, AnnotationType, DataPoint, DataType, DataValue, Finding,
        FindingTally, InsightsReport, PackageEntry, ReportHeader, ReportResult, ReportType,
        ScanReport,
    };
    pub use crate::code_insights::policies::{SuspiciousPolicy, VerdictPolicy};
    pub use crate::code_insights::services::{Annotator, ReportAggregator};
    pub use crate::ports::outbound::{
        ArtifactFormatter, ArtifactWriter, ProgressReporter, ScanReportReader,
    };
    pub use crate::shared::Result;
}
