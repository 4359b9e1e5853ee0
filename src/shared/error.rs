use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI pipelines to tell a failing scan apart from a
/// broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Artifacts generated; scan passed or failing scans were not requested to fail
    Success = 0,
    /// Scan verdict is FAILED and `--fail-on-issues` was requested
    IssuesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable report, invalid config, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IssuesFound => write!(f, "Issues Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for Code Insights generation.
///
/// The `Report*` variants are the load failures of the vet JSON report.
/// They are terminal: the derivation layer never runs on a failed load.
#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("vet JSON report not found: {path}\n\n💡 Hint: Run vet with --report-json and pass the generated file with --json-report-file")]
    ReportNotFound { path: PathBuf },

    #[error("Failed to read vet JSON report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a readable regular file")]
    ReportReadError { path: PathBuf, details: String },

    #[error("Failed to parse vet JSON report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file was produced by vet's JSON reporter")]
    ReportParseError { path: PathBuf, details: String },

    #[error("Failed to serialize {artifact}\nDetails: {details}")]
    SerializationError { artifact: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
