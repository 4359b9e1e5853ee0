use clap::Parser;
use std::path::PathBuf;

/// Generate Bitbucket Code Insights artifacts from a vet JSON report
#[derive(Parser, Debug)]
#[command(name = "vet-code-insights")]
#[command(version)]
#[command(
    about = "Generate Bitbucket Code Insights report and annotations from a vet JSON report",
    long_about = None
)]
pub struct Args {
    /// Vet generated JSON report file path
    #[arg(short = 'r', long = "json-report-file", value_name = "FILE")]
    pub json_report_file: PathBuf,

    /// Directory the report and annotations files are written to
    /// (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Title of the Code Insights report
    #[arg(long)]
    pub report_title: Option<String>,

    /// Reporter (vendor) name shown on the Code Insights report
    #[arg(long)]
    pub report_vendor: Option<String>,

    /// Path to a config file (defaults to ./vet-code-insights.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail the verdict when suspicious packages are found
    #[arg(long)]
    pub fail_on_suspicious: bool,

    /// Exit with code 1 when the verdict is FAILED
    #[arg(long)]
    pub fail_on_issues: bool,

    /// Print the artifacts to stdout instead of writing files
    #[arg(long, conflicts_with = "output_dir")]
    pub stdout: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
