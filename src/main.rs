mod cli;

use cli::Args;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use vet_code_insights::adapters::outbound::console::StderrProgressReporter;
use vet_code_insights::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutWriter,
};
use vet_code_insights::adapters::outbound::formatters::JsonFormatter;
use vet_code_insights::application::dto::{
    ArtifactNames, InsightsRequest, InsightsResponse, DEFAULT_ANNOTATIONS_FILE,
    DEFAULT_REPORT_FILE, DEFAULT_REPORT_TITLE, DEFAULT_REPORT_VENDOR,
};
use vet_code_insights::application::use_cases::{
    GenerateInsightsUseCase, PublishArtifactsUseCase,
};
use vet_code_insights::code_insights::domain::{ReportHeader, ReportResult};
use vet_code_insights::code_insights::policies::VerdictPolicy;
use vet_code_insights::config::{self, ConfigFile};
use vet_code_insights::ports::outbound::{ArtifactWriter, ProgressReporter};
use vet_code_insights::shared::error::ExitCode;
use vet_code_insights::shared::Result;

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Settings after merging CLI flags over config values over defaults
#[derive(Debug, PartialEq)]
struct Settings {
    header: ReportHeader,
    names: ArtifactNames,
    output_dir: PathBuf,
    policy: VerdictPolicy,
    fail_on_issues: bool,
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    report_unknown_fields(&config, &StderrProgressReporter::new());
    let settings = resolve_settings(&args, config);

    let use_case =
        GenerateInsightsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let request = InsightsRequest::new(
        args.json_report_file.clone(),
        settings.header.clone(),
        settings.policy,
    );
    let response = use_case.execute(request)?;

    let writer: Box<dyn ArtifactWriter> = if args.stdout {
        Box::new(StdoutWriter::new())
    } else {
        Box::new(FileSystemWriter::new(settings.output_dir.clone()))
    };
    let publisher =
        PublishArtifactsUseCase::new(JsonFormatter::new(), writer, StderrProgressReporter::new());
    publisher.execute(&response, &settings.names)?;

    print_verdict(&response);

    Ok(exit_code_for(&response, settings.fail_on_issues))
}

/// Explicit `--config` must exist; otherwise a config in the working directory is optional.
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

fn report_unknown_fields(config: &ConfigFile, reporter: &impl ProgressReporter) {
    for key in config.unknown_field_names() {
        reporter.report_error(&format!("Unknown config field '{}' will be ignored.", key));
    }
}

fn resolve_settings(args: &Args, config: ConfigFile) -> Settings {
    let title = args
        .report_title
        .clone()
        .or(config.report_title)
        .unwrap_or_else(|| DEFAULT_REPORT_TITLE.to_string());
    let reporter = args
        .report_vendor
        .clone()
        .or(config.report_vendor)
        .unwrap_or_else(|| DEFAULT_REPORT_VENDOR.to_string());

    let names = ArtifactNames::new(
        config
            .report_file
            .unwrap_or_else(|| DEFAULT_REPORT_FILE.to_string()),
        config
            .annotations_file
            .unwrap_or_else(|| DEFAULT_ANNOTATIONS_FILE.to_string()),
    );

    let output_dir = args
        .output_dir
        .clone()
        .or(config.output_dir.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    let fail_on_suspicious =
        args.fail_on_suspicious || config.fail_on_suspicious.unwrap_or(false);
    let fail_on_issues = args.fail_on_issues || config.fail_on_issues.unwrap_or(false);

    Settings {
        header: ReportHeader::new(title, reporter),
        names,
        output_dir,
        policy: VerdictPolicy::from_fail_on_suspicious(fail_on_suspicious),
        fail_on_issues,
    }
}

fn print_verdict(response: &InsightsResponse) {
    let verdict = match response.report.result {
        ReportResult::Passed => "PASSED".green().bold().to_string(),
        ReportResult::Failed => "FAILED".red().bold().to_string(),
    };
    eprintln!("\n{} {}", verdict, response.report.details);
}

fn exit_code_for(response: &InsightsResponse, fail_on_issues: bool) -> ExitCode {
    if fail_on_issues && !response.is_safe_to_merge() {
        ExitCode::IssuesFound
    } else {
        ExitCode::Success
    }
}
