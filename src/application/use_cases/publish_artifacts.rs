use crate::application::dto::{ArtifactNames, InsightsResponse};
use crate::ports::outbound::{ArtifactFormatter, ArtifactWriter, ProgressReporter};
use crate::shared::Result;

/// PublishArtifactsUseCase - serializes and saves the generated artifacts
///
/// The report and the annotations are published together, report first.
/// File names come from [`ArtifactNames`], which the driver builds from
/// configuration.
///
/// # Type Parameters
/// * `F` - ArtifactFormatter implementation
/// * `W` - ArtifactWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct PublishArtifactsUseCase<F, W, PR> {
    formatter: F,
    writer: W,
    progress_reporter: PR,
}

impl<F, W, PR> PublishArtifactsUseCase<F, W, PR>
where
    F: ArtifactFormatter,
    W: ArtifactWriter,
    PR: ProgressReporter,
{
    pub fn new(formatter: F, writer: W, progress_reporter: PR) -> Self {
        Self {
            formatter,
            writer,
            progress_reporter,
        }
    }

    /// Formats both artifacts, then hands them to the writer as one set
    ///
    /// A formatting failure writes nothing; the writer decides how the
    /// set is persisted atomically.
    pub fn execute(&self, response: &InsightsResponse, names: &ArtifactNames) -> Result<()> {
        let report = self.formatter.format_report(&response.report)?;
        let annotations = self.formatter.format_annotations(&response.annotations)?;

        let artifacts = [
            (names.report_file.as_str(), report.as_str()),
            (names.annotations_file.as_str(), annotations.as_str()),
        ];

        for (file_name, _) in &artifacts {
            self.progress_reporter
                .report(&format!("💾 Saving artifact: {}", file_name));
        }
        self.writer.write_artifacts(&artifacts)?;
        for (file_name, _) in &artifacts {
            self.progress_reporter
                .report_completion(&format!("Saved: {}", file_name));
        }

        Ok(())
    }
}
