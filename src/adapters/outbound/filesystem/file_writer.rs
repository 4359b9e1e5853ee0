use crate::ports::outbound::ArtifactWriter;
use crate::shared::error::InsightsError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemWriter adapter for writing artifacts into an output directory
///
/// This adapter implements the ArtifactWriter port for file output. A set of
/// artifacts is published all-or-nothing: every target is validated and
/// every artifact is staged in a temporary file inside the output directory
/// before any of them is renamed into place.
pub struct FileSystemWriter {
    output_dir: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Full path an artifact with the given file name is written to
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    fn staging_dir(&self) -> &Path {
        if self.output_dir == Path::new("") {
            Path::new(".")
        } else {
            &self.output_dir
        }
    }

    fn validate_output_dir(&self, output_path: &Path) -> Result<()> {
        if !self.staging_dir().is_dir() {
            return Err(InsightsError::FileWriteError {
                path: output_path.to_path_buf(),
                details: format!(
                    "Output directory does not exist: {}",
                    self.output_dir.display()
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Existing output files must not be symbolic links
    fn validate_output_security(&self, output_path: &Path) -> Result<()> {
        if fs::symlink_metadata(output_path).is_ok() {
            validate_not_symlink(output_path, "write").map_err(|e| {
                InsightsError::FileWriteError {
                    path: output_path.to_path_buf(),
                    details: e.to_string(),
                }
            })?;
        }
        Ok(())
    }

    /// Writes content to a temporary file next to its final location
    ///
    /// The temporary file is removed when dropped without being persisted.
    fn stage(&self, output_path: &Path, content: &str) -> Result<NamedTempFile> {
        let write_error = |e: io::Error| InsightsError::FileWriteError {
            path: output_path.to_path_buf(),
            details: e.to_string(),
        };

        let mut staged = NamedTempFile::new_in(self.staging_dir()).map_err(write_error)?;
        staged
            .write_all(content.as_bytes())
            .and_then(|_| staged.flush())
            .map_err(write_error)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .map_err(write_error)?;
        }

        Ok(staged)
    }
}

impl ArtifactWriter for FileSystemWriter {
    fn write_artifact(&self, file_name: &str, content: &str) -> Result<()> {
        self.write_artifacts(&[(file_name, content)])
    }

    fn write_artifacts(&self, artifacts: &[(&str, &str)]) -> Result<()> {
        let targets: Vec<PathBuf> = artifacts
            .iter()
            .map(|(file_name, _)| self.artifact_path(file_name))
            .collect();

        for output_path in &targets {
            self.validate_output_dir(output_path)?;
            self.validate_output_security(output_path)?;
        }

        let mut staged = Vec::with_capacity(artifacts.len());
        for ((_, content), output_path) in artifacts.iter().zip(&targets) {
            staged.push((self.stage(output_path, content)?, output_path));
        }

        for (file, output_path) in staged {
            file.persist(output_path)
                .map_err(|e| InsightsError::FileWriteError {
                    path: output_path.clone(),
                    details: e.error.to_string(),
                })?;
        }

        Ok(())
    }
}

/// StdoutWriter adapter for writing artifacts to stdout
///
/// Each artifact is printed after a `# <file name>` marker line.
pub struct StdoutWriter;

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactWriter for StdoutWriter {
    fn write_artifact(&self, file_name: &str, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "# {}", file_name)
            .and_then(|_| writeln!(stdout, "{}", content))
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();

        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());
        writer
            .write_artifact("code-insights-report.json", "{}")
            .unwrap();

        let written = fs::read_to_string(temp_dir.path().join("code-insights-report.json")).unwrap();
        assert_eq!(written, "{}");
    }

    #[test]
    fn test_file_writer_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        fs::write(&path, "old").unwrap();

        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());
        writer.write_artifact("out.json", "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_file_writer_output_dir_not_found() {
        let writer = FileSystemWriter::new(PathBuf::from("/nonexistent/directory"));
        let result = writer.write_artifact("out.json", "{}");

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Output directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("out.json")).unwrap();

        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());
        let result = writer.write_artifact("out.json", "{}");

        assert!(format!("{}", result.unwrap_err()).contains("symbolic link"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_artifacts_is_all_or_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("elsewhere.json");
        fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("annotations.json")).unwrap();

        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());
        let result = writer.write_artifacts(&[("report.json", "{}"), ("annotations.json", "[]")]);

        assert!(format!("{}", result.unwrap_err()).contains("symbolic link"));
        assert!(!temp_dir.path().join("report.json").exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "");
    }

    #[test]
    fn test_write_artifacts_leaves_no_staging_files() {
        let temp_dir = TempDir::new().unwrap();

        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());
        writer
            .write_artifacts(&[("report.json", "{}"), ("annotations.json", "[]")])
            .unwrap();

        let mut names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["annotations.json", "report.json"]);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("annotations.json")).unwrap(),
            "[]"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_written_artifact_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());
        writer.write_artifact("report.json", "{}").unwrap();

        let mode = fs::metadata(temp_dir.path().join("report.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_artifact_path_joins_output_dir() {
        let writer = FileSystemWriter::new(PathBuf::from("out"));
        assert_eq!(
            writer.artifact_path("report.json"),
            PathBuf::from("out").join("report.json")
        );
    }

    #[test]
    fn test_stdout_writer_success() {
        let writer = StdoutWriter::new();
        assert!(writer.write_artifact("report.json", "{}").is_ok());
    }
}
