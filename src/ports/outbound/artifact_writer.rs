use crate::shared::Result;

/// ArtifactWriter port for persisting generated artifacts
///
/// The file name is supplied by the caller from configuration; writers
/// decide only where the named artifact ends up (a directory, stdout, ...).
pub trait ArtifactWriter {
    /// Persists one serialized artifact
    ///
    /// # Arguments
    /// * `file_name` - Configured file name of the artifact
    /// * `content` - Serialized artifact content
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn write_artifact(&self, file_name: &str, content: &str) -> Result<()>;

    /// Persists a set of `(file_name, content)` artifacts together
    ///
    /// Writers with a durable destination override this so that either
    /// every artifact is persisted or none is. The default writes them in
    /// order and stops at the first failure.
    fn write_artifacts(&self, artifacts: &[(&str, &str)]) -> Result<()> {
        for (file_name, content) in artifacts {
            self.write_artifact(file_name, content)?;
        }
        Ok(())
    }
}

impl<T: ArtifactWriter + ?Sized> ArtifactWriter for Box<T> {
    fn write_artifact(&self, file_name: &str, content: &str) -> Result<()> {
        (**self).write_artifact(file_name, content)
    }

    fn write_artifacts(&self, artifacts: &[(&str, &str)]) -> Result<()> {
        (**self).write_artifacts(artifacts)
    }
}
