use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use vet_code_insights::prelude::*;

/// Mock ArtifactWriter for testing that keeps written artifacts in memory
#[derive(Default, Clone)]
pub struct MockArtifactWriter {
    artifacts: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockArtifactWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// File names in the order they were written
    pub fn written_names(&self) -> Vec<String> {
        self.artifacts
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn contents(&self) -> HashMap<String, String> {
        self.artifacts.lock().unwrap().iter().cloned().collect()
    }
}

impl ArtifactWriter for MockArtifactWriter {
    fn write_artifact(&self, file_name: &str, content: &str) -> Result<()> {
        self.artifacts
            .lock()
            .unwrap()
            .push((file_name.to_string(), content.to_string()));
        Ok(())
    }
}
