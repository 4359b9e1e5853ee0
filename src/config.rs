//! Configuration file support for vet-code-insights.
//!
//! Provides YAML-based configuration through `vet-code-insights.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::error::InsightsError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "vet-code-insights.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub report_title: Option<String>,
    pub report_vendor: Option<String>,
    pub report_file: Option<String>,
    pub annotations_file: Option<String>,
    pub output_dir: Option<String>,
    pub fail_on_suspicious: Option<bool>,
    pub fail_on_issues: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Names of fields this tool does not recognise, sorted
    pub fn unknown_field_names(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.unknown_fields.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let file_names = [
        ("report_file", &config.report_file),
        ("annotations_file", &config.annotations_file),
    ];

    for (field, value) in file_names {
        if let Some(name) = value {
            validate_file_name(field, name)?;
        }
    }

    if let (Some(report), Some(annotations)) = (&config.report_file, &config.annotations_file) {
        if report == annotations {
            return Err(InsightsError::Validation {
                message: format!(
                    "report_file and annotations_file must differ (both are '{}')",
                    report
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Artifact names are plain file names placed inside the output directory.
fn validate_file_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InsightsError::Validation {
            message: format!("{} must not be empty", field),
        }
        .into());
    }

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(InsightsError::Validation {
            message: format!(
                "{} must be a file name, not a path (got '{}'). Use output_dir to choose the directory",
                field, name
            ),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
report_title: "Dependency Scanning"
report_vendor: "safedep/vet-bitbucket-pipe"
report_file: report.json
annotations_file: annotations.json
output_dir: out
fail_on_suspicious: true
fail_on_issues: false
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.report_title.as_deref(), Some("Dependency Scanning"));
        assert_eq!(
            config.report_vendor.as_deref(),
            Some("safedep/vet-bitbucket-pipe")
        );
        assert_eq!(config.report_file.as_deref(), Some("report.json"));
        assert_eq!(config.annotations_file.as_deref(), Some("annotations.json"));
        assert_eq!(config.output_dir.as_deref(), Some("out"));
        assert_eq!(config.fail_on_suspicious, Some(true));
        assert_eq!(config.fail_on_issues, Some(false));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "report_title: Discovered\n",
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.report_title.as_deref(), Some("Discovered"));
        assert_eq!(config.fail_on_suspicious, None);
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_report_file_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "report_file: \"   \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("report_file must not be empty"));
    }

    #[test]
    fn test_path_as_file_name_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "annotations_file: ../annotations.json\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("annotations_file must be a file name"));
    }

    #[test]
    fn test_identical_file_names_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            "report_file: same.json\nannotations_file: same.json\n",
        )
        .unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must differ"));
    }

    #[test]
    fn test_unknown_field_names_sorted() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
report_title: Scan
unknown_field: true
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.unknown_field_names(),
            vec!["another_unknown", "unknown_field"]
        );
    }

    #[test]
    fn test_empty_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "{}\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.report_title.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
