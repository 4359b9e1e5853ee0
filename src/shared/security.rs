use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a scan report accepted for reading (100 MB)
pub const MAX_REPORT_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a path that is a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - The operation being attempted ("read", "write"), for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path is a regular file within the size limit
///
/// # Errors
/// Returns an error if the path cannot be inspected, is a symbolic link,
/// is not a regular file, or is larger than `max_size` bytes.
pub fn validate_readable_file(path: &Path, max_size: u64) -> Result<()> {
    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read metadata of {}: {}", path.display(), e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/report.json");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("report.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "read").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_readable_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_readable_file(&file_path, MAX_REPORT_SIZE).is_ok());
    }

    #[test]
    fn test_validate_readable_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_readable_file(temp_dir.path(), MAX_REPORT_SIZE);
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_readable_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.json");
        fs::write(&file_path, "0123456789").unwrap();

        let result = validate_readable_file(&file_path, 4);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/report.json");
        assert!(validate_file_size(1000, &path, MAX_REPORT_SIZE).is_ok());
    }

    #[test]
    fn test_max_report_size_constant() {
        assert_eq!(MAX_REPORT_SIZE, 100 * 1024 * 1024);
    }
}
