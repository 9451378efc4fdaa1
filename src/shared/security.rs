use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum POM size accepted from the disk cache or a repository (10 MB)
pub const MAX_POM_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum config file size (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
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

/// Validates that a path exists and is a regular file (not a directory or symlink)
/// no larger than `max_size` bytes
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
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

/// Validates a coordinate component before it is spliced into a URL or a cache path
///
/// # Security
/// Prevents URL injection and path traversal out of the repository layout:
/// coordinates come from remote POM documents and are not trusted.
///
/// # Arguments
/// * `component` - The groupId, artifactId or version to check
/// * `component_type` - Human-readable name for error messages
///
/// # Errors
/// Returns an error if the component is empty, contains path separators,
/// a `..` sequence, or URL-unsafe characters
pub fn validate_path_component(component: &str, component_type: &str) -> Result<()> {
    if component.is_empty() {
        anyhow::bail!("{} must not be empty", component_type);
    }

    if component.contains('/') || component.contains('\\') {
        anyhow::bail!(
            "Security: {} '{}' contains path separators which are not allowed",
            component_type,
            component
        );
    }

    if component.contains("..") {
        anyhow::bail!(
            "Security: {} '{}' contains '..' which is not allowed",
            component_type,
            component
        );
    }

    if component.contains('#') || component.contains('?') || component.chars().any(char::is_control)
    {
        anyhow::bail!(
            "Security: {} '{}' contains URL-unsafe characters",
            component_type,
            component
        );
    }

    Ok(())
}
