use crate::shared::error::SyncError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (10 MB)
/// Manifests and stylesheets are small; anything larger is suspect.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Safely read a text file with security checks:
/// - Reject symbolic links
/// - Check file size limits
/// - Validate file is a regular file
///
/// The full content is read into memory so that all validation can happen
/// before any write begins.
pub fn read_file_checked(path: &Path) -> Result<String> {
    // Get file metadata without following symlinks
    let metadata = fs::symlink_metadata(path).map_err(|e| SyncError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        return Err(SyncError::FileReadError {
            path: path.to_path_buf(),
            details: "Security: path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(SyncError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE {
        return Err(SyncError::FileReadError {
            path: path.to_path_buf(),
            details: format!(
                "Security: file is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, MAX_FILE_SIZE
            ),
        }
        .into());
    }

    fs::read_to_string(path).map_err(|e| {
        SyncError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Safely write a text file, truncating any residual content:
/// - Reject if the target exists and is a symlink
/// - Require the parent directory to exist
pub fn write_file_checked(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            return Err(SyncError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    if path.exists() {
        let metadata = fs::symlink_metadata(path).map_err(|e| SyncError::FileWriteError {
            path: path.to_path_buf(),
            details: format!("Failed to read file metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            return Err(SyncError::FileWriteError {
                path: path.to_path_buf(),
                details: "Security: target is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
            }
            .into());
        }
    }

    fs::write(path, content).map_err(|e| {
        SyncError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
