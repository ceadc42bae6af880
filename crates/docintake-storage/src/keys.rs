//! Stored-name generation for transient uploads.
//!
//! Name format: `{unix_millis}-{uuid}-{sanitized_original_name}`. The timestamp keeps
//! names sortable by arrival, the UUID keeps concurrent uploads of the same file apart.

use crate::error::{StorageError, StorageResult};
use uuid::Uuid;

const MAX_FILENAME_LENGTH: usize = 255;

/// Generate a unique stored name for an upload.
pub fn generate_stored_name(original_filename: &str) -> StorageResult<String> {
    let sanitized = sanitize_filename(original_filename)?;
    Ok(format!(
        "{}-{}-{}",
        chrono::Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        sanitized
    ))
}

/// Reduce a client filename to a safe basename. Directory parts are dropped, so
/// dots inside the basename are harmless; only a bare `.` or `..` is an error.
pub fn sanitize_filename(filename: &str) -> StorageResult<String> {
    // Browsers may send either separator, whatever the server platform.
    let filename_only = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    if filename_only == "." || filename_only == ".." {
        return Err(StorageError::InvalidName(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches(['_', '.']).is_empty() {
        return Ok("file".to_string());
    }

    Ok(sanitized)
}
