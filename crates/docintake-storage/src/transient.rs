use crate::error::{StorageError, StorageResult};
use crate::keys::generate_stored_name;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Directory holding uploads for the duration of a single request.
#[derive(Clone, Debug)]
pub struct TransientStore {
    base_path: PathBuf,
}

impl TransientStore {
    /// Create a store rooted at `base_path`. The directory is created lazily on
    /// first write, so a missing directory at startup is not an error.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Write `data` under a fresh unique name and return the owning guard.
    ///
    /// If any step after the file is created fails, the guard is dropped and the
    /// partial file removed before the error is returned.
    pub async fn persist(&self, original_filename: &str, data: &[u8]) -> StorageResult<TransientFile> {
        // create_dir_all succeeds when another request created the directory first
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to create upload directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let path = self.base_path.join(generate_stored_name(original_filename)?);
        let start = std::time::Instant::now();

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
            })?;
        let guard = TransientFile::new(path);

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to write file {}: {}",
                guard.path().display(),
                e
            ))
        })?;
        file.flush().await?;

        tracing::debug!(
            path = %guard.path().display(),
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Upload stored"
        );

        Ok(guard)
    }
}

/// Exclusive handle on a stored upload.
///
/// The file is removed exactly once: by `release` on normal paths, or by `Drop`
/// when the guard goes out of scope unreleased (early return, panic unwind).
/// Removal failures are logged and never surfaced.
#[derive(Debug)]
pub struct TransientFile {
    path: PathBuf,
    released: bool,
}

impl TransientFile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            released: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file now.
    pub async fn release(mut self) {
        let result = fs::remove_file(&self.path).await;
        self.released = true;
        log_removal(&self.path, result);
    }
}

impl Drop for TransientFile {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        log_removal(&self.path, std::fs::remove_file(&self.path));
    }
}

fn log_removal(path: &Path, result: std::io::Result<()>) {
    match result {
        Ok(()) => tracing::debug!(path = %path.display(), "Upload removed"),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Upload already removed")
        }
        Err(e) => tracing::warn!(
            path = %path.display(),
            error = %e,
            "Failed to remove upload"
        ),
    }
}
