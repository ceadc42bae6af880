use crate::error::ProcessingError;
use crate::traits::TextExtractor;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// OCR through the `tesseract` command line tool.
///
/// Runs `tesseract <image> stdout -l <language>` and returns stdout. A missing
/// binary or a non-zero exit status is reported as `ProcessingError::Ocr`.
#[derive(Debug, Clone)]
pub struct TesseractExtractor {
    binary: PathBuf,
    language: String,
}

impl TesseractExtractor {
    pub fn new(binary: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[async_trait]
impl TextExtractor for TesseractExtractor {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    async fn extract(&self, path: &Path) -> Result<String, ProcessingError> {
        let output = Command::new(&self.binary)
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                ProcessingError::Ocr(format!(
                    "Failed to run {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProcessingError::Ocr(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
