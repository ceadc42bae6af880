use crate::error::ProcessingError;
use crate::traits::TextExtractor;
use async_trait::async_trait;
use std::path::Path;

/// Reads the embedded text layer of a PDF, capped to the first `max_pages` pages.
///
/// Parsing is CPU bound and runs on the blocking pool. A panic inside the
/// parser surfaces as `ProcessingError::Panicked`.
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    max_pages: usize,
}

impl PdfExtractor {
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }

    fn extract_pages(data: &[u8], max_pages: usize) -> Result<String, ProcessingError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| ProcessingError::Pdf(e.to_string()))?;
        let total = pages.len();

        let text = pages
            .into_iter()
            .take(max_pages)
            .collect::<Vec<_>>()
            .join("\n");

        if total > max_pages {
            tracing::debug!(total_pages = total, max_pages, "PDF truncated to page cap");
        }

        Ok(text)
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    async fn extract(&self, path: &Path) -> Result<String, ProcessingError> {
        let data = tokio::fs::read(path).await?;
        let max_pages = self.max_pages;

        tokio::task::spawn_blocking(move || Self::extract_pages(&data, max_pages))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    ProcessingError::Panicked("PDF parser panicked".to_string())
                } else {
                    ProcessingError::Pdf(format!("PDF extraction task failed: {}", e))
                }
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_fail() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();

        let result = PdfExtractor::new(50).extract(&path).await;
        assert!(matches!(
            result,
            Err(ProcessingError::Pdf(_)) | Err(ProcessingError::Panicked(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let result = PdfExtractor::new(50)
            .extract(&temp.path().join("gone.pdf"))
            .await;
        assert!(matches!(result, Err(ProcessingError::Io(_))));
    }
}
