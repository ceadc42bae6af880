use crate::error::ProcessingError;
use crate::kind::DocumentKind;
use crate::text::normalize_text;
use crate::traits::TextExtractor;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Routes a stored upload to the extractor for its kind and normalizes the output.
#[derive(Clone)]
pub struct ExtractionDispatcher {
    pdf: Arc<dyn TextExtractor>,
    ocr: Arc<dyn TextExtractor>,
}

impl ExtractionDispatcher {
    pub fn new(pdf: Arc<dyn TextExtractor>, ocr: Arc<dyn TextExtractor>) -> Self {
        Self { pdf, ocr }
    }

    fn extractor_for(&self, kind: DocumentKind) -> &Arc<dyn TextExtractor> {
        match kind {
            DocumentKind::Pdf => &self.pdf,
            DocumentKind::Image => &self.ocr,
        }
    }

    /// Extract and normalize text. Exactly one extractor is invoked.
    ///
    /// Extractor errors and panics are both returned as `Err`; the caller
    /// decides how to report them.
    pub async fn extract(&self, path: &Path, kind: DocumentKind) -> Result<String, ProcessingError> {
        let extractor = self.extractor_for(kind);
        let start = Instant::now();

        let raw = match AssertUnwindSafe(extractor.extract(path))
            .catch_unwind()
            .await
        {
            Ok(result) => result?,
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                return Err(ProcessingError::Panicked(message));
            }
        };

        let text = normalize_text(&raw);
        tracing::debug!(
            extractor = extractor.name(),
            kind = %kind,
            raw_chars = raw.chars().count(),
            text_chars = text.chars().count(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Text extracted"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed {
        text: &'static str,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(text: &'static str) -> Arc<Self> {
            Arc::new(Self {
                text,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TextExtractor for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn extract(&self, _path: &Path) -> Result<String, ProcessingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.to_string())
        }
    }

    struct Panicking;

    #[async_trait]
    impl TextExtractor for Panicking {
        fn name(&self) -> &'static str {
            "panicking"
        }

        async fn extract(&self, _path: &Path) -> Result<String, ProcessingError> {
            panic!("decoder exploded");
        }
    }

    #[tokio::test]
    async fn test_routes_by_kind_and_calls_one_extractor() {
        let pdf = Fixed::new("  from \n pdf ");
        let ocr = Fixed::new("from ocr");
        let dispatcher = ExtractionDispatcher::new(pdf.clone(), ocr.clone());

        let text = dispatcher
            .extract(Path::new("cv.pdf"), DocumentKind::Pdf)
            .await
            .unwrap();
        assert_eq!(text, "from pdf");
        assert_eq!(pdf.calls.load(Ordering::SeqCst), 1);
        assert_eq!(ocr.calls.load(Ordering::SeqCst), 0);

        let text = dispatcher
            .extract(Path::new("scan.png"), DocumentKind::Image)
            .await
            .unwrap();
        assert_eq!(text, "from ocr");
        assert_eq!(pdf.calls.load(Ordering::SeqCst), 1);
        assert_eq!(ocr.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_panic_becomes_error() {
        let dispatcher = ExtractionDispatcher::new(Arc::new(Panicking), Fixed::new("unused"));
        let result = dispatcher
            .extract(Path::new("cv.pdf"), DocumentKind::Pdf)
            .await;
        match result {
            Err(ProcessingError::Panicked(message)) => assert_eq!(message, "decoder exploded"),
            other => panic!("expected panic error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_output_is_success() {
        let dispatcher = ExtractionDispatcher::new(Fixed::new(" \n "), Fixed::new(""));
        let text = dispatcher
            .extract(Path::new("blank.pdf"), DocumentKind::Pdf)
            .await
            .unwrap();
        assert_eq!(text, "");
    }
}
