/// Text extraction failures
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("Extractor panicked: {0}")]
    Panicked(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
