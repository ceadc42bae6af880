//! Application state shared by all handlers.
//!
//! Everything here is immutable after startup; requests share nothing mutable.

use docintake_core::Config;
use docintake_processing::{
    ExtractionDispatcher, FileValidator, PdfExtractor, TesseractExtractor, TextExtractor,
};
use docintake_storage::TransientStore;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub store: TransientStore,
    pub validator: FileValidator,
    pub dispatcher: ExtractionDispatcher,
}

impl AppState {
    /// Build state with the given extractors. Tests use this to swap in fakes.
    pub fn with_extractors(
        config: Config,
        pdf: Arc<dyn TextExtractor>,
        ocr: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            store: TransientStore::new(config.upload_dir()),
            validator: FileValidator::for_documents(config.max_file_size_bytes()),
            dispatcher: ExtractionDispatcher::new(pdf, ocr),
            config,
        }
    }

    /// Build state with the PDF parser and the Tesseract OCR engine.
    pub fn new(config: Config) -> Self {
        let pdf = Arc::new(PdfExtractor::new(config.pdf_max_pages()));
        let ocr = Arc::new(TesseractExtractor::new(
            config.tesseract_path(),
            config.ocr_language(),
        ));
        Self::with_extractors(config, pdf, ocr)
    }
}
