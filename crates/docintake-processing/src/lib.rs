//! Text extraction for uploaded documents
//!
//! Validates an upload against the accepted document types, routes it to the
//! PDF parser or the OCR engine, and normalizes whatever text comes back.

pub mod dispatch;
pub mod document;
pub mod error;
pub mod kind;
pub mod ocr;
pub mod text;
pub mod traits;
pub mod validator;

pub use dispatch::ExtractionDispatcher;
pub use document::PdfExtractor;
pub use error::ProcessingError;
pub use kind::DocumentKind;
pub use ocr::TesseractExtractor;
pub use text::{normalize_text, MAX_TEXT_CHARS};
pub use traits::TextExtractor;
pub use validator::{FileValidator, ValidationError};
