//! PDF text extraction

pub mod pdf;

pub use pdf::PdfExtractor;
