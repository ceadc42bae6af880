//! Optical character recognition for raster images

pub mod tesseract;

pub use tesseract::TesseractExtractor;
