use std::fmt;

/// Extraction strategy selected for an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Embedded text layer, read with a PDF parser
    Pdf,
    /// Raster image, read with OCR
    Image,
}

impl DocumentKind {
    /// Map a lowercase extension without the leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "pdf" => Some(DocumentKind::Pdf),
            "png" | "jpg" | "jpeg" => Some(DocumentKind::Image),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Image => "image",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
