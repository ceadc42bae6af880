use crate::kind::DocumentKind;
use std::path::Path;

/// Validation errors for uploaded documents
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid file extension: {extension:?} (allowed: {allowed:?})")]
    InvalidExtension {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Invalid content type: {content_type} (allowed: {allowed:?})")]
    InvalidContentType {
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("Empty file")]
    EmptyFile,
}

pub const DEFAULT_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];
pub const DEFAULT_CONTENT_TYPES: [&str; 4] =
    ["application/pdf", "image/png", "image/jpeg", "image/jpg"];

/// Upload validator
///
/// Checks an upload against the extension and content-type allow-lists and the
/// size limit. Extension and content type are each checked against their own
/// list; both must pass.
pub struct FileValidator {
    max_file_size: usize,
    allowed_extensions: Vec<String>,
    allowed_content_types: Vec<String>,
}

impl FileValidator {
    pub fn new(
        max_file_size: usize,
        allowed_extensions: Vec<String>,
        allowed_content_types: Vec<String>,
    ) -> Self {
        Self {
            max_file_size,
            allowed_extensions,
            allowed_content_types,
        }
    }

    /// Validator for the PDF and image types this service can extract.
    pub fn for_documents(max_file_size: usize) -> Self {
        Self::new(
            max_file_size,
            DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_CONTENT_TYPES.iter().map(|s| s.to_string()).collect(),
        )
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate file extension and return the document kind it maps to
    pub fn validate_extension(&self, filename: &str) -> Result<DocumentKind, ValidationError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::InvalidExtension {
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        DocumentKind::from_extension(&extension).ok_or_else(|| {
            ValidationError::InvalidExtension {
                extension,
                allowed: self.allowed_extensions.clone(),
            }
        })
    }

    /// Validate content type. Parameters such as `; charset=binary` are ignored.
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        let normalized = normalize_mime_type(content_type).to_lowercase();

        if !self
            .allowed_content_types
            .iter()
            .any(|ct| ct.eq_ignore_ascii_case(&normalized))
        {
            return Err(ValidationError::InvalidContentType {
                content_type: content_type.to_string(),
                allowed: self.allowed_content_types.clone(),
            });
        }

        Ok(())
    }

    /// Validate type first, then size, and return the kind to dispatch on.
    pub fn validate_all(
        &self,
        filename: &str,
        content_type: &str,
        file_size: usize,
    ) -> Result<DocumentKind, ValidationError> {
        let kind = self.validate_extension(filename)?;
        self.validate_content_type(content_type)?;
        self.validate_file_size(file_size)?;
        Ok(kind)
    }
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}
