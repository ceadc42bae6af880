//! Error types module
//!
//! All request-level failures are unified under `AppError`. Each variant describes
//! its own HTTP presentation through the `ErrorMetadata` trait so the API layer can
//! render it without matching on variants.
//!
//! Extraction failures are intentionally absent here: they never become an error
//! response, the upload handler turns them into a partial-success body instead.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for limits and blocked requests
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "INVALID_INPUT")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid date of birth: {0}")]
    InvalidDateOfBirth(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Origin not allowed: {0}")]
    OriginNotAllowed(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, recoverable, suggested_action, sensitive, log_level).
fn app_error_static_metadata(
    err: &AppError,
) -> (
    u16,
    &'static str,
    bool,
    Option<&'static str>,
    bool,
    LogLevel,
) {
    match err {
        AppError::InvalidInput(_) => (
            400,
            "INVALID_INPUT",
            false,
            Some("Check request parameters and try again"),
            false,
            LogLevel::Debug,
        ),
        AppError::MissingFields(_) => (
            400,
            "MISSING_FIELDS",
            false,
            Some("Provide first name, last name, date of birth, and a file"),
            false,
            LogLevel::Debug,
        ),
        AppError::InvalidDateOfBirth(_) => (
            400,
            "INVALID_DATE_OF_BIRTH",
            false,
            Some("Use a YYYY-MM-DD date that is not in the future"),
            false,
            LogLevel::Debug,
        ),
        AppError::UnsupportedFileType(_) => (
            400,
            "UNSUPPORTED_FILE_TYPE",
            false,
            Some("Upload a PDF or an image (PNG, JPG, JPEG)"),
            false,
            LogLevel::Debug,
        ),
        AppError::PayloadTooLarge(_) => (
            413,
            "PAYLOAD_TOO_LARGE",
            false,
            Some("Reduce the file size and try again"),
            false,
            LogLevel::Warn,
        ),
        AppError::OriginNotAllowed(_) => (
            403,
            "ORIGIN_NOT_ALLOWED",
            false,
            None,
            false,
            LogLevel::Warn,
        ),
        AppError::Internal(_) | AppError::InternalWithSource { .. } => (
            500,
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::MissingFields(_) => "MissingFields",
            AppError::InvalidDateOfBirth(_) => "InvalidDateOfBirth",
            AppError::UnsupportedFileType(_) => "UnsupportedFileType",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::OriginNotAllowed(_) => "OriginNotAllowed",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).3
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).4
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).5
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::MissingFields(_) => {
                "Please provide first name, last name, date of birth, and a file.".to_string()
            }
            AppError::InvalidDateOfBirth(_) => "Invalid or future date of birth.".to_string(),
            AppError::UnsupportedFileType(_) => {
                "Only PDFs and images (PNG, JPG, JPEG) are allowed.".to_string()
            }
            AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::OriginNotAllowed(_) => "Request blocked by CORS policy.".to_string(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Something went wrong on our end. Please try again later.".to_string()
            }
        }
    }
}
