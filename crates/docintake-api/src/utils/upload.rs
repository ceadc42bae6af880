//! Multipart parsing for the upload form

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use docintake_core::validation::ApplicantFields;
use docintake_core::AppError;
use http_body_util::LengthLimitError;

/// The single file part of an upload, buffered in memory.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Everything the upload form carried. Nothing here has been validated yet.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub fields: ApplicantFields,
    pub file: Option<UploadedFile>,
}

/// True when the body limit cut the request short, however deep the
/// `LengthLimitError` sits in the source chain.
fn exceeded_body_limit(err: &MultipartError) -> bool {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return true;
    }
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        if cause.is::<LengthLimitError>() {
            return true;
        }
        source = cause.source();
    }
    false
}

fn multipart_error(err: MultipartError) -> AppError {
    if exceeded_body_limit(&err) {
        AppError::PayloadTooLarge(
            "Request data is too large. Please reduce the size and try again.".to_string(),
        )
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
    }
}

/// Read the upload form. Only one field named "file" is accepted, and reading
/// stops with `PayloadTooLarge` as soon as the file exceeds `max_file_size`.
/// Unknown fields are skipped.
pub async fn parse_upload_form(
    mut multipart: Multipart,
    max_file_size: usize,
) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "firstName" => form.fields.first_name = Some(field.text().await.map_err(multipart_error)?),
            "lastName" => form.fields.last_name = Some(field.text().await.map_err(multipart_error)?),
            "dob" => form.fields.date_of_birth = Some(field.text().await.map_err(multipart_error)?),
            "file" => {
                if form.file.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple file fields are not allowed; send exactly one field named 'file'"
                            .to_string(),
                    ));
                }
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let mut data = Vec::new();
                while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
                    if data.len() + chunk.len() > max_file_size {
                        return Err(AppError::PayloadTooLarge(format!(
                            "File is too large. Please upload a file under {}MB.",
                            max_file_size / 1024 / 1024
                        )));
                    }
                    data.extend_from_slice(&chunk);
                }

                form.file = Some(UploadedFile {
                    filename,
                    content_type,
                    data,
                });
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}
