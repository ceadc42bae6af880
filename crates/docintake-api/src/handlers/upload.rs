use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::parse_upload_form;
use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::Json;
use chrono::Local;
use docintake_core::models::ExtractionResponse;
use docintake_core::validation::validate_applicant;
use docintake_core::AppError;
use std::sync::Arc;
use std::time::Instant;

/// Message returned in place of text when extraction fails.
pub const EXTRACTION_FAILED_MESSAGE: &str = "Couldn't read the file. Try a different one.";

/// Upload a document and extract its text.
///
/// Field and file validation failures are 400s and never touch the disk. Once
/// the upload is valid, a failure to read the document is not an error: the
/// response is a 200 carrying `fullName`, `age` and `error` instead of
/// `extractedText`. The stored file is removed before the response is sent.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    request_body(
        content = inline(Object),
        content_type = "multipart/form-data",
        description = "Fields: firstName, lastName, dob (YYYY-MM-DD), file (PDF, PNG, JPG or JPEG)"
    ),
    responses(
        (status = 200, description = "Text extracted, or `error` set when the document could not be read", body = ExtractionResponse),
        (status = 400, description = "Missing field, invalid date of birth or unsupported file type", body = ErrorResponse),
        (status = 403, description = "Origin not allowed", body = ErrorResponse),
        (status = 413, description = "File or request too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractionResponse>, HttpAppError> {
    let multipart = multipart.map_err(|e| {
        AppError::InvalidInput(format!("Expected a multipart form: {}", e.body_text()))
    })?;
    let form = parse_upload_form(multipart, state.validator.max_file_size()).await?;

    let today = Local::now().date_naive();
    let applicant = validate_applicant(form.fields, form.file.is_some(), today)?;
    let file = form
        .file
        .ok_or_else(|| AppError::MissingFields(vec!["file"]))?;
    let kind = state
        .validator
        .validate_all(&file.filename, &file.content_type, file.data.len())?;

    let full_name = applicant.full_name();
    let age = applicant.age_on(today).to_string();

    let stored = state.store.persist(&file.filename, &file.data).await?;
    let start = Instant::now();

    let response = match state.dispatcher.extract(stored.path(), kind).await {
        Ok(text) => {
            tracing::info!(
                file_name = %file.filename,
                kind = %kind,
                size_bytes = file.data.len(),
                text_chars = text.chars().count(),
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Document processed"
            );
            ExtractionResponse::extracted(full_name, age, text)
        }
        Err(e) => {
            tracing::warn!(
                file_name = %file.filename,
                kind = %kind,
                size_bytes = file.data.len(),
                error = %e,
                "Text extraction failed, returning partial result"
            );
            ExtractionResponse::partial(full_name, age, EXTRACTION_FAILED_MESSAGE)
        }
    };

    stored.release().await;
    Ok(Json(response))
}
