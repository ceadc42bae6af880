use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use axum::Json;
use docintake_core::models::{DisplayRequest, DisplayResponse};
use docintake_core::AppError;

#[utoipa::path(
    post,
    path = "/display",
    tag = "display",
    request_body = DisplayRequest,
    responses(
        (status = 200, description = "Payload echoed back unchanged", body = DisplayResponse),
        (status = 400, description = "fullName, age or extractedText missing", body = ErrorResponse)
    )
)]
pub async fn display_result(
    ValidatedJson(request): ValidatedJson<DisplayRequest>,
) -> Result<Json<DisplayResponse>, HttpAppError> {
    let response = request.into_complete().ok_or_else(|| {
        AppError::InvalidInput("Need fullName, age, and extractedText to proceed.".to_string())
    })?;
    Ok(Json(response))
}
