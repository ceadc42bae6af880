//! OpenAPI documentation, served at `/api/openapi.json`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use docintake_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "docintake API",
        version = "0.1.0",
        description = "Upload a PDF or image with applicant details and get back the applicant's full name, age and the document text. Files are deleted as soon as the request completes."
    ),
    paths(
        handlers::upload::upload_document,
        handlers::display::display_result,
    ),
    components(schemas(
        models::ExtractionResponse,
        models::DisplayRequest,
        models::DisplayResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "upload", description = "Document upload and text extraction"),
        (name = "display", description = "Echo of a processed result")
    )
)]
pub struct ApiDoc;
