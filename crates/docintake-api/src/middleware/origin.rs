use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use docintake_core::AppError;
use std::sync::Arc;

/// Origins allowed to call the API from a browser.
#[derive(Clone, Debug)]
pub struct AllowedOrigins {
    origins: Vec<String>,
    allow_any: bool,
}

impl AllowedOrigins {
    pub fn new(origins: &[String]) -> Self {
        Self {
            allow_any: origins.iter().any(|o| o == "*"),
            origins: origins.to_vec(),
        }
    }

    pub fn permits(&self, origin: &str) -> bool {
        self.allow_any || self.origins.iter().any(|o| o == origin)
    }
}

/// Reject cross-origin requests from origins outside the allow-list with a 403.
///
/// `CorsLayer` only withholds CORS headers, so without this the handler would
/// still run. Requests without an `Origin` header (curl, server-to-server) pass.
pub async fn origin_guard(
    State(allowed): State<Arc<AllowedOrigins>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(value) = request.headers().get(header::ORIGIN) {
        let origin = String::from_utf8_lossy(value.as_bytes());
        if !allowed.permits(&origin) {
            return HttpAppError(AppError::OriginNotAllowed(origin.into_owned())).into_response();
        }
    }

    next.run(request).await
}
