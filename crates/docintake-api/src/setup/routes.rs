//! Route configuration and setup

use crate::error::HttpAppError;
use crate::handlers;
use crate::middleware::{origin_guard, AllowedOrigins};
use crate::state::AppState;
use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use docintake_core::{AppError, Config};
use std::any::Any;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;
    let allowed_origins = Arc::new(AllowedOrigins::new(config.cors_origins()));

    // Server-level concurrency limit to protect against resource exhaustion under extreme load
    let http_concurrency_limit = config.http_concurrency_limit().max(1);
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    let app = Router::new()
        .route("/api/upload", post(handlers::upload::upload_document))
        .route("/display", post(handlers::display::display_result))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::ApiDoc::openapi()) }),
        )
        .layer(DefaultBodyLimit::max(config.max_request_size_bytes()))
        .layer(cors)
        .layer(axum::middleware::from_fn_with_state(
            allowed_origins,
            origin_guard,
        ))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state);

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(AnyOrigin)
            .allow_methods([Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .context("CORS_ORIGINS contains an invalid origin")?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_credentials(true)
    };
    Ok(cors)
}

/// Render a handler panic as the generic 500 body.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());

    HttpAppError(AppError::Internal(format!("Handler panicked: {}", detail))).into_response()
}
