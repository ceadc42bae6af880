//! docintake API Library
//!
//! This crate provides the HTTP handlers, middleware, and application setup.

mod api_doc;
mod handlers;
mod utils;

pub mod error;
pub mod middleware;
pub mod setup;
pub mod state;
pub mod telemetry;

pub use api_doc::ApiDoc;
pub use error::{ErrorResponse, HttpAppError};
pub use handlers::upload::EXTRACTION_FAILED_MESSAGE;
pub use state::AppState;
