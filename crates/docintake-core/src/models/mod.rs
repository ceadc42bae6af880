//! Data models for the application
//!
//! Every model here lives for a single request. Nothing is persisted.

mod applicant;
mod extraction;

pub use applicant::Applicant;
pub use extraction::{DisplayRequest, DisplayResponse, ExtractionResponse};
