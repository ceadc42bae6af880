//! docintake Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! applicant validation shared by the other docintake crates.

pub mod age;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use age::Age;
pub use config::{BaseConfig, Config, ServiceConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
