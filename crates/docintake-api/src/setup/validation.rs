//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use docintake_core::Config;
use std::path::Path;

/// Validate configuration and warn about settings that only fail per request.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    let is_production = config.is_production();
    let env_var = std::env::var("ENVIRONMENT")
        .or_else(|_| std::env::var("APP_ENV"))
        .ok();
    if is_production && env_var.is_none() {
        tracing::warn!(
            "Production mode detected but ENVIRONMENT/APP_ENV not set - error details may leak"
        );
    }

    // A missing OCR binary turns every image upload into a partial result
    let tesseract = Path::new(config.tesseract_path());
    if tesseract.components().count() > 1 && !tesseract.exists() {
        tracing::warn!(
            tesseract_path = %tesseract.display(),
            "Tesseract binary not found; image uploads will return partial results"
        );
    }

    let upload_dir = config.upload_dir();
    if upload_dir.exists() && !upload_dir.is_dir() {
        return Err(anyhow::anyhow!(
            "UPLOAD_DIR {} exists and is not a directory",
            upload_dir.display()
        ));
    }

    Ok(())
}
