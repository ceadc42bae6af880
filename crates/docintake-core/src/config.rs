//! Configuration module
//!
//! This module provides the process-wide configuration for the extraction service.
//! Everything is read once at startup from the environment (with `.env` support)
//! and never mutated afterwards.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

// Common constants
const SERVER_PORT: u16 = 5000;
const PORT_FALLBACK_ATTEMPTS: u16 = 10;
const HTTP_CONCURRENCY_LIMIT: usize = 1024;
const MAX_FILE_SIZE_MB: usize = 10;
const MAX_REQUEST_SIZE_MB: usize = 50;
const PDF_MAX_PAGES: usize = 50;
const UPLOAD_DIR: &str = "uploads";
const OCR_LANGUAGE: &str = "eng";
const TESSERACT_PATH: &str = "tesseract";

/// Local development origins allowed when `CORS_ORIGINS` is not set.
pub const DEFAULT_CORS_ORIGINS: [&str; 6] = [
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:3002",
    "http://localhost:3003",
    "http://localhost:3004",
    "http://localhost:3005",
];

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    /// Number of additional ports tried when `server_port` is already bound.
    pub port_fallback_attempts: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub http_concurrency_limit: usize,
}

/// Upload and extraction settings
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub base: BaseConfig,
    pub upload_dir: PathBuf,
    pub max_file_size_bytes: usize,
    pub max_request_size_bytes: usize,
    pub pdf_max_pages: usize,
    pub ocr_language: String,
    pub tesseract_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base: BaseConfig {
                server_port: SERVER_PORT,
                port_fallback_attempts: PORT_FALLBACK_ATTEMPTS,
                cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
                environment: "development".to_string(),
                http_concurrency_limit: HTTP_CONCURRENCY_LIMIT,
            },
            upload_dir: PathBuf::from(UPLOAD_DIR),
            max_file_size_bytes: MAX_FILE_SIZE_MB * 1024 * 1024,
            max_request_size_bytes: MAX_REQUEST_SIZE_MB * 1024 * 1024,
            pdf_max_pages: PDF_MAX_PAGES,
            ocr_language: OCR_LANGUAGE.to_string(),
            tesseract_path: TESSERACT_PATH.to_string(),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug, Default)]
pub struct Config(pub Box<ServiceConfig>);

impl Config {
    fn as_service(&self) -> &ServiceConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.as_service().base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = ServiceConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_service().validate()
    }

    // Convenience getters
    pub fn server_port(&self) -> u16 {
        self.as_service().base.server_port
    }

    pub fn port_fallback_attempts(&self) -> u16 {
        self.as_service().base.port_fallback_attempts
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_service().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_service().base.environment
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.as_service().base.http_concurrency_limit
    }

    pub fn upload_dir(&self) -> &std::path::Path {
        &self.as_service().upload_dir
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.as_service().max_file_size_bytes
    }

    pub fn max_request_size_bytes(&self) -> usize {
        self.as_service().max_request_size_bytes
    }

    pub fn pdf_max_pages(&self) -> usize {
        self.as_service().pdf_max_pages
    }

    pub fn ocr_language(&self) -> &str {
        &self.as_service().ocr_language
    }

    pub fn tesseract_path(&self) -> &str {
        &self.as_service().tesseract_path
    }
}

/// Read `key` and parse it, falling back to `default` when unset or malformed.
fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring malformed environment value");
            default
        }),
        Err(_) => default,
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let defaults = ServiceConfig::default();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| defaults.base.environment.clone());

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => defaults.base.cors_origins.clone(),
        };

        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let max_file_size_mb = env_parse("MAX_FILE_SIZE_MB", MAX_FILE_SIZE_MB);
        let max_request_size_mb = env_parse("MAX_REQUEST_SIZE_MB", MAX_REQUEST_SIZE_MB);

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.upload_dir);

        Ok(ServiceConfig {
            base: BaseConfig {
                server_port: env_parse("PORT", SERVER_PORT),
                port_fallback_attempts: env_parse("PORT_FALLBACK_ATTEMPTS", PORT_FALLBACK_ATTEMPTS),
                cors_origins,
                environment,
                http_concurrency_limit: env_parse("HTTP_CONCURRENCY_LIMIT", HTTP_CONCURRENCY_LIMIT),
            },
            upload_dir,
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            max_request_size_bytes: max_request_size_mb * 1024 * 1024,
            pdf_max_pages: env_parse("PDF_MAX_PAGES", PDF_MAX_PAGES),
            ocr_language: env::var("OCR_LANGUAGE").unwrap_or(defaults.ocr_language),
            tesseract_path: env::var("TESSERACT_PATH").unwrap_or(defaults.tesseract_path),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }

        if self.max_request_size_bytes < self.max_file_size_bytes {
            return Err(anyhow::anyhow!(
                "MAX_REQUEST_SIZE_MB must be at least MAX_FILE_SIZE_MB"
            ));
        }

        if self.pdf_max_pages == 0 {
            return Err(anyhow::anyhow!("PDF_MAX_PAGES must be greater than 0"));
        }

        if self.ocr_language.trim().is_empty() {
            return Err(anyhow::anyhow!("OCR_LANGUAGE cannot be empty"));
        }

        if self.base.http_concurrency_limit == 0 {
            return Err(anyhow::anyhow!("HTTP_CONCURRENCY_LIMIT must be greater than 0"));
        }

        if self.base.cors_origins.is_empty() {
            return Err(anyhow::anyhow!("CORS_ORIGINS must list at least one origin"));
        }

        Ok(())
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
