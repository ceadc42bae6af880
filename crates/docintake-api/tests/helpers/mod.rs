//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p docintake-api`. Every app gets its
//! own temporary upload directory and fake extractors that record their calls.

#![allow(dead_code)]

pub mod fixtures;

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use docintake_api::setup::routes;
use docintake_api::AppState;
use docintake_core::{Config, ServiceConfig};
use docintake_processing::{ProcessingError, TextExtractor};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Test application: server plus the temporary upload directory it writes to.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of files left in the upload directory.
    pub fn stored_files(&self) -> usize {
        std::fs::read_dir(&self.upload_dir)
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// Config pointing at `upload_dir` with the default limits.
pub fn test_config(upload_dir: &Path) -> ServiceConfig {
    ServiceConfig {
        upload_dir: upload_dir.to_path_buf(),
        ..ServiceConfig::default()
    }
}

/// Setup test app with fake extractors returning fixed text.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(
        RecordingExtractor::returning("  pdf text \n\n from page one "),
        RecordingExtractor::returning("ocr\ttext"),
    )
}

pub fn setup_test_app_with(pdf: Arc<dyn TextExtractor>, ocr: Arc<dyn TextExtractor>) -> TestApp {
    setup_test_app_with_config(|_| {}, pdf, ocr)
}

/// Setup test app, letting the caller adjust the config before the router is built.
pub fn setup_test_app_with_config(
    configure: impl FnOnce(&mut ServiceConfig),
    pdf: Arc<dyn TextExtractor>,
    ocr: Arc<dyn TextExtractor>,
) -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let upload_dir = temp_dir.path().join("uploads");

    let mut service = test_config(&upload_dir);
    configure(&mut service);
    let upload_dir = service.upload_dir.clone();
    let config = Config(Box::new(service));

    let state = Arc::new(AppState::with_extractors(config.clone(), pdf, ocr));
    let router = routes::setup_routes(&config, state).unwrap();
    let server = TestServer::new(router).unwrap();

    TestApp {
        server,
        upload_dir,
        _temp_dir: temp_dir,
    }
}

/// Upload form with all three applicant fields and the given file part.
pub fn upload_form(file_name: &str, mime_type: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new()
        .add_text("firstName", "Ada")
        .add_text("lastName", "Lovelace")
        .add_text("dob", "1990-01-15")
        .add_part(
            "file",
            Part::bytes(data).file_name(file_name).mime_type(mime_type),
        )
}

enum Behavior {
    Return(String),
    Fail,
    Panic,
}

/// Extractor double: counts calls, remembers whether the file existed when it
/// was called, and returns text, fails, or panics.
pub struct RecordingExtractor {
    behavior: Behavior,
    calls: AtomicUsize,
    seen_paths: Mutex<Vec<(PathBuf, bool)>>,
}

impl RecordingExtractor {
    fn with(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            seen_paths: Mutex::new(Vec::new()),
        })
    }

    pub fn returning(text: impl Into<String>) -> Arc<Self> {
        Self::with(Behavior::Return(text.into()))
    }

    pub fn failing() -> Arc<Self> {
        Self::with(Behavior::Fail)
    }

    pub fn panicking() -> Arc<Self> {
        Self::with(Behavior::Panic)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Paths passed to `extract`, with whether each existed at call time.
    pub fn seen_paths(&self) -> Vec<(PathBuf, bool)> {
        self.seen_paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextExtractor for RecordingExtractor {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn extract(&self, path: &Path) -> Result<String, ProcessingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_paths
            .lock()
            .unwrap()
            .push((path.to_path_buf(), path.exists()));

        match &self.behavior {
            Behavior::Return(text) => Ok(text.clone()),
            Behavior::Fail => Err(ProcessingError::Pdf("unreadable document".to_string())),
            Behavior::Panic => panic!("extractor crashed"),
        }
    }
}
