use crate::error::ProcessingError;
use async_trait::async_trait;
use std::path::Path;

/// A strategy that turns a stored document into raw text.
///
/// Implementations may block; the caller awaits completion with no timeout.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Extract raw, unnormalized text from the file at `path`.
    async fn extract(&self, path: &Path) -> Result<String, ProcessingError>;
}
