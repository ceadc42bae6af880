//! docintake Storage Library
//!
//! Transient on-disk storage for uploads. A stored upload lives exactly as long as
//! the request that wrote it: `TransientStore::persist` hands back a
//! `TransientFile` guard that removes the file when released or dropped.

pub mod error;
pub(crate) mod keys;
pub mod transient;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use transient::{TransientFile, TransientStore};
