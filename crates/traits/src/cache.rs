//! CssCache trait for abstracting per-page stylesheet storage.
//!
//! The renderer reads and writes generated CSS through this trait so it is
//! never tied to a particular persistence layer.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for cache operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CacheError {
    #[error("Cache entry not found: {0}")]
    NotFound(String),

    #[error("Failed to read cached CSS for page '{page}': {message}")]
    ReadFailed { page: String, message: String },

    #[error("Failed to write cached CSS for page '{page}': {message}")]
    WriteFailed { page: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CacheError {
    fn from(err: std::io::Error) -> Self {
        CacheError::Io(err.to_string())
    }
}

/// Per-page storage for generated CSS.
///
/// `get` distinguishes an entry that was never written (`Ok(None)`) from one
/// that holds an empty stylesheet (`Ok(Some(""))`). `put` overwrites
/// unconditionally. Failures are returned to the caller, never swallowed.
///
/// # Implementations
///
/// - `InMemoryCssCache`: process-local map (always available)
/// - `FilesystemCssCache`: one file per page (in `trellis-cache`)
pub trait CssCache: Send + Sync + Debug {
    /// Reads the stored CSS for a page.
    fn get(&self, page_id: &str) -> Result<Option<String>, CacheError>;

    /// Stores the CSS for a page, replacing any previous entry.
    fn put(&self, page_id: &str, css: &str) -> Result<(), CacheError>;

    /// Clears the entry for a page. Clearing a missing entry is not an error.
    fn invalidate(&self, page_id: &str) -> Result<(), CacheError>;

    /// Returns a human-readable name for this cache (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory CSS cache.
#[derive(Debug, Default)]
pub struct InMemoryCssCache {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryCssCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached pages.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if the cache is empty.
    ///
    /// Returns `true` if the lock is poisoned.
    pub fn is_empty(&self) -> bool {
        self.entries.read().map(|e| e.is_empty()).unwrap_or(true)
    }

    /// Drops every entry. Does nothing if the lock is poisoned.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl CssCache for InMemoryCssCache {
    fn get(&self, page_id: &str) -> Result<Option<String>, CacheError> {
        let entries = self.entries.read().map_err(|_| CacheError::ReadFailed {
            page: page_id.to_string(),
            message: "cache lock poisoned".to_string(),
        })?;
        Ok(entries.get(page_id).cloned())
    }

    fn put(&self, page_id: &str, css: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::WriteFailed {
            page: page_id.to_string(),
            message: "cache lock poisoned".to_string(),
        })?;
        entries.insert(page_id.to_string(), css.to_string());
        Ok(())
    }

    fn invalidate(&self, page_id: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::WriteFailed {
            page: page_id.to_string(),
            message: "cache lock poisoned".to_string(),
        })?;
        entries.remove(page_id);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "InMemoryCssCache"
    }
}
