//! Filesystem-backed CSS cache.
//!
//! Each page's stylesheet lives in `<dir>/<page_id>.css`. Writes go through a
//! temporary file in the same directory and are renamed into place, so a
//! reader never observes a half-written stylesheet.
//!
//! # Security
//!
//! Page ids are used as file names, so ids that could address a file outside
//! the cache directory (separators, `..`, empty ids) are rejected.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use trellis_traits::{CacheError, CssCache};

/// A CSS cache storing one file per page under a base directory.
#[derive(Debug, Clone)]
pub struct FilesystemCssCache {
    dir: PathBuf,
}

impl FilesystemCssCache {
    /// Creates a cache rooted at `dir`. The directory is created on first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves the file for a page id, or `None` if the id is unsafe as a file name.
    fn entry_path(&self, page_id: &str) -> Option<PathBuf> {
        let valid = !page_id.is_empty()
            && page_id != "."
            && page_id != ".."
            && !page_id.contains(['/', '\\', '\0'])
            && !Path::new(page_id).is_absolute();
        valid.then(|| self.dir.join(format!("{}.css", page_id)))
    }

    fn checked_path(&self, page_id: &str) -> Result<PathBuf, CacheError> {
        self.entry_path(page_id)
            .ok_or_else(|| CacheError::NotFound(format!("{} (invalid page id)", page_id)))
    }
}

impl CssCache for FilesystemCssCache {
    fn get(&self, page_id: &str) -> Result<Option<String>, CacheError> {
        let path = self.checked_path(page_id)?;
        match std::fs::read_to_string(&path) {
            Ok(css) => Ok(Some(css)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::ReadFailed {
                page: page_id.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn put(&self, page_id: &str, css: &str) -> Result<(), CacheError> {
        let path = self.checked_path(page_id)?;
        let write_failed = |message: String| CacheError::WriteFailed {
            page: page_id.to_string(),
            message,
        };

        std::fs::create_dir_all(&self.dir).map_err(|e| write_failed(e.to_string()))?;
        let mut file = NamedTempFile::new_in(&self.dir).map_err(|e| write_failed(e.to_string()))?;
        file.write_all(css.as_bytes())
            .map_err(|e| write_failed(e.to_string()))?;
        file.persist(&path)
            .map_err(|e| write_failed(e.error.to_string()))?;

        log::debug!("Wrote {} bytes of CSS to {}", css.len(), path.display());
        Ok(())
    }

    fn invalidate(&self, page_id: &str) -> Result<(), CacheError> {
        let path = self.checked_path(page_id)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &'static str {
        "FilesystemCssCache"
    }
}
