//! Optional modification-time-keyed source cache.
//!
//! The cache is a decorator around the resolve-and-read step of
//! preprocessing: it never participates in the recursion itself, and with
//! the cache on or off the output of a parse is identical. It exists purely
//! to skip re-reading unchanged files across separate `parse` calls.
//!
//! Entries are keyed by resolved path and validated against the file's
//! current modification time on every lookup; a file whose mtime has
//! advanced past the cached entry is re-read and the entry replaced.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct CachedSource {
    modified: SystemTime,
    text: Arc<str>,
}

/// Modification-time-keyed cache of file contents.
///
/// Internally synchronized, so a [`Preprocessor`](crate::Preprocessor)
/// holding one remains usable from multiple threads through `&self`.
///
/// # Examples
///
/// ```no_run
/// use shaderpp::SourceCache;
/// use std::path::Path;
///
/// let cache = SourceCache::new();
/// let first = cache.read(Path::new("shaders/lib.glsl"))?;
/// // Second read of an unchanged file is served from memory.
/// let second = cache.read(Path::new("shaders/lib.glsl"))?;
/// assert_eq!(first, second);
/// # Ok::<(), shaderpp::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct SourceCache {
    entries: Mutex<HashMap<PathBuf, CachedSource>>,
}

impl SourceCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a file through the cache.
    ///
    /// A cached entry is used only while the file's modification time has
    /// not advanced past the time recorded with the entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotOpen`] if the file's metadata or contents
    /// cannot be read.
    pub fn read(&self, path: &Path) -> Result<Arc<str>> {
        let modified = fs::metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(|source| Error::CannotOpen {
                path: path.to_path_buf(),
                source,
            })?;

        let mut entries = self.entries.lock().expect("cache lock poisoned");
        if let Some(cached) = entries.get(path) {
            if cached.modified >= modified {
                return Ok(Arc::clone(&cached.text));
            }
            log::debug!("cache entry stale, re-reading {}", path.display());
        }

        let text: Arc<str> = read_source(path)?.into();
        entries.insert(
            path.to_path_buf(),
            CachedSource {
                modified,
                text: Arc::clone(&text),
            },
        );
        Ok(text)
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    /// Returns true if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries.lock().expect("cache lock poisoned").clear();
    }
}

/// Reads a resolved file directly, without caching.
///
/// # Errors
///
/// Returns [`Error::CannotOpen`] carrying the resolved path and the I/O
/// cause. Resolution already confirmed existence, so a failure here is a
/// permission problem or a race between the existence check and the open.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::CannotOpen {
        path: path.to_path_buf(),
        source,
    })
}
