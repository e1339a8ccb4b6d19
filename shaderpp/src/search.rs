//! Search-path management and include resolution.
//!
//! An include reference is resolved against the including file's own
//! directory first, then against an ordered list of fallback search
//! directories. The first candidate that exists on the filesystem wins.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ordered list of fallback directories for include resolution.
///
/// The list is append-only: directories can be added but never removed or
/// reordered, and it persists for the lifetime of the owning
/// [`Preprocessor`](crate::Preprocessor). Appending takes `&mut self`, so
/// the borrow checker serializes mutation against concurrent `parse` calls
/// for you.
///
/// # Examples
///
/// ```
/// use shaderpp::SearchPaths;
/// use std::path::Path;
///
/// let mut paths = SearchPaths::new();
/// paths.push("assets/shaders");
/// paths.push("vendor/shaders");
/// assert_eq!(paths.len(), 2);
/// assert_eq!(paths.iter().next().unwrap(), Path::new("assets/shaders"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchPaths {
    dirs: Vec<PathBuf>,
}

impl SearchPaths {
    /// Creates an empty search-path list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a directory to the end of the list.
    ///
    /// Directories are checked in insertion order; earlier entries win.
    /// The directory does not need to exist: non-existent entries simply
    /// never produce a matching candidate.
    pub fn push(&mut self, dir: impl Into<PathBuf>) {
        self.dirs.push(dir.into());
    }

    /// Returns the number of configured directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Returns true if no directories are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Iterates the configured directories in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    /// Resolves an include reference to a concrete filesystem path.
    ///
    /// Resolution order:
    /// 1. `parent_dir / path`, when a parent directory is given (the file
    ///    containing the directive). For the root file there is no parent
    ///    and `path` itself is the first candidate.
    /// 2. Each configured directory, in insertion order.
    ///
    /// Joining an absolute `path` replaces the base, so absolute includes
    /// resolve to themselves under rule 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncludeNotFound`] carrying the original unresolved
    /// reference when no candidate exists.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use shaderpp::SearchPaths;
    /// use std::path::Path;
    ///
    /// let mut paths = SearchPaths::new();
    /// paths.push("assets/shaders");
    ///
    /// let resolved = paths.resolve(Path::new("lib.glsl"), None)?;
    /// # Ok::<(), shaderpp::Error>(())
    /// ```
    pub fn resolve(&self, path: &Path, parent_dir: Option<&Path>) -> Result<PathBuf> {
        let first = match parent_dir {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        };
        if first.exists() {
            return Ok(first);
        }

        for dir in &self.dirs {
            let candidate = dir.join(path);
            if candidate.exists() {
                log::debug!(
                    "resolved include {} via search path {}",
                    path.display(),
                    dir.display()
                );
                return Ok(candidate);
            }
        }

        Err(Error::IncludeNotFound {
            path: path.to_path_buf(),
        })
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SearchPaths {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            dirs: iter.into_iter().map(Into::into).collect(),
        }
    }
}
