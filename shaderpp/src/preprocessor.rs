//! Recursive include expansion.
//!
//! [`Preprocessor`] turns one root shader file into one flattened string
//! with every recognized `#include` directive replaced by the referenced
//! file's expanded contents, followed by a `#line` marker that restores
//! line-number context for compiler diagnostics on the remainder of the
//! including file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache::{read_source, SourceCache};
use crate::config::Config;
use crate::directive::parse_include_line;
use crate::error::{Error, Result};
use crate::search::SearchPaths;

/// Default cap on include nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Resolves `#include` directives in shader sources.
///
/// A `Preprocessor` owns the search-path list and per-instance options;
/// all per-call expansion state (the ancestor set used for cycle
/// detection) is local to each [`parse`](Preprocessor::parse) invocation,
/// so concurrent parses through `&self` are safe.
///
/// # Examples
///
/// ```no_run
/// use shaderpp::Preprocessor;
///
/// let pp = Preprocessor::new().with_search_path("assets/shaders");
/// let flattened = pp.parse("assets/shaders/main.glsl")?;
/// # Ok::<(), shaderpp::Error>(())
/// ```
#[derive(Debug)]
pub struct Preprocessor {
    search_paths: SearchPaths,
    max_depth: usize,
    cache: Option<SourceCache>,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor {
    /// Creates a preprocessor with no search paths, the default depth cap,
    /// and caching disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_paths: SearchPaths::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            cache: None,
        }
    }

    /// Creates a preprocessor from a merged [`Config`].
    ///
    /// # Examples
    ///
    /// ```
    /// use shaderpp::{Config, Preprocessor};
    ///
    /// let config = Config {
    ///     include_paths: Some(vec!["assets/shaders".into()]),
    ///     max_depth: Some(16),
    ///     cache: Some(true),
    /// };
    /// let pp = Preprocessor::from_config(&config);
    /// assert_eq!(pp.search_paths().len(), 1);
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut pp = Self::new().with_max_depth(config.effective_max_depth());
        if config.cache_enabled() {
            pp = pp.with_cache();
        }
        for dir in config.effective_include_paths() {
            pp.add_search_path(dir);
        }
        pp
    }

    /// Appends a search directory, builder style.
    #[must_use]
    pub fn with_search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_paths.push(dir);
        self
    }

    /// Sets the include nesting cap.
    ///
    /// The root file sits at depth 0; a chain nested deeper than the cap
    /// fails with [`Error::DepthExceeded`].
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables the modification-time-keyed source cache.
    ///
    /// Purely a performance optimization: output is identical with the
    /// cache on or off.
    #[must_use]
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(SourceCache::new());
        self
    }

    /// Appends a search directory.
    ///
    /// Directories are consulted in insertion order after the including
    /// file's own directory. Appending requires `&mut self` and therefore
    /// cannot race a concurrent [`parse`](Preprocessor::parse); seed the
    /// list once at initialization.
    pub fn add_search_path(&mut self, dir: impl Into<PathBuf>) {
        self.search_paths.push(dir);
    }

    /// Returns the configured search paths.
    #[must_use]
    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }

    /// Expands a root shader file into one flattened source string.
    ///
    /// Every recognized include directive is replaced by the referenced
    /// file's recursively expanded text followed by a `#line <N>` marker,
    /// where `N` is the 1-indexed line number of the including line in the
    /// including file. All other lines are preserved verbatim, each with a
    /// single trailing terminator.
    ///
    /// # Errors
    ///
    /// Fails if any nested include cannot be resolved
    /// ([`Error::IncludeNotFound`]), forms a cycle
    /// ([`Error::CircularInclude`]), cannot be read
    /// ([`Error::CannotOpen`]), or nests deeper than the configured cap
    /// ([`Error::DepthExceeded`]). The error propagates unchanged; no
    /// partial output is returned.
    pub fn parse(&self, root: impl AsRef<Path>) -> Result<String> {
        let mut stack = HashSet::new();
        self.expand(root.as_ref(), None, &mut stack, 0)
    }

    /// Collects every file the root transitively includes.
    ///
    /// Returns resolved paths in first-use order, each file listed once
    /// even when a diamond-shaped graph references it from several places.
    /// The root itself is not part of the list.
    ///
    /// # Errors
    ///
    /// Resolution failures, unreadable files, cycles, and depth overruns
    /// produce the same errors as [`parse`](Preprocessor::parse).
    pub fn dependencies(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let mut stack = HashSet::new();
        let mut seen = HashSet::new();
        let mut deps = Vec::new();
        self.walk(root.as_ref(), None, &mut stack, &mut seen, &mut deps, 0)?;
        Ok(deps)
    }

    /// Recursive expansion of one file.
    ///
    /// `stack` holds the include references currently being expanded along
    /// the active call chain, keyed by the path as written in the
    /// directive. The membership check runs before any file I/O, so a
    /// self-include is caught whether or not the file resolves. Each path
    /// is removed when its expansion completes: the set models "currently
    /// open ancestors", which lets a diamond-shaped graph expand the shared
    /// file once per reference while still rejecting genuine cycles.
    fn expand(
        &self,
        path: &Path,
        parent_dir: Option<&Path>,
        stack: &mut HashSet<PathBuf>,
        depth: usize,
    ) -> Result<String> {
        if depth > self.max_depth {
            return Err(Error::DepthExceeded {
                max_depth: self.max_depth,
                path: path.to_path_buf(),
            });
        }
        if stack.contains(path) {
            return Err(Error::CircularInclude {
                path: path.to_path_buf(),
            });
        }
        stack.insert(path.to_path_buf());

        let resolved = self.search_paths.resolve(path, parent_dir)?;
        let text = self.load(&resolved)?;
        let current_dir = resolved.parent().map(Path::to_path_buf);

        let mut output = String::with_capacity(text.len());
        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            if let Some(include) = parse_include_line(line) {
                let expanded =
                    self.expand(&include.path, current_dir.as_deref(), stack, depth + 1)?;
                output.push_str(&expanded);
                output.push_str(&format!("#line {line_number}"));
            } else {
                output.push_str(line);
            }
            output.push('\n');
        }

        stack.remove(path);
        Ok(output)
    }

    /// Dependency walk; same resolution and cycle semantics as `expand`,
    /// but collects resolved paths instead of text.
    fn walk(
        &self,
        path: &Path,
        parent_dir: Option<&Path>,
        stack: &mut HashSet<PathBuf>,
        seen: &mut HashSet<PathBuf>,
        deps: &mut Vec<PathBuf>,
        depth: usize,
    ) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::DepthExceeded {
                max_depth: self.max_depth,
                path: path.to_path_buf(),
            });
        }
        if stack.contains(path) {
            return Err(Error::CircularInclude {
                path: path.to_path_buf(),
            });
        }
        stack.insert(path.to_path_buf());

        let resolved = self.search_paths.resolve(path, parent_dir)?;
        let text = self.load(&resolved)?;
        let current_dir = resolved.parent().map(Path::to_path_buf);

        for line in text.lines() {
            let Some(include) = parse_include_line(line) else {
                continue;
            };
            let child = self.search_paths.resolve(&include.path, current_dir.as_deref())?;
            if seen.insert(child.clone()) {
                deps.push(child);
                self.walk(
                    &include.path,
                    current_dir.as_deref(),
                    stack,
                    seen,
                    deps,
                    depth + 1,
                )?;
            }
        }

        stack.remove(path);
        Ok(())
    }

    fn load(&self, resolved: &Path) -> Result<Arc<str>> {
        match &self.cache {
            Some(cache) => cache.read(resolved),
            None => Ok(read_source(resolved)?.into()),
        }
    }
}
