//! Error types for the shaderpp library.
//!
//! This module provides the error hierarchy for all preprocessing
//! operations, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a shaderpp error.
///
/// # Examples
///
/// ```
/// use shaderpp::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("void main() {}\n".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the shaderpp library.
///
/// Every failure is fatal to the enclosing `parse` call: no partial output
/// is produced and no recovery is attempted at any recursion level. The
/// error propagates unchanged to the top-level caller, which is solely
/// responsible for presenting it.
#[derive(Debug, Error)]
pub enum Error {
    /// A file reappeared in the set of ancestors currently being expanded.
    #[error("circular include: {}", path.display())]
    CircularInclude {
        /// The include reference that closed the cycle, as written in the
        /// directive.
        path: PathBuf,
    },

    /// An include reference matched no candidate location.
    #[error("could not find included file: {}", path.display())]
    IncludeNotFound {
        /// The unresolved reference, as written in the directive.
        path: PathBuf,
    },

    /// A resolved file could not be opened or read.
    ///
    /// Distinct from [`Error::IncludeNotFound`]: resolution already
    /// confirmed the file exists, so this covers permission problems and
    /// races between the existence check and the open.
    #[error("cannot open included file {}: {source}", path.display())]
    CannotOpen {
        /// The resolved path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The include chain grew deeper than the configured cap.
    #[error("include depth exceeded ({max_depth}) while expanding {}", path.display())]
    DepthExceeded {
        /// The configured maximum include depth.
        max_depth: usize,
        /// The include reference that crossed the cap.
        path: PathBuf,
    },

    /// A configuration file could not be read or parsed.
    #[error("configuration error in {}: {reason}", path.display())]
    Config {
        /// The configuration file that was rejected.
        path: PathBuf,
        /// The reason the configuration was rejected.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The setting or environment variable that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Returns true if this error indicates an unresolvable include.
    ///
    /// # Examples
    ///
    /// ```
    /// use shaderpp::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::IncludeNotFound { path: PathBuf::from("lib.glsl") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::IncludeNotFound { .. })
    }

    /// Returns true if this error indicates a circular include.
    #[must_use]
    pub fn is_circular(&self) -> bool {
        matches!(self, Self::CircularInclude { .. })
    }
}
