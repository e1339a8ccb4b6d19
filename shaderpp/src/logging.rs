//! Logging infrastructure for the shaderpp tooling layer.
//!
//! A small stderr-based logger with three verbosity levels. The core
//! preprocessing path never logs; this exists for the CLI and other
//! embedders that want to narrate resolution and configuration steps.

use std::env;
use std::fmt;

/// Logging level for controlling output verbosity.
///
/// Ordered from least verbose (`Quiet`) to most verbose (`Verbose`).
///
/// # Examples
///
/// ```
/// use shaderpp::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the string is not `quiet`, `normal`,
    /// or `verbose`.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger that respects a [`LogLevel`].
///
/// # Examples
///
/// ```
/// use shaderpp::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("search path does not exist: vendor/shaders");
/// logger.debug("this is only printed at verbose level");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger with the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message (suppressed only at `Quiet`).
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message (suppressed only at `Quiet`).
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message (printed only at `Verbose`).
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message (printed only at `Verbose`).
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger from CLI flags and the environment.
///
/// Priority: CLI flags, then the `SHADERPP_LOG_MODE` environment variable,
/// then `Normal`. If both flags are set, `verbose` wins.
///
/// # Examples
///
/// ```
/// use shaderpp::{init_logger, LogLevel};
///
/// let logger = init_logger(false, true);
/// assert_eq!(logger.level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var("SHADERPP_LOG_MODE")
            .ok()
            .and_then(|mode| LogLevel::parse(&mode).ok())
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(level)
}
