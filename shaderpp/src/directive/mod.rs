//! Include-directive recognition.
//!
//! A single line-anchored regular expression decides whether a source line
//! is an include directive. Lines that do not match the exact shape
//! (commented-out includes, directives split across lines, malformed
//! delimiters) are not includes and pass through the preprocessor verbatim.
//!
//! The recognized shape is: optional leading whitespace, `#`, optional
//! whitespace, the literal token `include`, required whitespace, then a
//! path enclosed in either double quotes or angle brackets. Anything after
//! the closing delimiter on the line is ignored.

use std::path::PathBuf;

use regex::Regex;

lazy_static::lazy_static! {
    static ref INCLUDE_REGEX: Regex =
        Regex::new(r#"^\s*#\s*include\s+(?:"([^"]*)"|<([^>]*)>)"#).unwrap();
}

/// Delimiter style used by an include directive.
///
/// Both styles resolve identically; the style is retained for diagnostics
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `#include "path"`
    Quote,
    /// `#include <path>`
    Angle,
}

/// A parsed include directive.
///
/// # Examples
///
/// ```
/// use shaderpp::directive::{parse_include_line, Delimiter};
/// use std::path::Path;
///
/// let inc = parse_include_line(r#"#include "lighting.glsl""#).unwrap();
/// assert_eq!(inc.path, Path::new("lighting.glsl"));
/// assert_eq!(inc.delimiter, Delimiter::Quote);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeRef {
    /// The referenced path, exactly as written between the delimiters.
    pub path: PathBuf,
    /// The delimiter style the directive used.
    pub delimiter: Delimiter,
}

/// Parses a source line as an include directive.
///
/// Returns `None` for any line that does not match the directive shape.
/// The returned path is the raw text between the delimiters; no resolution
/// against the filesystem happens here.
///
/// # Examples
///
/// ```
/// use shaderpp::directive::parse_include_line;
/// use std::path::Path;
///
/// assert!(parse_include_line("float x = 1.0;").is_none());
/// assert!(parse_include_line("// #include \"off.glsl\"").is_none());
///
/// let inc = parse_include_line("#  include   <noise/simplex.glsl>").unwrap();
/// assert_eq!(inc.path, Path::new("noise/simplex.glsl"));
/// ```
#[must_use]
pub fn parse_include_line(line: &str) -> Option<IncludeRef> {
    let captures = INCLUDE_REGEX.captures(line)?;

    if let Some(quoted) = captures.get(1) {
        return Some(IncludeRef {
            path: PathBuf::from(quoted.as_str()),
            delimiter: Delimiter::Quote,
        });
    }

    captures.get(2).map(|angled| IncludeRef {
        path: PathBuf::from(angled.as_str()),
        delimiter: Delimiter::Angle,
    })
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
