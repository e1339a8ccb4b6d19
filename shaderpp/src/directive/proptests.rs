//! Property-based tests for include-directive recognition.

use super::{parse_include_line, Delimiter};
use proptest::prelude::*;
use std::path::Path;

// Strategy for path text that is legal between either delimiter pair.
fn include_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9_.-]{1,12}", 1..4).prop_map(|parts| parts.join("/"))
}

fn horizontal_ws_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,4}"
}

proptest! {
    /// Any directive assembled from the recognized shape extracts the
    /// enclosed path, whatever the whitespace, delimiter, or trailing text.
    #[test]
    fn recognized_directives_extract_path(
        lead in horizontal_ws_strategy(),
        after_hash in horizontal_ws_strategy(),
        gap in "[ \t]{1,4}",
        path in include_path_strategy(),
        quoted in any::<bool>(),
        trailing in "[ a-z/]{0,12}",
    ) {
        let (open, close) = if quoted { ('"', '"') } else { ('<', '>') };
        let line = format!("{lead}#{after_hash}include{gap}{open}{path}{close}{trailing}");

        let inc = parse_include_line(&line).expect("directive not recognized");
        prop_assert_eq!(inc.path.as_path(), Path::new(&path));
        prop_assert_eq!(
            inc.delimiter,
            if quoted { Delimiter::Quote } else { Delimiter::Angle }
        );
    }

    /// Lines that never open a delimited path are never directives.
    #[test]
    fn undelimited_lines_pass_through(body in "[a-zA-Z0-9 _.;=+*-]{0,40}") {
        let line = format!("#include {body}");
        if !body.contains('"') && !body.contains('<') {
            prop_assert!(parse_include_line(&line).is_none());
        }
    }

    /// Lines without a hash are never directives.
    #[test]
    fn hashless_lines_pass_through(line in "[^#]{0,60}") {
        prop_assert!(parse_include_line(&line).is_none());
    }
}
