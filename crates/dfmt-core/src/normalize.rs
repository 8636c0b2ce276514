//! Line-level derive-list normalization.
//!
//! A line is only rewritten when it is, in its entirety, a single-line
//! `#[derive(...)]` attribute whose entries are plain identifiers. Anything
//! else — multi-line lists, path-qualified names like `serde::Serialize`,
//! nested parentheses, trailing comments — fails the anchored match and
//! passes through untouched. There is no partial-match repair.

use std::sync::LazyLock;

use regex::Regex;

use crate::table::rank;

/// Anchored match for a complete single-line derive attribute.
/// Entries are ASCII identifiers with optional surrounding whitespace.
static DERIVE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\[derive\((\s*[A-Za-z0-9_]+\s*,)*(\s*[A-Za-z0-9_]+\s*)\)]$")
        .expect("invalid derive line regex")
});

/// Normalizes a single line, given without its terminator.
///
/// Returns `None` when the line is not a recognizable derive attribute; the
/// caller is expected to pass such lines through byte-for-byte. On a match,
/// returns the rebuilt line: identifiers sorted ascending by priority-table
/// rank, ties broken lexicographically, joined with `", "`. Duplicate
/// identifiers are kept; the multiset of entries is preserved exactly.
pub fn normalize_line(line: &str) -> Option<String> {
    if !DERIVE_LINE_REGEX.is_match(line) {
        return None;
    }

    // The anchored match guarantees the fixed decoration on both ends.
    let inner = &line["#[derive(".len()..line.len() - ")]".len()];

    let mut entries: Vec<(usize, &str)> = inner
        .split(',')
        .map(str::trim)
        .map(|ident| (rank(ident), ident))
        .collect();
    entries.sort_unstable();

    let joined: Vec<&str> = entries.iter().map(|(_, ident)| *ident).collect();
    Some(format!("#[derive({})]", joined.join(", ")))
}

/// Applies [`normalize_line`] to every line of `text`.
///
/// Unmatched lines keep their exact bytes, terminator included. Matched
/// lines are replaced by the normalized form followed by `\n` — the
/// normalizer owns line-ending policy for lines it touches. Returns the
/// rewritten text and the number of lines whose content changed.
pub fn normalize_source(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut lines_rewritten = 0;

    let mut rest = text;
    while !rest.is_empty() {
        let (raw, remainder) = match rest.find('\n') {
            Some(idx) => rest.split_at(idx + 1),
            None => (rest, ""),
        };
        let content = raw
            .strip_suffix('\n')
            .map(|body| body.strip_suffix('\r').unwrap_or(body))
            .unwrap_or(raw);

        match normalize_line(content) {
            Some(normalized) => {
                if normalized != content {
                    lines_rewritten += 1;
                }
                out.push_str(&normalized);
                out.push('\n');
            }
            None => out.push_str(raw),
        }
        rest = remainder;
    }

    (out, lines_rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifiers_sort_by_table_rank() {
        let out = normalize_line("#[derive(Debug, Component, Clone)]").unwrap();
        assert_eq!(out, "#[derive(Component, Clone, Debug)]");
    }

    #[test]
    fn test_partialeq_sorts_before_eq() {
        let out = normalize_line("#[derive(Eq, PartialEq)]").unwrap();
        assert_eq!(out, "#[derive(PartialEq, Eq)]");
    }

    #[test]
    fn test_unknown_identifiers_sort_lexicographically() {
        let out = normalize_line("#[derive(Foo, Bar)]").unwrap();
        assert_eq!(out, "#[derive(Bar, Foo)]");
    }

    #[test]
    fn test_unknown_identifiers_sort_after_known() {
        let out = normalize_line("#[derive(Reflect, Deserialize, Component)]").unwrap();
        assert_eq!(out, "#[derive(Component, Deserialize, Reflect)]");
    }

    #[test]
    fn test_whitespace_normalized_around_commas() {
        let out = normalize_line("#[derive(Serialize,Deserialize)]").unwrap();
        assert_eq!(out, "#[derive(Serialize, Deserialize)]");

        let out = normalize_line("#[derive( Clone ,  Copy )]").unwrap();
        assert_eq!(out, "#[derive(Copy, Clone)]");
    }

    #[test]
    fn test_non_derive_line_is_not_matched() {
        assert!(normalize_line("struct Foo;").is_none());
        assert!(normalize_line("").is_none());
    }

    #[test]
    fn test_indented_or_trailing_content_is_not_matched() {
        // The match is anchored at both ends.
        assert!(normalize_line("    #[derive(Debug)]").is_none());
        assert!(normalize_line("#[derive(Debug)] // keep").is_none());
        assert!(normalize_line("#[derive(Debug)] ").is_none());
    }

    #[test]
    fn test_path_qualified_and_nested_entries_are_not_matched() {
        assert!(normalize_line("#[derive(serde::Serialize)]").is_none());
        assert!(normalize_line("#[derive(Debug, Clone(inner))]").is_none());
        assert!(normalize_line("#[derive()]").is_none());
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let out = normalize_line("#[derive(Debug, Clone, Debug)]").unwrap();
        assert_eq!(out, "#[derive(Clone, Debug, Debug)]");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let cases = [
            "#[derive(Debug, Component, Clone)]",
            "#[derive(Serialize,Deserialize)]",
            "#[derive(Foo, Bar)]",
        ];
        for case in cases {
            let once = normalize_line(case).unwrap();
            let twice = normalize_line(&once).unwrap();
            assert_eq!(once, twice, "not idempotent for {case}");
        }
    }

    #[test]
    fn test_multiset_of_identifiers_is_preserved() {
        let input = "#[derive(Eq, Debug, Eq, Component, Zzz)]";
        let out = normalize_line(input).unwrap();

        let collect = |line: &str| {
            let inner = &line["#[derive(".len()..line.len() - ")]".len()];
            let mut idents: Vec<String> =
                inner.split(',').map(|s| s.trim().to_string()).collect();
            idents.sort();
            idents
        };
        assert_eq!(collect(input), collect(&out));
    }

    #[test]
    fn test_source_rewrites_only_matching_lines() {
        let input = "\
use bevy::prelude::*;

#[derive(Debug, Component, Clone)]
struct Player;

fn main() {}
";
        let (out, rewritten) = normalize_source(input);
        assert_eq!(rewritten, 1);
        assert!(out.contains("#[derive(Component, Clone, Debug)]\n"));
        assert!(out.contains("use bevy::prelude::*;\n"));
        assert!(out.contains("fn main() {}\n"));
    }

    #[test]
    fn test_source_counts_only_changed_lines() {
        let input = "#[derive(Component, Clone)]\n#[derive(Clone, Component)]\n";
        let (out, rewritten) = normalize_source(input);
        assert_eq!(rewritten, 1);
        assert_eq!(out, "#[derive(Component, Clone)]\n#[derive(Component, Clone)]\n");
    }

    #[test]
    fn test_source_preserves_unmatched_crlf_lines() {
        let input = "struct Foo;\r\nlet x = 1;\r\n";
        let (out, rewritten) = normalize_source(input);
        assert_eq!(rewritten, 0);
        assert_eq!(out, input);
    }

    #[test]
    fn test_source_rewrites_matched_crlf_line_with_lf() {
        // Matched lines always come out with \n, even when the identifier
        // order was already canonical; only the terminator changes, so the
        // changed-line count stays at zero.
        let (out, rewritten) = normalize_source("#[derive(Component, Clone)]\r\nstruct Player;\r\n");
        assert_eq!(rewritten, 0);
        assert_eq!(out, "#[derive(Component, Clone)]\nstruct Player;\r\n");
    }

    #[test]
    fn test_source_handles_final_line_without_terminator() {
        let (out, rewritten) = normalize_source("#[derive(Debug, Copy)]");
        assert_eq!(rewritten, 1);
        assert_eq!(out, "#[derive(Copy, Debug)]\n");
    }
}
