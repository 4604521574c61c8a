//! Placeholder checker.
//!
//! Detects literal placeholder markers anywhere in the text: TODO, TBD,
//! FIXME, and XXX (case-sensitive) plus "lorem ipsum" (case-insensitive).
//! Shipped content must not contain placeholders, but the fix requires
//! human content, so no suggestion is ever attached.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

use crate::context::ValidationContext;
use crate::error::CheckerError;
use crate::finding::{Finding, RuleCategory};
use crate::scanner::Document;

/// Case-sensitive all-caps markers.
static MARKERS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new(["TODO", "TBD", "FIXME", "XXX"]).expect("valid patterns")
});

/// Filler text, matched in any case.
static FILLER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(["lorem ipsum"])
        .expect("valid patterns")
});

/// Placeholder checker (severity: low, informational but reported).
pub struct PlaceholderChecker;

impl super::Checker for PlaceholderChecker {
    fn category(&self) -> RuleCategory {
        RuleCategory::Placeholder
    }

    fn check(
        &self,
        doc: &Document,
        _ctx: &ValidationContext,
    ) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();

        for line in &doc.lines {
            for automaton in [&*MARKERS, &*FILLER] {
                for m in automaton.find_iter(&line.text) {
                    if !standalone(&line.text, m.start(), m.end())
                        || doc.code_mask.contains(line.offset + m.start())
                    {
                        continue;
                    }
                    let matched = &line.text[m.start()..m.end()];
                    let column = line.text[..m.start()].chars().count() + 1;
                    findings.push(
                        Finding::new(
                            RuleCategory::Placeholder,
                            line.number,
                            format!("Placeholder marker '{matched}' found"),
                        )
                        .at_column(column),
                    );
                }
            }
        }

        findings.sort_by_key(|f| (f.line, f.column));
        Ok(findings)
    }
}

/// Reject matches embedded in a longer word ("XXXL", "METODOLOGY").
fn standalone(line: &str, start: usize, end: usize) -> bool {
    let before_ok = line[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric());
    let after_ok = line[end..].chars().next().is_none_or(|c| !c.is_alphanumeric());
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::Checker;

    fn run(text: &str) -> Vec<Finding> {
        let doc = Document::parse(text);
        PlaceholderChecker
            .check(&doc, &ValidationContext::builtin())
            .unwrap()
    }

    #[test]
    fn detects_todo_without_suggestion() {
        let findings = run("TODO: Add more content here");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Placeholder marker 'TODO' found");
        assert!(findings[0].suggestion.is_none());
        assert_eq!(findings[0].column, Some(1));
    }

    #[test]
    fn detects_all_caps_markers() {
        assert_eq!(run("TBD").len(), 1);
        assert_eq!(run("FIXME: later").len(), 1);
        assert_eq!(run("see XXX below").len(), 1);
    }

    #[test]
    fn caps_markers_are_case_sensitive() {
        assert!(run("todo list for today").is_empty());
        assert!(run("the fixme tool").is_empty());
    }

    #[test]
    fn lorem_ipsum_any_case() {
        assert_eq!(run("Lorem Ipsum dolor sit amet").len(), 1);
        assert_eq!(run("standard lorem ipsum filler").len(), 1);
    }

    #[test]
    fn embedded_matches_ignored() {
        assert!(run("the XXXL size").is_empty());
        assert!(run("METODOLOGY").is_empty());
    }

    #[test]
    fn code_blocks_skipped() {
        assert!(run("```\n// TODO refactor\n```\n").is_empty());
        assert!(run("Run `TODO` as a literal.").is_empty());
    }

    #[test]
    fn mid_line_marker_has_column() {
        let findings = run("Done, but TBD remains.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].column, Some(11));
    }
}
