//! Grammar checker.
//!
//! Detects mechanical errors via pattern rules: duplicated consecutive
//! words and subject-verb disagreement for a small fixed set of
//! pronoun + verb patterns. Sentence-initial capitalization belongs to
//! the capitalization checker so a lowercase sentence yields one finding,
//! not two.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::ValidationContext;
use crate::error::CheckerError;
use crate::finding::{Finding, RuleCategory};
use crate::scanner::{Document, TokenKind};

/// Subject-verb agreement patterns with the corrected verb.
///
/// Matched case-insensitively against the original line; the correction
/// replaces the verb while the suggestion preserves the subject's casing.
static AGREEMENT_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)\b(he|she|it)\s+are\b").expect("valid regex"),
            "is",
        ),
        (
            Regex::new(r"(?i)\b(he|she|it)\s+were\b").expect("valid regex"),
            "was",
        ),
        (
            Regex::new(r"(?i)\b(he|she|it)\s+have\b").expect("valid regex"),
            "has",
        ),
        (
            Regex::new(r"(?i)\b(they|we|you)\s+is\b").expect("valid regex"),
            "are",
        ),
        (
            Regex::new(r"(?i)\b(they|we|you)\s+was\b").expect("valid regex"),
            "were",
        ),
        (
            Regex::new(r"(?i)\b(they|we|you)\s+has\b").expect("valid regex"),
            "have",
        ),
    ]
});

/// Grammar checker (severity: high).
pub struct GrammarChecker;

impl super::Checker for GrammarChecker {
    fn category(&self) -> RuleCategory {
        RuleCategory::Grammar
    }

    fn check(
        &self,
        doc: &Document,
        _ctx: &ValidationContext,
    ) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();

        for line in &doc.lines {
            if doc.code_mask.contains(line.offset) {
                continue;
            }
            check_duplicated_words(doc, line, &mut findings);
            check_agreement(doc, line, &mut findings);
        }

        findings.sort_by_key(|f| (f.line, f.column));
        Ok(findings)
    }
}

/// Flag consecutive identical words ("the the"), case-insensitively.
///
/// Only adjacency through whitespace counts: "that that," vs "that, that"
/// differ, and a sentence boundary between the words does not.
fn check_duplicated_words(
    doc: &Document,
    line: &crate::scanner::Line,
    findings: &mut Vec<Finding>,
) {
    let mut previous: Option<&crate::scanner::Token> = None;

    for token in &line.tokens {
        match token.kind {
            TokenKind::Word => {
                if let Some(prev) = previous
                    && prev.text.eq_ignore_ascii_case(&token.text)
                    && token.text.chars().all(char::is_alphabetic)
                    && !doc.code_mask.contains(token.offset)
                {
                    findings.push(
                        Finding::new(
                            RuleCategory::Grammar,
                            line.number,
                            format!("Duplicated word '{}'", token.text),
                        )
                        .at_column(token.column)
                        .with_suggestion(prev.text.clone()),
                    );
                }
                previous = Some(token);
            }
            TokenKind::Whitespace => {}
            TokenKind::Punctuation => previous = None,
        }
    }
}

/// Flag subject-verb disagreement for the fixed pattern set.
fn check_agreement(doc: &Document, line: &crate::scanner::Line, findings: &mut Vec<Finding>) {
    for (pattern, corrected_verb) in AGREEMENT_PATTERNS.iter() {
        for m in pattern.find_iter(&line.text) {
            if doc.code_mask.contains(line.offset + m.start()) {
                continue;
            }
            let column = line.text[..m.start()].chars().count() + 1;
            let original = m.as_str();
            let subject = original.split_whitespace().next().unwrap_or(original);
            findings.push(
                Finding::new(
                    RuleCategory::Grammar,
                    line.number,
                    format!("Subject-verb disagreement: '{original}'"),
                )
                .at_column(column)
                .with_suggestion(format!("{subject} {corrected_verb}")),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::Checker;

    fn run(text: &str) -> Vec<Finding> {
        let doc = Document::parse(text);
        GrammarChecker
            .check(&doc, &ValidationContext::builtin())
            .unwrap()
    }

    #[test]
    fn detects_duplicated_word() {
        let findings = run("the the cat");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Duplicated word 'the'");
        assert_eq!(findings[0].suggestion.as_deref(), Some("the"));
        assert_eq!(findings[0].column, Some(5));
    }

    #[test]
    fn duplication_is_case_insensitive() {
        let findings = run("The the cat sat.");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn punctuation_breaks_adjacency() {
        assert!(run("I know that, that was wrong.").is_empty());
        assert!(run("It was bad. Bad enough to stop.").is_empty());
    }

    #[test]
    fn detects_singular_subject_plural_verb() {
        let findings = run("He are going home.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Subject-verb disagreement: 'He are'");
        assert_eq!(findings[0].suggestion.as_deref(), Some("He is"));
    }

    #[test]
    fn detects_plural_subject_singular_verb() {
        let findings = run("they was late again.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].suggestion.as_deref(), Some("they were"));
    }

    #[test]
    fn multibyte_text_before_match_keeps_positions() {
        // Lowercasing 'Ⱥ' changes its UTF-8 length; positions must come
        // from the original line.
        let findings = run("Ⱥx é he are going.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Subject-verb disagreement: 'he are'");
        assert_eq!(findings[0].suggestion.as_deref(), Some("he is"));
        assert_eq!(findings[0].column, Some(6));
    }

    #[test]
    fn agreement_matching_ignores_case() {
        let findings = run("HE ARE not sure.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].suggestion.as_deref(), Some("HE is"));
    }

    #[test]
    fn clean_text_has_no_findings() {
        assert!(run("The cat sat on the mat. It is happy.").is_empty());
    }

    #[test]
    fn findings_carry_line_numbers() {
        let findings = run("Fine line here.\nthe the cat");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
    }
}
