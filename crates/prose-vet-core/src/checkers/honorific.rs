//! Honorific checker.
//!
//! Verifies that honorific abbreviations (Mr., Mrs., Dr., Prof., ...) are
//! capitalized, carry their trailing period, and precede a name-like
//! (capitalized) token. A malformed occurrence yields exactly one finding
//! describing the defect, with the normalized form as the suggestion.

use crate::context::ValidationContext;
use crate::error::CheckerError;
use crate::finding::{Finding, RuleCategory};
use crate::scanner::{Document, Line, Token, TokenKind};

/// Honorific checker (severity: medium).
pub struct HonorificChecker;

impl super::Checker for HonorificChecker {
    fn category(&self) -> RuleCategory {
        RuleCategory::Honorific
    }

    fn check(
        &self,
        doc: &Document,
        ctx: &ValidationContext,
    ) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();

        for line in &doc.lines {
            let tokens = &line.tokens;
            for (idx, token) in tokens.iter().enumerate() {
                if !token.is_word() || doc.code_mask.contains(token.offset) {
                    continue;
                }
                let Some(normalized) = ctx.honorific_form(&token.text) else {
                    continue;
                };
                // Unit-style uses ("the timeout is 5 ms") are not titles.
                if preceded_by_number(tokens, idx) {
                    continue;
                }
                if let Some(finding) = check_occurrence(line, tokens, idx, token, normalized) {
                    findings.push(finding);
                }
            }
        }

        Ok(findings)
    }
}

/// Validate one honorific occurrence.
fn check_occurrence(
    line: &Line,
    tokens: &[Token],
    idx: usize,
    token: &Token,
    normalized: &str,
) -> Option<Finding> {
    let capitalized = token.text.chars().next().is_some_and(char::is_uppercase);
    let has_period = tokens
        .get(idx + 1)
        .is_some_and(|t| t.kind == TokenKind::Punctuation && t.text.starts_with('.'));

    if !capitalized || !has_period {
        let defect = if !capitalized && !has_period {
            "should be capitalized and end with a period"
        } else if capitalized {
            "is missing its period"
        } else {
            "should be capitalized"
        };
        return Some(
            Finding::new(
                RuleCategory::Honorific,
                line.number,
                format!("Honorific '{}' {defect}", token.text),
            )
            .at_column(token.column)
            .with_suggestion(normalized),
        );
    }

    // Well-formed honorific: it must introduce a proper name.
    let name = next_word(tokens, idx);
    let name_like = name.is_some_and(|t| t.text.chars().next().is_some_and(char::is_uppercase));
    if !name_like {
        return Some(
            Finding::new(
                RuleCategory::Honorific,
                line.number,
                format!("Honorific '{normalized}' is not followed by a proper name"),
            )
            .at_column(token.column)
            .with_suggestion(normalized),
        );
    }

    None
}

/// The next word token after position `idx`, if any.
fn next_word(tokens: &[Token], idx: usize) -> Option<&Token> {
    tokens[idx + 1..].iter().find(|t| t.is_word())
}

/// Whether the word token before `idx` is numeric.
fn preceded_by_number(tokens: &[Token], idx: usize) -> bool {
    tokens[..idx]
        .iter()
        .rev()
        .find(|t| t.is_word())
        .is_some_and(|t| t.text.chars().all(|c| c.is_ascii_digit()))
}
