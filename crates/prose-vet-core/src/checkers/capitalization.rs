//! Capitalization checker.
//!
//! Detects sentence-initial lowercase letters: the first word of a line
//! that begins with a word, and any word following a sentence terminator
//! within a line. The suggestion is the sentence with its first letter
//! capitalized.

use crate::context::ValidationContext;
use crate::error::CheckerError;
use crate::finding::{Finding, RuleCategory};
use crate::scanner::{Document, Line, Token, TokenKind};
use crate::suggest;

/// Capitalization checker (severity: high).
pub struct CapitalizationChecker;

impl super::Checker for CapitalizationChecker {
    fn category(&self) -> RuleCategory {
        RuleCategory::Capitalization
    }

    fn check(
        &self,
        doc: &Document,
        ctx: &ValidationContext,
    ) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();

        for line in &doc.lines {
            if doc.code_mask.contains(line.offset) {
                continue;
            }
            for start in sentence_starts(line, ctx) {
                let token = &line.tokens[start];
                if doc.code_mask.contains(token.offset) {
                    continue;
                }
                if token.text.chars().next().is_some_and(|c| c.is_lowercase()) {
                    findings.push(
                        Finding::new(
                            RuleCategory::Capitalization,
                            line.number,
                            format!("Sentence should start with a capital letter: '{}'", token.text),
                        )
                        .at_column(token.column)
                        .with_suggestion(suggest::capitalize_first(sentence_text(line, token))),
                    );
                }
            }
        }

        Ok(findings)
    }
}

/// Indices (into `line.tokens`) of word tokens that begin a sentence.
///
/// A line opening with punctuation (Markdown structure: `#`, `-`, `>`,
/// fences) is not treated as a sentence start. Abbreviation periods do not
/// open a new sentence.
fn sentence_starts(line: &Line, ctx: &ValidationContext) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut expect_start = true;
    let mut last_word: Option<&Token> = None;

    for (idx, token) in line.tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Word => {
                if expect_start {
                    starts.push(idx);
                }
                expect_start = false;
                last_word = Some(token);
            }
            TokenKind::Punctuation => {
                let terminator = token.text.contains(['.', '!', '?']);
                let after_abbreviation = token.text.starts_with('.')
                    && last_word
                        .is_some_and(|w| ctx.is_abbreviation(&w.text) || ctx.is_honorific(&w.text));
                if idx == 0 {
                    // Structural prefix; skip this line entirely.
                    return starts;
                }
                if terminator && !after_abbreviation {
                    expect_start = true;
                }
            }
            TokenKind::Whitespace => {}
        }
    }

    starts
}

/// The sentence text from `token` to its terminator (or end of line).
fn sentence_text<'a>(line: &'a Line, token: &Token) -> &'a str {
    let start = token.offset - line.offset;
    let rest = &line.text[start..];
    rest.find(['.', '!', '?'])
        .map_or(rest, |end| &rest[..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::Checker;

    fn run(text: &str) -> Vec<Finding> {
        let doc = Document::parse(text);
        CapitalizationChecker
            .check(&doc, &ValidationContext::builtin())
            .unwrap()
    }

    #[test]
    fn lowercase_line_start_flagged_with_suggestion() {
        let findings = run("this sentence needs capitalization.");
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].suggestion.as_deref(),
            Some("This sentence needs capitalization.")
        );
        assert_eq!(findings[0].column, Some(1));
    }

    #[test]
    fn capitalized_line_passes() {
        assert!(run("This sentence is fine.").is_empty());
    }

    #[test]
    fn mid_line_sentence_start_flagged() {
        let findings = run("First part is fine. second part is not.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].column, Some(21));
        assert_eq!(findings[0].suggestion.as_deref(), Some("Second part is not."));
    }

    #[test]
    fn abbreviation_period_is_not_a_boundary() {
        assert!(run("Pages 1-3, 7, etc. are done.").is_empty());
        assert!(run("Mr. smith is checked by the honorific rule, not here.").is_empty());
    }

    #[test]
    fn markdown_structure_lines_skipped() {
        assert!(run("# heading text").is_empty());
        assert!(run("- list item in lowercase").is_empty());
        assert!(run("> quoted fragment").is_empty());
    }

    #[test]
    fn code_block_lines_skipped() {
        assert!(run("```\nlowercase code line\n```\n").is_empty());
    }

    #[test]
    fn each_lowercase_sentence_flagged_once() {
        let findings = run("one problem here. another problem there.");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].column, Some(1));
        assert_eq!(findings[1].column, Some(19));
    }
}
