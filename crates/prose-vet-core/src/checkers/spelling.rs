//! Spelling checker.
//!
//! Flags word tokens absent from the known-words dictionary. The
//! dictionary is bounded, so the checker is deliberately lenient:
//! capitalized tokens (likely proper nouns), numbers, URLs and email
//! addresses, code spans, contractions, known abbreviations, honorifics
//! and the name following one, and inflections of dictionary words are
//! never flagged. False negatives on rare correct words are expected;
//! a word present in the dictionary is never flagged regardless of case.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::ValidationContext;
use crate::error::CheckerError;
use crate::finding::{Finding, RuleCategory};
use crate::scanner::{Document, Line, Token};
use crate::suggest;

/// Regex for URLs.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)\S+").expect("valid regex"));

/// Regex for email addresses.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

/// Spelling checker (severity: critical).
pub struct SpellingChecker;

impl super::Checker for SpellingChecker {
    fn category(&self) -> RuleCategory {
        RuleCategory::Spelling
    }

    fn check(
        &self,
        doc: &Document,
        ctx: &ValidationContext,
    ) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();

        for line in &doc.lines {
            let skip_spans = non_prose_spans(&line.text);
            let mut previous_word: Option<&Token> = None;

            for token in &line.tokens {
                if !token.is_word() {
                    continue;
                }
                let name_position = previous_word.is_some_and(|p| ctx.is_honorific(&p.text));
                previous_word = Some(token);

                if doc.code_mask.contains(token.offset)
                    || in_span(&skip_spans, token.offset - line.offset)
                    || name_position
                {
                    continue;
                }
                if let Some(finding) = check_word(token, line, ctx) {
                    findings.push(finding);
                }
            }
        }

        Ok(findings)
    }
}

/// Check a single word token, returning a finding if it is a misspelling.
fn check_word(token: &Token, line: &Line, ctx: &ValidationContext) -> Option<Finding> {
    let word = token.text.as_str();

    // Leniency rules: anything plausibly correct is skipped.
    if word.chars().count() < 2
        || word.chars().any(|c| c.is_ascii_digit())
        || !word.chars().all(|c| c.is_ascii_alphabetic() || c == '-' || c == '\'')
        || word.contains('\'')
        || word.chars().next().is_some_and(char::is_uppercase)
        || ctx.is_honorific(word)
        || ctx.is_abbreviation(word)
    {
        return None;
    }

    // Hyphenated compounds are judged part by part.
    if word.contains('-') {
        if word.split('-').all(|part| part.is_empty() || word_is_known(part, ctx)) {
            return None;
        }
    } else if word_is_known(word, ctx) {
        return None;
    }

    let mut finding = Finding::new(
        RuleCategory::Spelling,
        line.number,
        format!("Misspelled word '{word}'"),
    )
    .at_column(token.column);

    let max_distance = (word.chars().count() / 2).max(2);
    if let Some(candidate) = suggest::closest_word(word, ctx.words(), max_distance) {
        finding = finding.with_suggestion(candidate);
    }

    Some(finding)
}

/// Dictionary membership including common inflections.
fn word_is_known(word: &str, ctx: &ValidationContext) -> bool {
    let lower = word.to_lowercase();
    if ctx.is_known_word(&lower) {
        return true;
    }
    matches_inflection(&lower, ctx)
}

/// Whether `lower` is an inflection of a dictionary word.
///
/// Covers plurals, verb endings (with doubled-consonant and dropped-e
/// recovery), adverbial -ly, and comparatives.
fn matches_inflection(lower: &str, ctx: &ValidationContext) -> bool {
    let stem_known = |stem: &str| !stem.is_empty() && ctx.is_known_word(stem);

    // Plurals and third-person -s / -es, -ies → -y
    if let Some(stem) = lower.strip_suffix("ies")
        && stem_known(&format!("{stem}y"))
    {
        return true;
    }
    if let Some(stem) = lower.strip_suffix("es")
        && stem_known(stem)
    {
        return true;
    }
    if let Some(stem) = lower.strip_suffix('s')
        && stem_known(stem)
    {
        return true;
    }

    // Past tense: -d, -ed, -ied → -y, doubled consonant (stopped → stop)
    if let Some(stem) = lower.strip_suffix("ied")
        && stem_known(&format!("{stem}y"))
    {
        return true;
    }
    if let Some(stem) = lower.strip_suffix("ed")
        && (stem_known(stem) || stem_known(undouble(stem)))
    {
        return true;
    }
    if let Some(stem) = lower.strip_suffix('d')
        && stem_known(stem)
    {
        return true;
    }

    // Progressive: -ing, with dropped-e (making → make) and doubled
    // consonant (running → run) recovery
    if let Some(stem) = lower.strip_suffix("ing")
        && (stem_known(stem) || stem_known(&format!("{stem}e")) || stem_known(undouble(stem)))
    {
        return true;
    }

    // Adverbs: -ly, -ily → -y
    if let Some(stem) = lower.strip_suffix("ily")
        && stem_known(&format!("{stem}y"))
    {
        return true;
    }
    if let Some(stem) = lower.strip_suffix("ly")
        && stem_known(stem)
    {
        return true;
    }

    // Comparatives: -er / -est, with dropped-e and doubled-consonant
    // recovery (bigger → big)
    for suffix in ["est", "er"] {
        if let Some(stem) = lower.strip_suffix(suffix)
            && (stem_known(stem) || stem_known(&format!("{stem}e")) || stem_known(undouble(stem)))
        {
            return true;
        }
    }

    false
}

/// Strip a doubled final consonant ("stopp" → "stop").
fn undouble(stem: &str) -> &str {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) if a == b && a.is_ascii_alphabetic() => &stem[..stem.len() - 1],
        _ => stem,
    }
}

/// Byte spans within a line covered by URLs or email addresses.
fn non_prose_spans(line: &str) -> Vec<std::ops::Range<usize>> {
    URL_PATTERN
        .find_iter(line)
        .chain(EMAIL_PATTERN.find_iter(line))
        .map(|m| m.range())
        .collect()
}

fn in_span(spans: &[std::ops::Range<usize>], offset: usize) -> bool {
    spans.iter().any(|s| s.contains(&offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::Checker;

    fn run(text: &str) -> Vec<Finding> {
        let doc = Document::parse(text);
        SpellingChecker
            .check(&doc, &ValidationContext::builtin())
            .unwrap()
    }

    #[test]
    fn flags_misspelling_with_suggestion() {
        let findings = run("This document has recieve in it.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Misspelled word 'recieve'");
        assert_eq!(findings[0].suggestion.as_deref(), Some("receive"));
        assert_eq!(findings[0].line, 1);
    }

    #[test]
    fn dictionary_words_pass_any_case() {
        assert!(run("The cat sat on the mat.").is_empty());
        assert!(run("THE CAT SAT.").is_empty());
    }

    #[test]
    fn capitalized_tokens_are_lenient() {
        // "Zyxwv" looks like a proper noun; mid-sentence capitals pass.
        assert!(run("We met Zyxwv at the office.").is_empty());
    }

    #[test]
    fn numbers_and_urls_skipped() {
        assert!(run("See https://example.com/recieve for 42 reasons.").is_empty());
        assert!(run("Write to someone@exmaple.com today.").is_empty());
    }

    #[test]
    fn inline_code_skipped() {
        assert!(run("Call `recieve_data()` to start.").is_empty());
    }

    #[test]
    fn fenced_code_skipped() {
        assert!(run("Prose here.\n\n```\nrecieve frobnicate\n```\n").is_empty());
    }

    #[test]
    fn inflections_of_known_words_pass() {
        assert!(run("she arrived and mentioned the dogs running happily").is_empty());
        assert!(run("the biggest tests stopped working").is_empty());
    }

    #[test]
    fn name_after_honorific_not_flagged() {
        let findings = run("mr smith arrived.");
        assert!(findings.is_empty(), "got: {findings:?}");
    }

    #[test]
    fn contractions_pass() {
        assert!(run("don't stop, it's fine.").is_empty());
    }

    #[test]
    fn suggestion_absent_when_nothing_close() {
        let doc = Document::parse("the qzxwvut is here.");
        let ctx = ValidationContext::with_words(["the", "is", "here"]);
        let findings = SpellingChecker.check(&doc, &ctx).unwrap();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].suggestion.is_none());
    }
}
