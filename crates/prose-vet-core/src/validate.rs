//! Validation engine.
//!
//! Runs every enabled checker over one immutable [`Document`] and
//! assembles the ordered [`Report`]. Checkers are isolated fallible
//! units: one checker failing internally discards that checker's partial
//! results and records a diagnostic, while the others proceed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::checkers::{self, ALL_CHECKERS};
use crate::context::ValidationContext;
use crate::error::{ValidateError, ValidateResult};
use crate::finding::Finding;
use crate::scanner::Document;

/// A checker that failed internally during a run.
///
/// The run itself still completes; callers can distinguish "document is
/// clean" from "document is clean but a checker could not run".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckerDiagnostic {
    /// Name of the checker that failed.
    pub checker: String,
    /// What went wrong.
    pub detail: String,
}

/// The complete result of validating one document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    /// Filename hint, used for context in messages only.
    pub file: String,
    /// Findings in document order: ascending line, then column, ties in
    /// checker run order.
    pub findings: Vec<Finding>,
    /// Checkers that failed internally, if any (reduced confidence).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<CheckerDiagnostic>,
    /// Overall pass/fail: `true` iff `findings` is empty.
    pub pass: bool,
}

/// Validate `content`, running the given subset of checkers.
///
/// `file_hint` is contextual only and never changes behavior. `enabled`
/// of `None` runs every checker; names are validated against
/// [`ALL_CHECKERS`] before the run starts.
#[tracing::instrument(skip(content, ctx), fields(file = file_hint, content_len = content.len()))]
pub fn run_validation(
    file_hint: &str,
    content: &str,
    ctx: &ValidationContext,
    enabled: Option<&[String]>,
) -> ValidateResult<Report> {
    if let Some(names) = enabled {
        for name in names {
            if !ALL_CHECKERS.contains(&name.as_str()) {
                return Err(ValidateError::UnknownChecker {
                    name: name.clone(),
                    available: ALL_CHECKERS.join(", "),
                });
            }
        }
    }

    let doc = Document::parse(content);
    let mut findings = Vec::new();
    let mut diagnostics = Vec::new();

    for checker in checkers::all_checkers() {
        let name = checker.category().as_str();
        if enabled.is_some_and(|names| !names.iter().any(|n| n == name)) {
            continue;
        }
        match checker.check(&doc, ctx) {
            Ok(mut batch) => findings.append(&mut batch),
            Err(err) => {
                tracing::warn!(checker = name, error = %err, "checker failed; results discarded");
                diagnostics.push(CheckerDiagnostic {
                    checker: name.to_string(),
                    detail: err.detail,
                });
            }
        }
    }

    // Stable sort: ties on (line, column) keep checker run order.
    findings.sort_by_key(|f| (f.line, f.column.unwrap_or(0)));

    let pass = findings.is_empty();
    tracing::debug!(
        findings = findings.len(),
        diagnostics = diagnostics.len(),
        pass,
        "validation complete"
    );

    Ok(Report {
        file: file_hint.to_string(),
        findings,
        diagnostics,
        pass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::{RuleCategory, Severity};

    fn validate(text: &str) -> Report {
        run_validation("test.md", text, &ValidationContext::builtin(), None).unwrap()
    }

    #[test]
    fn misspelling_with_correct_honorific() {
        let report = validate("This document has recieve and Mr. Smith mentioned.");
        assert!(!report.pass);
        assert_eq!(report.findings.len(), 1);
        let finding = &report.findings[0];
        assert_eq!(finding.category, RuleCategory::Spelling);
        assert_eq!(finding.severity, Severity::Critical);
        assert!(finding.message.contains("recieve"));
        assert_eq!(finding.suggestion.as_deref(), Some("receive"));
    }

    #[test]
    fn todo_is_low_severity_without_suggestion() {
        let report = validate("TODO: Add more content here");
        assert_eq!(report.findings.len(), 1);
        let finding = &report.findings[0];
        assert_eq!(finding.category, RuleCategory::Placeholder);
        assert_eq!(finding.severity, Severity::Low);
        assert!(finding.suggestion.is_none());
    }

    #[test]
    fn lowercase_sentence_gets_one_high_finding() {
        let report = validate("this sentence needs capitalization.");
        assert_eq!(report.findings.len(), 1);
        let finding = &report.findings[0];
        assert_eq!(finding.category, RuleCategory::Capitalization);
        assert_eq!(finding.severity, Severity::High);
        assert_eq!(
            finding.suggestion.as_deref(),
            Some("This sentence needs capitalization.")
        );
    }

    #[test]
    fn malformed_honorific_orders_before_capitalization() {
        let report = validate("mr smith arrived.");
        assert_eq!(report.findings.len(), 2);
        // Both findings sit at column 1; ties keep checker run order, so
        // the honorific comes first.
        assert_eq!(report.findings[0].category, RuleCategory::Honorific);
        assert_eq!(report.findings[0].severity, Severity::Medium);
        assert_eq!(report.findings[1].category, RuleCategory::Capitalization);
    }

    #[test]
    fn empty_input_passes_with_no_findings() {
        let report = validate("");
        assert!(report.pass);
        assert!(report.findings.is_empty());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn duplicated_dictionary_word_is_grammar_only() {
        let report = validate("the the cat");
        let grammar: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.category == RuleCategory::Grammar)
            .collect();
        assert_eq!(grammar.len(), 1);
        assert!(
            report
                .findings
                .iter()
                .all(|f| f.category != RuleCategory::Spelling),
            "dictionary words must not be flagged as misspellings"
        );
    }

    #[test]
    fn validation_is_deterministic() {
        let text = "mr smith arrived.\nTODO: finish\nthe the cat sat.";
        let first = validate(text);
        let second = validate(text);
        assert_eq!(first.findings.len(), second.findings.len());
        for (a, b) in first.findings.iter().zip(&second.findings) {
            assert_eq!(a.category, b.category);
            assert_eq!(a.line, b.line);
            assert_eq!(a.column, b.column);
            assert_eq!(a.message, b.message);
            assert_eq!(a.suggestion, b.suggestion);
        }
    }

    #[test]
    fn findings_are_nondecreasing_in_line() {
        let report = validate("TODO on line one\nthe the cat\nthis is lowercase.");
        let lines: Vec<usize> = report.findings.iter().map(|f| f.line).collect();
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted);
    }

    #[test]
    fn severity_always_matches_table() {
        let report = validate("mr smith arrived. TODO recieve the the cat.");
        assert!(!report.findings.is_empty());
        for finding in &report.findings {
            assert_eq!(finding.severity, finding.category.severity());
        }
    }

    #[test]
    fn enabled_subset_runs_only_those_checkers() {
        let enabled = vec!["placeholder".to_string()];
        let report = run_validation(
            "test.md",
            "this has recieve and TODO in it",
            &ValidationContext::builtin(),
            Some(&enabled),
        )
        .unwrap();
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].category, RuleCategory::Placeholder);
    }

    #[test]
    fn unknown_checker_name_errors() {
        let enabled = vec!["styleguide".to_string()];
        let err = run_validation(
            "test.md",
            "text",
            &ValidationContext::builtin(),
            Some(&enabled),
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown checker"));
        assert!(err.to_string().contains("spelling"));
    }

    #[test]
    fn file_hint_does_not_change_findings() {
        let text = "TODO: pending";
        let a = run_validation("a.md", text, &ValidationContext::builtin(), None).unwrap();
        let b = run_validation("b.txt", text, &ValidationContext::builtin(), None).unwrap();
        assert_eq!(a.findings.len(), b.findings.len());
        assert_eq!(a.findings[0].message, b.findings[0].message);
    }
}
