//! Finding model: rule categories, severities, and the fixed mapping
//! between them.
//!
//! The severity of a finding is a function of its rule category alone.
//! [`RuleCategory::severity`] is the single source of truth; the
//! [`SEVERITY_TABLE`] re-exports the same mapping as data for callers that
//! need to enumerate it (report tooling, documentation, tests).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Issue severity, ordered by descending urgency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be fixed before the content ships.
    Critical,
    /// Clear defect worth addressing.
    High,
    /// Likely defect; review recommended.
    Medium,
    /// Informational; still reported.
    Low,
}

impl Severity {
    /// Returns the severity as a lowercase string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The checker type that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Word not in the known-words dictionary.
    Spelling,
    /// Duplicated words and subject-verb disagreement.
    Grammar,
    /// Malformed honorific abbreviation (Mr., Dr., etc.).
    Honorific,
    /// Literal placeholder marker (TODO, TBD, FIXME, ...).
    Placeholder,
    /// Sentence-initial lowercase letter.
    Capitalization,
}

impl RuleCategory {
    /// The fixed severity for this category. Never varies per instance.
    pub const fn severity(self) -> Severity {
        match self {
            Self::Spelling => Severity::Critical,
            Self::Grammar | Self::Capitalization => Severity::High,
            Self::Honorific => Severity::Medium,
            Self::Placeholder => Severity::Low,
        }
    }

    /// Returns the category as a lowercase string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spelling => "spelling",
            Self::Grammar => "grammar",
            Self::Honorific => "honorific",
            Self::Placeholder => "placeholder",
            Self::Capitalization => "capitalization",
        }
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category → severity mapping as data, in checker run order.
pub const SEVERITY_TABLE: &[(RuleCategory, Severity)] = &[
    (RuleCategory::Spelling, Severity::Critical),
    (RuleCategory::Grammar, Severity::High),
    (RuleCategory::Honorific, Severity::Medium),
    (RuleCategory::Placeholder, Severity::Low),
    (RuleCategory::Capitalization, Severity::High),
];

/// A single reported content issue.
///
/// Produced by exactly one checker and never mutated afterwards. The
/// severity is derived from the category at construction time, so a
/// `Finding` cannot carry a severity that disagrees with the table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    /// The checker category that produced this finding.
    pub category: RuleCategory,
    /// 1-indexed line number in the document.
    pub line: usize,
    /// 1-indexed column (character based), when the checker can pin one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    /// Severity, fixed per category.
    pub severity: Severity,
    /// Human-readable description of the issue.
    pub message: String,
    /// Best-effort corrective replacement, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    /// Create a finding with the severity taken from the category table.
    pub fn new(category: RuleCategory, line: usize, message: impl Into<String>) -> Self {
        Self {
            category,
            line,
            column: None,
            severity: category.severity(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attach a 1-indexed column.
    #[must_use]
    pub const fn at_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Attach a corrective suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_table_matches_category_fn() {
        for (category, severity) in SEVERITY_TABLE {
            assert_eq!(category.severity(), *severity);
        }
    }

    #[test]
    fn table_covers_every_category() {
        let categories = [
            RuleCategory::Spelling,
            RuleCategory::Grammar,
            RuleCategory::Honorific,
            RuleCategory::Placeholder,
            RuleCategory::Capitalization,
        ];
        for category in categories {
            assert!(SEVERITY_TABLE.iter().any(|(c, _)| *c == category));
        }
    }

    #[test]
    fn finding_severity_comes_from_category() {
        let finding = Finding::new(RuleCategory::Spelling, 3, "misspelled word");
        assert_eq!(finding.severity, Severity::Critical);

        let finding = Finding::new(RuleCategory::Placeholder, 1, "placeholder marker");
        assert_eq!(finding.severity, Severity::Low);
    }

    #[test]
    fn severity_orders_by_urgency() {
        assert!(Severity::Critical < Severity::High);
        assert!(Severity::High < Severity::Medium);
        assert!(Severity::Medium < Severity::Low);
    }

    #[test]
    fn builder_attaches_column_and_suggestion() {
        let finding = Finding::new(RuleCategory::Capitalization, 2, "lowercase sentence start")
            .at_column(5)
            .with_suggestion("This");
        assert_eq!(finding.column, Some(5));
        assert_eq!(finding.suggestion.as_deref(), Some("This"));
    }
}
