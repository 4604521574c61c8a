//! Line-based textual report protocol.
//!
//! External tooling parses this output, so it must be exactly
//! reproducible. One finding occupies one or two lines:
//!
//! ```text
//! 🔴 Line 3: Misspelled word 'recieve'
//! 💡 receive
//! ```
//!
//! The severity markers form a closed enumeration mapped bijectively to
//! [`Severity`] via an explicit table — severity is never inferred from
//! message content. A suggestion line belongs to a finding if and only if
//! it is the line directly below it; lines carrying no marker are ignored
//! by the parser.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::finding::Severity;
use crate::validate::Report;

/// Marker prefix for a suggestion line.
pub const SUGGESTION_MARKER: &str = "💡";

/// Severity ↔ marker mapping, in descending urgency.
pub const SEVERITY_MARKERS: &[(Severity, &str)] = &[
    (Severity::Critical, "🔴"),
    (Severity::High, "🟡"),
    (Severity::Medium, "🔵"),
    (Severity::Low, "🟠"),
];

/// The marker glyph for a severity.
pub fn marker(severity: Severity) -> &'static str {
    SEVERITY_MARKERS
        .iter()
        .find(|(s, _)| *s == severity)
        .map(|(_, m)| *m)
        .unwrap_or("🔴")
}

/// The severity for a marker glyph, if it is one of the four.
pub fn severity_for_marker(glyph: &str) -> Option<Severity> {
    SEVERITY_MARKERS
        .iter()
        .find(|(_, m)| *m == glyph)
        .map(|(s, _)| *s)
}

/// Render a report into the textual protocol.
///
/// Zero findings render as the empty string — nothing is emitted on the
/// finding channel for a clean document.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    for finding in &report.findings {
        out.push_str(marker(finding.severity));
        out.push(' ');
        out.push_str(&format!("Line {}: {}", finding.line, finding.message));
        out.push('\n');
        if let Some(ref suggestion) = finding.suggestion {
            out.push_str(SUGGESTION_MARKER);
            out.push(' ');
            out.push_str(suggestion);
            out.push('\n');
        }
    }
    out
}

/// One issue recovered from protocol text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParsedIssue {
    /// Severity decoded from the marker.
    pub severity: Severity,
    /// Message text after the marker.
    pub message: String,
    /// Suggestion from the directly following 💡 line, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Structured view of a textual report: the shape wrappers consume.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ParsedReport {
    /// "pass" or "fail".
    pub status: String,
    /// Issues in report order.
    pub issues: Vec<ParsedIssue>,
    /// Human-readable summary.
    pub message: String,
}

/// Parse protocol text back into the structured contract.
///
/// A 💡 line is attached to a finding only when it is the line directly
/// below the finding line — no broader lookahead. Unrecognized lines are
/// skipped, so the protocol can be interleaved with ordinary log output.
pub fn parse(text: &str) -> ParsedReport {
    let lines: Vec<&str> = text.lines().collect();
    let mut issues: Vec<ParsedIssue> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some((glyph, rest)) = split_marker(line) else {
            continue;
        };
        let Some(severity) = severity_for_marker(glyph) else {
            continue;
        };
        let suggestion = lines.get(i + 1).and_then(|next| {
            split_marker(next)
                .filter(|(g, _)| *g == SUGGESTION_MARKER)
                .map(|(_, s)| s.to_string())
        });
        issues.push(ParsedIssue {
            severity,
            message: rest.to_string(),
            suggestion,
        });
    }

    let (status, message) = if issues.is_empty() {
        ("pass".to_string(), "No validation issues found".to_string())
    } else {
        (
            "fail".to_string(),
            format!("Found {} validation issue(s)", issues.len()),
        )
    };

    ParsedReport {
        status,
        issues,
        message,
    }
}

/// Split a line into its leading marker glyph and the trailing text.
fn split_marker(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    let first = trimmed.chars().next()?;
    let glyph_len = first.len_utf8();
    let glyph = &trimmed[..glyph_len];
    if severity_for_marker(glyph).is_none() && glyph != SUGGESTION_MARKER {
        return None;
    }
    Some((glyph, trimmed[glyph_len..].trim_start()))
}
