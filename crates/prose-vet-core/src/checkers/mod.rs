//! Rule checkers.
//!
//! Each rule category lives in its own module behind the [`Checker`] trait.
//! Checkers are independent pure functions over the same immutable
//! [`Document`]: none observes another's output, and each returns a
//! `Result` so a single failing checker can be isolated by the engine
//! instead of aborting the run.

pub mod capitalization;
pub mod grammar;
pub mod honorific;
pub mod placeholder;
pub mod spelling;

use crate::context::ValidationContext;
use crate::error::CheckerError;
use crate::finding::{Finding, RuleCategory};
use crate::scanner::Document;

/// A single rule checker.
pub trait Checker {
    /// The category this checker reports under.
    fn category(&self) -> RuleCategory;

    /// Scan the document and return findings in document order.
    fn check(
        &self,
        doc: &Document,
        ctx: &ValidationContext,
    ) -> Result<Vec<Finding>, CheckerError>;
}

/// All checkers in their fixed run order.
///
/// The order matters for finding ties: when two findings share a line and
/// column, they are reported in this order.
pub fn all_checkers() -> Vec<Box<dyn Checker>> {
    vec![
        Box::new(spelling::SpellingChecker),
        Box::new(grammar::GrammarChecker),
        Box::new(honorific::HonorificChecker),
        Box::new(placeholder::PlaceholderChecker),
        Box::new(capitalization::CapitalizationChecker),
    ]
}

/// All checker names, in run order.
pub const ALL_CHECKERS: &[&str] = &[
    "spelling",
    "grammar",
    "honorific",
    "placeholder",
    "capitalization",
];
