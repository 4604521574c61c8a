//! Core library for prose-vet.
//!
//! This crate validates Markdown and plain-text content for common writing
//! defects: misspellings, simple grammar mistakes, malformed honorifics,
//! leftover placeholder markers, and sentence capitalization. It is used by
//! the `prose-vet` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`validate`] - The validation engine and its [`Report`](validate::Report)
//! - [`checkers`] - The individual checkers and the [`Checker`](checkers::Checker) trait
//! - [`finding`] - Findings, rule categories, and the fixed severity table
//! - [`protocol`] - The emoji-marked textual report protocol
//! - [`scanner`] - Line and token scanning of input documents
//! - [`markdown`] - Code-region masking for Markdown input
//! - [`context`] - Dictionaries and per-run validation context
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use prose_vet_core::{ValidationContext, run_validation};
//!
//! let ctx = ValidationContext::builtin();
//! let report = run_validation("draft.md", "TODO: write this", &ctx, None)
//!     .expect("checker names are valid");
//!
//! assert!(!report.pass);
//! ```
#![deny(unsafe_code)]

pub mod checkers;
pub mod config;
pub mod context;
pub mod dictionaries;
pub mod error;
pub mod finding;
pub mod markdown;
pub mod protocol;
pub mod scanner;
pub mod suggest;
pub mod validate;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use context::ValidationContext;
pub use error::{ConfigError, ConfigResult, ValidateError, ValidateResult};
pub use finding::{Finding, RuleCategory, Severity};
pub use validate::{Report, run_validation};

/// Default maximum input size in bytes (5 MiB).
///
/// Applied by the CLI and MCP server unless overridden via
/// [`Config::max_input_bytes`] or disabled via
/// [`Config::disable_input_limit`].
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
