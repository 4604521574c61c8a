//! Static dictionaries used by the checkers.
//!
//! All tables are `LazyLock` statics initialized once per process and
//! read-only thereafter. Checkers never read them directly — they go
//! through the [`crate::context::ValidationContext`] so tests can
//! substitute fixture dictionaries.

pub mod abbreviations;
pub mod honorifics;
pub mod known_words;
