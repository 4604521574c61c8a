//! Read-only validation context.
//!
//! Bundles the dictionaries a validation run needs and is passed explicitly
//! to every checker. Built once at startup (the static tables behind it are
//! process-wide `LazyLock`s); tests construct fixture contexts with
//! [`ValidationContext::with_words`].

use std::collections::{HashMap, HashSet};

use crate::dictionaries::{abbreviations, honorifics, known_words};

/// Dictionaries for one validation run. Immutable once built.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    known_words: HashSet<String>,
    honorifics: HashMap<String, String>,
    abbreviations: HashSet<String>,
}

impl ValidationContext {
    /// Context backed by the built-in dictionaries.
    pub fn builtin() -> Self {
        Self {
            known_words: known_words::KNOWN_WORDS
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
            honorifics: honorifics::HONORIFICS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            abbreviations: abbreviations::ABBREVIATIONS
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
        }
    }

    /// Built-in dictionaries extended with additional known words.
    ///
    /// Extra words are lowercased; project jargon and product names listed
    /// in config stop being flagged as misspellings.
    pub fn with_extra_words<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ctx = Self::builtin();
        ctx.known_words
            .extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        ctx
    }

    /// Fixture context with exactly the given known words and the built-in
    /// honorifics and abbreviations. For tests.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            known_words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            honorifics: honorifics::HONORIFICS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            abbreviations: abbreviations::ABBREVIATIONS
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
        }
    }

    /// Case-insensitive dictionary membership.
    pub fn is_known_word(&self, word: &str) -> bool {
        self.known_words.contains(word.to_lowercase().as_str())
    }

    /// Iterate over dictionary entries (for suggestion generation).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.known_words.iter().map(String::as_str)
    }

    /// Normalized form for an honorific token (with or without its period).
    pub fn honorific_form(&self, token: &str) -> Option<&str> {
        let lower = token.trim_end_matches('.').to_lowercase();
        self.honorifics.get(lower.as_str()).map(String::as_str)
    }

    /// Whether a token is an honorific abbreviation.
    pub fn is_honorific(&self, token: &str) -> bool {
        self.honorific_form(token).is_some()
    }

    /// Whether a token is a known abbreviation, case-insensitively.
    ///
    /// The token may carry periods ("etc." and "e.g" both match).
    pub fn is_abbreviation(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.abbreviations.contains(lower.trim_matches('.'))
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::builtin()
    }
}
