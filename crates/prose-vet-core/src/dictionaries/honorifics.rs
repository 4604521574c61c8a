//! Honorific dictionary.
//!
//! Maps title abbreviations to their normalized written form (capitalized,
//! trailing period). The honorific checker compares what the document
//! actually wrote against the normalized form.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Honorific abbreviations → normalized form.
///
/// Keys are lowercase without the period. "miss" is excluded: it is a
/// common verb and is not abbreviated, so it cannot be validated by form.
pub static HONORIFICS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("mr", "Mr."),
        ("mrs", "Mrs."),
        ("ms", "Ms."),
        ("dr", "Dr."),
        ("prof", "Prof."),
        ("rev", "Rev."),
        ("fr", "Fr."),
        ("hon", "Hon."),
        ("capt", "Capt."),
        ("cmdr", "Cmdr."),
        ("col", "Col."),
        ("gen", "Gen."),
        ("lt", "Lt."),
        ("maj", "Maj."),
        ("sgt", "Sgt."),
        ("sen", "Sen."),
        ("gov", "Gov."),
    ])
});
