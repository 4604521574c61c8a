//! Abbreviation dictionary.
//!
//! Common abbreviations the spelling and capitalization checkers must not
//! mistake for misspellings or sentence boundaries.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations stored lowercase without trailing periods.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Latin and editorial
    set.extend([
        "etc", "vs", "e.g", "i.e", "et", "al", "cf", "viz", "ibid", "n.b", "p.s", "approx",
        "est", "misc", "ref", "refs", "ed", "eds", "vol", "no", "pp", "ch", "fig", "eq",
    ]);

    // Time and dates
    set.extend([
        "a.m", "p.m", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
        "nov", "dec", "mon", "tue", "wed", "thu", "fri", "sat", "sun",
    ]);

    // Locations and organizations
    set.extend([
        "st", "ave", "blvd", "rd", "apt", "dept", "inc", "corp", "ltd", "llc", "co", "intl",
    ]);

    // Units
    set.extend([
        "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "ft", "yd", "mi", "mph", "kph",
        "min", "max", "avg", "hr", "hrs", "sec", "ms",
    ]);

    set
});
