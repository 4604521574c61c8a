//! Suggestion generation helpers.
//!
//! Computes best-effort corrective replacements. Absence of a good
//! suggestion is always represented as `None`, never an error.

/// Optimal string alignment (restricted Damerau-Levenshtein) distance.
///
/// Counts insertions, deletions, substitutions, and adjacent
/// transpositions, so the common "ie"/"ei" swap costs 1 instead of 2.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    // Three rolling rows: two-back is needed for transpositions.
    let mut prev2 = vec![0usize; m + 1];
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for i in 1..=n {
        curr[0] = i;
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(prev2[j - 2] + 1);
            }
            curr[j] = best;
        }
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Find the dictionary entry closest to `word` by edit distance.
///
/// Ties break alphabetically. Returns `None` when the dictionary is empty
/// or the best distance exceeds `max_distance`.
pub fn closest_word<'a, I>(word: &str, dictionary: I, max_distance: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let word_lower = word.to_lowercase();
    let mut best: Option<(usize, &str)> = None;

    for entry in dictionary {
        let dist = edit_distance(&word_lower, entry);
        if dist > max_distance {
            continue;
        }
        best = match best {
            None => Some((dist, entry)),
            Some((bd, be)) if dist < bd || (dist == bd && entry < be) => Some((dist, entry)),
            keep => keep,
        };
    }

    best.map(|(_, entry)| entry)
}

/// Return `s` with its first letter uppercased.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
