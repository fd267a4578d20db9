//! Normalized Levenshtein similarity.

use super::SimilarityScorer;

/// Plain edit-distance scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl SimilarityScorer for Levenshtein {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn score(&self, spoken: &str, target: &str) -> f64 {
        similarity(spoken, target)
    }
}

/// Calculate Levenshtein distance between two strings, counted in chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Keep the rolling rows as short as the shorter input
    let (long, short) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    let n = short.len();
    if n == 0 {
        return long.len();
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);

            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalized similarity (0.0 to 1.0): `(maxLen - distance) / maxLen`.
///
/// Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}
