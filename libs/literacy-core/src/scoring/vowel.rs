//! Vowel-aware scorer.
//!
//! Recognizers rarely return a bare vowel; children saying "a" tend to come
//! back as "ah" or "ha". Known look-alike transcripts earn partial credit
//! before falling back to edit distance.

use super::{levenshtein::similarity, SimilarityScorer};

const CONTAINED_SCORE: f64 = 0.8;
const LOOKALIKE_SCORE: f64 = 0.7;

/// Scorer that knows common transcripts of single spoken vowels.
#[derive(Debug, Clone, Copy, Default)]
pub struct VowelAware;

impl SimilarityScorer for VowelAware {
    fn name(&self) -> &'static str {
        "vowel"
    }

    fn score(&self, spoken: &str, target: &str) -> f64 {
        if spoken == target {
            return 1.0;
        }

        let rule = if !target.is_empty() && spoken.contains(target) {
            CONTAINED_SCORE
        } else if lookalikes(target)
            .iter()
            .any(|alike| spoken.contains(alike) || (!spoken.is_empty() && alike.contains(spoken)))
        {
            LOOKALIKE_SCORE
        } else {
            0.0
        };

        // Never score below plain edit distance
        rule.max(similarity(spoken, target))
    }
}

fn lookalikes(vowel: &str) -> &'static [&'static str] {
    match vowel {
        "a" => &["ah", "aa", "ha"],
        "e" => &["eh", "ee", "he"],
        "i" => &["ii", "hi", "ee"],
        "o" => &["oh", "oo", "ho"],
        "u" => &["uu", "hu", "oo"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_vowel_is_perfect() {
        assert_eq!(VowelAware.score("a", "a"), 1.0);
    }

    #[test]
    fn contained_vowel_scores_high() {
        assert_eq!(VowelAware.score("la", "a"), 0.8);
    }

    #[test]
    fn lookalike_transcript_gets_partial_credit() {
        assert_eq!(VowelAware.score("oh", "o"), 0.8); // contains "o"
        assert_eq!(VowelAware.score("hu", "o"), 0.0);
        assert_eq!(VowelAware.score("ee", "i"), 0.7);
        assert_eq!(VowelAware.score("h", "e"), 0.7);
    }

    #[test]
    fn silence_earns_no_vowel_credit() {
        assert_eq!(VowelAware.score("", "a"), 0.0);
    }

    #[test]
    fn non_vowel_targets_fall_back_to_levenshtein() {
        assert_eq!(VowelAware.score("cosa", "casa"), similarity("cosa", "casa"));
    }

    #[test]
    fn never_below_levenshtein() {
        for (spoken, target) in [("x", "a"), ("", "e"), ("uu", "u"), ("hola", "o")] {
            assert!(VowelAware.score(spoken, target) >= similarity(spoken, target));
        }
    }
}
