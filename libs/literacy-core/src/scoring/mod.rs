//! Similarity scorers for recognizer transcripts.

pub mod levenshtein;
pub mod vowel;

pub use levenshtein::{levenshtein_distance, similarity, Levenshtein};
pub use vowel::VowelAware;

/// Trait for transcript similarity scorers.
pub trait SimilarityScorer: Send + Sync {
    /// Scorer identifier.
    fn name(&self) -> &'static str;

    /// Score a normalized transcript against a normalized target, in [0, 1].
    fn score(&self, spoken: &str, target: &str) -> f64;
}

/// Get scorer by name.
pub fn get_scorer(name: &str) -> Option<Box<dyn SimilarityScorer>> {
    match name {
        "levenshtein" => Some(Box::new(Levenshtein)),
        "vowel" => Some(Box::new(VowelAware)),
        _ => None,
    }
}
