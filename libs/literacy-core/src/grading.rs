//! Grading of spoken attempts against a target word or letter.
//!
//! The policy is layered and the first matching tier wins:
//!
//! 1. exact match, similarity ≥ perfect or confidence ≥ perfect → 3 stars
//! 2. transcript contains the target, similarity ≥ good or confidence ≥ good → 2 stars
//! 3. similarity ≥ fair or confidence ≥ fair → 1 star
//! 4. otherwise → 0 stars

use crate::config::GradingConfig;
use crate::error::{RecognitionError, Result};
use crate::scoring::{Levenshtein, SimilarityScorer};
use crate::speech::Recognition;
use serde::{Deserialize, Serialize};

/// Category of a graded attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Retry,
    Fair,
    Good,
    Perfect,
}

impl Grade {
    /// Star count for this grade (0-3).
    pub fn stars(self) -> u8 {
        match self {
            Self::Retry => 0,
            Self::Fair => 1,
            Self::Good => 2,
            Self::Perfect => 3,
        }
    }

    /// Create from star count.
    pub fn from_stars(stars: u8) -> Option<Self> {
        match stars {
            0 => Some(Self::Retry),
            1 => Some(Self::Fair),
            2 => Some(Self::Good),
            3 => Some(Self::Perfect),
            _ => None,
        }
    }

    /// Whether the learner is done with this target and listening can stop.
    pub fn ends_attempt(self) -> bool {
        matches!(self, Self::Perfect | Self::Good)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retry => "retry",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Perfect => "perfect",
        }
    }
}

/// Graded outcome of one spoken attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    pub stars: u8,
    pub grade: Grade,
    /// Scorer output for the normalized transcript.
    pub similarity: f64,
    /// Confidence actually used, after clamping and absent-value policy.
    pub confidence: f64,
}

/// Outcome of a recognition attempt: either graded, or nothing usable was heard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Graded(GradeResult),
    NoInput { error: RecognitionError },
}

impl Outcome {
    /// Stars earned; a no-input outcome earns none.
    pub fn stars(&self) -> u8 {
        match self {
            Self::Graded(result) => result.stars,
            Self::NoInput { .. } => 0,
        }
    }

    pub fn grade(&self) -> Option<Grade> {
        match self {
            Self::Graded(result) => Some(result.grade),
            Self::NoInput { .. } => None,
        }
    }
}

/// Lower-case and trim a transcript or target.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Grade `spoken` against `target` with the default policy.
pub fn evaluate(spoken: &str, target: &str, confidence: Option<f64>) -> GradeResult {
    Evaluator::default().evaluate(spoken, target, confidence)
}

/// Applies a [`GradingConfig`] with a chosen similarity scorer.
pub struct Evaluator {
    config: GradingConfig,
    scorer: Box<dyn SimilarityScorer>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            config: GradingConfig::default(),
            scorer: Box::new(Levenshtein),
        }
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("config", &self.config)
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl Evaluator {
    /// Build an evaluator, validating the config and resolving its scorer.
    pub fn new(config: GradingConfig) -> Result<Self> {
        config.validate_thresholds()?;
        let scorer = config.build_scorer()?;
        Ok(Self { config, scorer })
    }

    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// Grade one transcript. Total over its inputs; never fails.
    pub fn evaluate(&self, spoken: &str, target: &str, confidence: Option<f64>) -> GradeResult {
        let spoken = normalize(spoken);
        let target = normalize(target);
        let confidence = self.resolve_confidence(confidence);
        let similarity = self.scorer.score(&spoken, &target);

        let sim = &self.config.similarity;
        let conf = &self.config.confidence;
        let contains = self.config.containment_counts_as_good && spoken.contains(&target);

        let grade = if spoken == target || similarity >= sim.perfect || confidence >= conf.perfect {
            Grade::Perfect
        } else if contains || similarity >= sim.good || confidence >= conf.good {
            Grade::Good
        } else if similarity >= sim.fair || confidence >= conf.fair {
            Grade::Fair
        } else {
            Grade::Retry
        };

        tracing::debug!(
            spoken = %spoken,
            expected = %target,
            similarity,
            confidence,
            grade = grade.as_str(),
            "graded attempt"
        );

        GradeResult {
            stars: grade.stars(),
            grade,
            similarity,
            confidence,
        }
    }

    /// Grade a recognizer result, keeping engine failures apart from low scores.
    pub fn evaluate_recognition(
        &self,
        recognition: std::result::Result<Recognition, RecognitionError>,
        target: &str,
    ) -> Outcome {
        match recognition {
            Ok(recognition) => match recognition.best() {
                Some((transcript, confidence)) => {
                    Outcome::Graded(self.evaluate(transcript, target, confidence))
                }
                None => Outcome::NoInput {
                    error: RecognitionError::NoTranscript,
                },
            },
            Err(error) => Outcome::NoInput { error },
        }
    }

    fn resolve_confidence(&self, confidence: Option<f64>) -> f64 {
        match confidence {
            Some(value) if !value.is_nan() => value.clamp(0.0, 1.0),
            _ => self.config.absent_confidence.value(),
        }
    }
}
