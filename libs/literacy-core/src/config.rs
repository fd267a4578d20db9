//! Grading configuration.
//!
//! Defaults reproduce the app's tiers. Every field can be overridden with a
//! `LITERACY_*` environment variable:
//!
//! | Variable                        | Field                        |
//! |---------------------------------|------------------------------|
//! | `LITERACY_SCORER`               | `scorer`                     |
//! | `LITERACY_ABSENT_CONFIDENCE`    | `absent_confidence`          |
//! | `LITERACY_CONTAINMENT`          | `containment_counts_as_good` |
//! | `LITERACY_SIMILARITY_PERFECT`   | `similarity.perfect`         |
//! | `LITERACY_SIMILARITY_GOOD`      | `similarity.good`            |
//! | `LITERACY_SIMILARITY_FAIR`      | `similarity.fair`            |
//! | `LITERACY_CONFIDENCE_PERFECT`   | `confidence.perfect`         |
//! | `LITERACY_CONFIDENCE_GOOD`      | `confidence.good`            |
//! | `LITERACY_CONFIDENCE_FAIR`      | `confidence.fair`            |

use crate::error::{ConfigError, Result};
use crate::scoring::{get_scorer, SimilarityScorer};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "LITERACY_";

/// How to treat an attempt whose recognizer reported no confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentConfidence {
    /// Treat as 0.0; only the transcript can earn stars.
    Reject,
    /// Treat as 0.5, which alone is enough for one star.
    Neutral,
}

impl Default for AbsentConfidence {
    fn default() -> Self {
        Self::Reject
    }
}

impl AbsentConfidence {
    /// The confidence value substituted for a missing score.
    pub fn value(self) -> f64 {
        match self {
            Self::Reject => 0.0,
            Self::Neutral => 0.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Neutral => "neutral",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reject" => Some(Self::Reject),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

/// Lower bounds for the PERFECT, GOOD and FAIR tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub perfect: f64,
    pub good: f64,
    pub fair: f64,
}

impl Thresholds {
    /// Default similarity tiers.
    pub const SIMILARITY: Self = Self {
        perfect: 0.85,
        good: 0.7,
        fair: 0.5,
    };

    /// Default confidence tiers.
    pub const CONFIDENCE: Self = Self {
        perfect: 0.8,
        good: 0.65,
        fair: 0.5,
    };

    fn validate(&self, kind: &'static str, names: [&'static str; 3]) -> Result<()> {
        for (name, value) in names.into_iter().zip([self.perfect, self.good, self.fair]) {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { name, value });
            }
        }
        if !(self.perfect > self.good && self.good > self.fair) {
            return Err(ConfigError::NotDescending { kind });
        }
        Ok(())
    }
}

/// Configuration for grading spoken attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingConfig {
    pub similarity: Thresholds,
    pub confidence: Thresholds,
    pub absent_confidence: AbsentConfidence,
    /// Whether a transcript containing the target earns at least GOOD.
    pub containment_counts_as_good: bool,
    /// Scorer name, see [`get_scorer`].
    pub scorer: String,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            similarity: Thresholds::SIMILARITY,
            confidence: Thresholds::CONFIDENCE,
            absent_confidence: AbsentConfidence::default(),
            containment_counts_as_good: true,
            scorer: "levenshtein".to_string(),
        }
    }
}

impl GradingConfig {
    /// Load a `.env` file if present, then read overrides from the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Read overrides from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from defaults plus whatever `lookup` returns for each key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |suffix: &str| {
            let key = format!("{ENV_PREFIX}{suffix}");
            lookup(&key).map(|value| (key, value.trim().to_string()))
        };

        let mut config = Self::default();

        if let Some((_, value)) = get("SCORER") {
            config.scorer = value;
        }
        if let Some((key, value)) = get("ABSENT_CONFIDENCE") {
            config.absent_confidence = AbsentConfidence::from_str(&value)
                .ok_or(ConfigError::InvalidEnv { key, value })?;
        }
        if let Some((key, value)) = get("CONTAINMENT") {
            config.containment_counts_as_good = value
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { key, value })?;
        }

        let fields: [(&str, &mut f64); 6] = [
            ("SIMILARITY_PERFECT", &mut config.similarity.perfect),
            ("SIMILARITY_GOOD", &mut config.similarity.good),
            ("SIMILARITY_FAIR", &mut config.similarity.fair),
            ("CONFIDENCE_PERFECT", &mut config.confidence.perfect),
            ("CONFIDENCE_GOOD", &mut config.confidence.good),
            ("CONFIDENCE_FAIR", &mut config.confidence.fair),
        ];
        for (suffix, field) in fields {
            if let Some((key, value)) = get(suffix) {
                *field = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnv { key, value })?;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check ranges, tier ordering and scorer name.
    pub fn validate(&self) -> Result<()> {
        self.validate_thresholds()?;
        self.build_scorer().map(drop)
    }

    /// Resolve the configured scorer by name.
    pub fn build_scorer(&self) -> Result<Box<dyn SimilarityScorer>> {
        get_scorer(&self.scorer).ok_or_else(|| ConfigError::UnknownScorer(self.scorer.clone()))
    }

    /// Check ranges and tier ordering of both threshold sets.
    pub fn validate_thresholds(&self) -> Result<()> {
        self.similarity.validate(
            "similarity",
            ["similarity.perfect", "similarity.good", "similarity.fair"],
        )?;
        self.confidence.validate(
            "confidence",
            ["confidence.perfect", "confidence.good", "confidence.fair"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = GradingConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.absent_confidence, AbsentConfidence::Reject);
        assert_eq!(config.similarity.perfect, 0.85);
        assert_eq!(config.confidence.good, 0.65);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = GradingConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GradingConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = GradingConfig::from_lookup(lookup(&[
            ("LITERACY_SCORER", "vowel"),
            ("LITERACY_ABSENT_CONFIDENCE", "neutral"),
            ("LITERACY_CONTAINMENT", "false"),
            ("LITERACY_SIMILARITY_FAIR", "0.4"),
        ]))
        .unwrap();

        assert_eq!(config.scorer, "vowel");
        assert_eq!(config.absent_confidence, AbsentConfidence::Neutral);
        assert!(!config.containment_counts_as_good);
        assert_eq!(config.similarity.fair, 0.4);
    }

    #[test]
    fn rejects_unparseable_values() {
        let err = GradingConfig::from_lookup(lookup(&[("LITERACY_CONFIDENCE_GOOD", "high")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnv {
                key: "LITERACY_CONFIDENCE_GOOD".to_string(),
                value: "high".to_string(),
            }
        );
    }

    #[test]
    fn rejects_out_of_range() {
        let mut config = GradingConfig::default();
        config.confidence.perfect = 1.2;
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                name: "confidence.perfect",
                value: 1.2
            })
        );
    }

    #[test]
    fn rejects_non_descending_tiers() {
        let mut config = GradingConfig::default();
        config.similarity.good = 0.9;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotDescending { kind: "similarity" })
        );
    }

    #[test]
    fn absent_confidence_names() {
        for policy in [AbsentConfidence::Reject, AbsentConfidence::Neutral] {
            assert_eq!(AbsentConfidence::from_str(policy.as_str()), Some(policy));
        }
        assert_eq!(AbsentConfidence::from_str("maybe"), None);
    }

    #[test]
    fn rejects_unknown_absent_confidence() {
        let err = GradingConfig::from_lookup(lookup(&[("LITERACY_ABSENT_CONFIDENCE", "maybe")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnv {
                key: "LITERACY_ABSENT_CONFIDENCE".to_string(),
                value: "maybe".to_string(),
            }
        );
    }

    #[test]
    fn rejects_unknown_scorer() {
        let err = GradingConfig::from_lookup(lookup(&[("LITERACY_SCORER", "soundex")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownScorer("soundex".to_string()));
    }
}
