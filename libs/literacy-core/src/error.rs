//! Error types for literacy-core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building or validating a grading configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("{kind} thresholds must strictly descend from perfect to fair")]
    NotDescending { kind: &'static str },

    #[error("unknown scorer: {0}")]
    UnknownScorer(String),

    #[error("invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },
}

/// Failures reported by a speech recognition engine.
///
/// These never reach the evaluator; they surface as a "no input" outcome
/// that is kept apart from a low-similarity retry.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionError {
    #[error("audio error")]
    Audio,

    #[error("client error")]
    Client,

    #[error("insufficient permissions")]
    InsufficientPermissions,

    #[error("network error")]
    Network,

    #[error("network timeout")]
    NetworkTimeout,

    #[error("no match")]
    NoMatch,

    #[error("recognizer busy")]
    RecognizerBusy,

    #[error("server error")]
    Server,

    #[error("speech timeout")]
    SpeechTimeout,

    #[error("recognizer returned no transcript")]
    NoTranscript,

    #[error("speech recognition unavailable")]
    Unavailable,

    #[error("unknown recognizer error {0}")]
    Unknown(i32),
}

impl RecognitionError {
    /// Map a platform recognizer error code (Android `SpeechRecognizer.ERROR_*`).
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::NetworkTimeout,
            2 => Self::Network,
            3 => Self::Audio,
            4 => Self::Server,
            5 => Self::Client,
            6 => Self::SpeechTimeout,
            7 => Self::NoMatch,
            8 => Self::RecognizerBusy,
            9 => Self::InsufficientPermissions,
            other => Self::Unknown(other),
        }
    }
}

/// Errors from the progress tracker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("unknown letter: {0}")]
    UnknownLetter(String),

    #[error("failed to serialize progress: {0}")]
    Export(String),
}
