//! Core logic for the ABC Aprende literacy app.
//!
//! Provides:
//! - Similarity scoring for recognizer transcripts (Levenshtein, vowel-aware)
//! - Graded evaluation of spoken attempts (0-3 stars)
//! - Feedback message table per grade
//! - Speech collaborator interfaces and a voice practice session
//! - Letter catalog and in-memory learner progress

pub mod config;
pub mod error;
pub mod feedback;
pub mod grading;
pub mod letters;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod speech;
pub mod syllables;

pub use config::{AbsentConfidence, GradingConfig, Thresholds};
pub use error::{ConfigError, ProgressError, RecognitionError, Result};
pub use feedback::FeedbackCatalog;
pub use grading::{evaluate, normalize, Evaluator, Grade, GradeResult, Outcome};
pub use letters::{Letter, LEVEL_CONSONANTS, LEVEL_VOWELS};
pub use progress::{LetterProgress, ProgressTracker, UserProgress};
pub use scoring::{get_scorer, levenshtein_distance, similarity, SimilarityScorer};
pub use session::{AttemptRecord, VoiceSession};
pub use speech::{Recognition, SpeechRecognizer, SpeechSettings, SpeechSynthesizer, Utterance};
pub use syllables::split_into_syllables;
