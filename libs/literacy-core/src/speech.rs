//! Interfaces to the platform speech engines.
//!
//! The engines themselves live outside this crate; a controller receives
//! them as trait objects or generics and this crate only consumes their
//! output.

use crate::error::RecognitionError;
use crate::syllables::split_into_syllables;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Speaking rate for a single letter.
pub const LETTER_RATE: f32 = 0.8;
/// Speaking rate for a word or a feedback message.
pub const WORD_RATE: f32 = 0.9;
/// Speaking rate for syllable-by-syllable reading.
pub const SLOW_RATE: f32 = 0.6;

/// Transcript alternatives returned by a recognizer, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    pub alternatives: Vec<String>,
    /// Per-alternative confidence; engines may omit some or all of them.
    pub confidences: Vec<f32>,
}

impl Recognition {
    pub fn new(alternatives: Vec<String>, confidences: Vec<f32>) -> Self {
        Self {
            alternatives,
            confidences,
        }
    }

    /// The top alternative and its confidence, if any.
    pub fn best(&self) -> Option<(&str, Option<f64>)> {
        let transcript = self.alternatives.first()?;
        let confidence = self.confidences.first().map(|&c| f64::from(c));
        Some((transcript.as_str(), confidence))
    }
}

/// A request to the speech synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub id: Uuid,
    pub text: String,
    pub rate: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>, rate: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            rate,
        }
    }

    pub fn letter(letter: impl Into<String>) -> Self {
        Self::new(letter, LETTER_RATE)
    }

    pub fn word(word: impl Into<String>) -> Self {
        Self::new(word, WORD_RATE)
    }

    /// One slow utterance per syllable of `word`.
    pub fn syllables(word: &str) -> Vec<Self> {
        split_into_syllables(word)
            .into_iter()
            .map(|syllable| Self::new(syllable, SLOW_RATE))
            .collect()
    }
}

/// Voice and language settings shared by both engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    pub language: String,
    /// Slightly raised pitch reads friendlier to children.
    pub pitch: f32,
    pub rate: f32,
    pub max_results: u32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            language: "es-ES".to_string(),
            pitch: 1.2,
            rate: WORD_RATE,
            max_results: 10,
        }
    }
}

impl SpeechSettings {
    /// Spanish locales the app offers.
    pub const SUPPORTED_LANGUAGES: [&'static str; 7] =
        ["es-ES", "es-MX", "es-AR", "es-CO", "es-CL", "es-PE", "es-VE"];

    pub fn is_supported(language: &str) -> bool {
        Self::SUPPORTED_LANGUAGES.contains(&language)
    }
}

/// A platform speech recognizer.
pub trait SpeechRecognizer {
    fn is_available(&self) -> bool;

    /// Listen for one attempt at `target`.
    fn recognize(
        &mut self,
        target: &str,
        settings: &SpeechSettings,
    ) -> Result<Recognition, RecognitionError>;

    fn stop(&mut self);
}

/// A platform text-to-speech engine.
pub trait SpeechSynthesizer {
    fn is_available(&self) -> bool;

    fn speak(&mut self, utterance: &Utterance);

    fn stop(&mut self);
}
