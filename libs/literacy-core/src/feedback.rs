//! Feedback messages per grade and per recognizer failure.

use crate::error::RecognitionError;
use crate::grading::{Grade, Outcome};
use serde::{Deserialize, Serialize};

/// Message templates keyed by grade and by failure kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackCatalog {
    pub perfect: String,
    pub good: String,
    pub fair: String,
    pub retry: String,
    pub audio: String,
    pub client: String,
    pub insufficient_permissions: String,
    pub network: String,
    pub network_timeout: String,
    pub no_match: String,
    pub recognizer_busy: String,
    pub server: String,
    pub speech_timeout: String,
    /// Spoken when the recognizer answered with no transcript at all.
    pub no_transcript: String,
    pub unavailable: String,
    pub unknown: String,
}

impl Default for FeedbackCatalog {
    fn default() -> Self {
        Self::spanish()
    }
}

impl FeedbackCatalog {
    /// The app's Spanish messages.
    pub fn spanish() -> Self {
        Self {
            perfect: "¡PERFECTO! 🌟".to_string(),
            good: "¡MUY BIEN! 👏".to_string(),
            fair: "¡BIEN! Inténtalo otra vez 💪".to_string(),
            retry: "Inténtalo de nuevo 🔄".to_string(),
            audio: "Error de audio".to_string(),
            client: "Error del cliente".to_string(),
            insufficient_permissions: "Permisos insuficientes".to_string(),
            network: "Error de red".to_string(),
            network_timeout: "Tiempo de espera agotado".to_string(),
            no_match: "No se encontró coincidencia".to_string(),
            recognizer_busy: "Reconocedor ocupado".to_string(),
            server: "Error del servidor".to_string(),
            speech_timeout: "Tiempo de espera de voz agotado".to_string(),
            no_transcript: "No se pudo reconocer la voz".to_string(),
            unavailable: "Error al iniciar reconocimiento".to_string(),
            unknown: "Error desconocido".to_string(),
        }
    }

    pub fn for_grade(&self, grade: Grade) -> &str {
        match grade {
            Grade::Perfect => &self.perfect,
            Grade::Good => &self.good,
            Grade::Fair => &self.fair,
            Grade::Retry => &self.retry,
        }
    }

    pub fn for_error(&self, error: RecognitionError) -> &str {
        match error {
            RecognitionError::Audio => &self.audio,
            RecognitionError::Client => &self.client,
            RecognitionError::InsufficientPermissions => &self.insufficient_permissions,
            RecognitionError::Network => &self.network,
            RecognitionError::NetworkTimeout => &self.network_timeout,
            RecognitionError::NoMatch => &self.no_match,
            RecognitionError::RecognizerBusy => &self.recognizer_busy,
            RecognitionError::Server => &self.server,
            RecognitionError::SpeechTimeout => &self.speech_timeout,
            RecognitionError::NoTranscript => &self.no_transcript,
            RecognitionError::Unavailable => &self.unavailable,
            RecognitionError::Unknown(_) => &self.unknown,
        }
    }

    pub fn message_for(&self, outcome: &Outcome) -> &str {
        match outcome {
            Outcome::Graded(result) => self.for_grade(result.grade),
            Outcome::NoInput { error } => self.for_error(*error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::evaluate;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn messages_per_grade() {
        let catalog = FeedbackCatalog::spanish();
        assert_eq!(catalog.for_grade(Grade::Perfect), "¡PERFECTO! 🌟");
        assert_eq!(catalog.for_grade(Grade::Retry), "Inténtalo de nuevo 🔄");
    }

    #[test]
    fn no_input_differs_from_retry() {
        let catalog = FeedbackCatalog::default();
        let retry = Outcome::Graded(evaluate("zzz", "a", None));
        let silent = Outcome::NoInput {
            error: RecognitionError::NoMatch,
        };
        assert_ne!(catalog.message_for(&retry), catalog.message_for(&silent));
    }

    #[test]
    fn every_error_kind_has_its_own_message() {
        let catalog = FeedbackCatalog::spanish();
        let expected = [
            (RecognitionError::Audio, "Error de audio"),
            (RecognitionError::Client, "Error del cliente"),
            (RecognitionError::InsufficientPermissions, "Permisos insuficientes"),
            (RecognitionError::Network, "Error de red"),
            (RecognitionError::NetworkTimeout, "Tiempo de espera agotado"),
            (RecognitionError::NoMatch, "No se encontró coincidencia"),
            (RecognitionError::RecognizerBusy, "Reconocedor ocupado"),
            (RecognitionError::Server, "Error del servidor"),
            (RecognitionError::SpeechTimeout, "Tiempo de espera de voz agotado"),
            (RecognitionError::NoTranscript, "No se pudo reconocer la voz"),
            (RecognitionError::Unavailable, "Error al iniciar reconocimiento"),
            (RecognitionError::Unknown(99), "Error desconocido"),
        ];

        for (error, message) in expected {
            assert_eq!(catalog.for_error(error), message, "{error:?}");
        }

        let distinct: HashSet<_> = expected.iter().map(|(e, _)| catalog.for_error(*e)).collect();
        assert_eq!(distinct.len(), expected.len());
    }

    #[test]
    fn platform_codes_map_to_their_messages() {
        let catalog = FeedbackCatalog::spanish();
        assert_eq!(
            catalog.for_error(RecognitionError::from_code(1)),
            "Tiempo de espera agotado"
        );
        assert_eq!(catalog.for_error(RecognitionError::from_code(6)), "Tiempo de espera de voz agotado");
    }
}
