//! Voice practice session: prompt, listen, grade, give feedback.

use crate::error::RecognitionError;
use crate::feedback::FeedbackCatalog;
use crate::grading::{normalize, Evaluator, Outcome};
use crate::speech::{SpeechRecognizer, SpeechSettings, SpeechSynthesizer, Utterance};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One attempt within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub number: u32,
    pub outcome: Outcome,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Drives repeated spoken attempts at one target with injected speech engines.
pub struct VoiceSession<R, S> {
    recognizer: R,
    synthesizer: S,
    evaluator: Evaluator,
    feedback: FeedbackCatalog,
    settings: SpeechSettings,
    target: String,
    attempts: Vec<AttemptRecord>,
}

impl<R, S> VoiceSession<R, S>
where
    R: SpeechRecognizer,
    S: SpeechSynthesizer,
{
    pub fn new(recognizer: R, synthesizer: S, evaluator: Evaluator) -> Self {
        Self {
            recognizer,
            synthesizer,
            evaluator,
            feedback: FeedbackCatalog::default(),
            settings: SpeechSettings::default(),
            target: String::new(),
            attempts: Vec::new(),
        }
    }

    pub fn with_feedback(mut self, feedback: FeedbackCatalog) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn with_settings(mut self, settings: SpeechSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Switch to a new target and forget previous attempts.
    pub fn set_target(&mut self, target: &str) {
        self.target = normalize(target);
        self.attempts.clear();
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Highest star count reached on the current target.
    pub fn best_stars(&self) -> u8 {
        self.attempts
            .iter()
            .map(|a| a.outcome.stars())
            .max()
            .unwrap_or(0)
    }

    /// Whether some attempt was good enough to move on.
    pub fn is_complete(&self) -> bool {
        self.attempts
            .iter()
            .any(|a| a.outcome.grade().is_some_and(|g| g.ends_attempt()))
    }

    /// Read the target aloud: letters slower than words.
    pub fn prompt(&mut self) {
        let utterance = if self.target.chars().count() == 1 {
            Utterance::letter(self.target.clone())
        } else {
            Utterance::word(self.target.clone())
        };
        self.say(&utterance);
    }

    /// Read the target one syllable at a time.
    pub fn prompt_slow(&mut self) {
        for utterance in Utterance::syllables(&self.target) {
            self.say(&utterance);
        }
    }

    /// Listen once, grade, speak the feedback and record the attempt.
    pub fn attempt(&mut self, now: DateTime<Utc>) -> Outcome {
        let outcome = if self.recognizer.is_available() {
            let recognition = self.recognizer.recognize(&self.target, &self.settings);
            if let Err(error) = &recognition {
                tracing::warn!(word = %self.target, %error, "speech recognition failed");
            }
            self.evaluator.evaluate_recognition(recognition, &self.target)
        } else {
            tracing::warn!("speech recognizer unavailable");
            Outcome::NoInput {
                error: RecognitionError::Unavailable,
            }
        };

        if outcome.grade().is_some_and(|g| g.ends_attempt()) {
            self.recognizer.stop();
        }

        let message = self.feedback.message_for(&outcome).to_string();
        self.say(&Utterance::word(message.clone()));

        let number = u32::try_from(self.attempts.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1);
        tracing::debug!(number, stars = outcome.stars(), "attempt recorded");
        self.attempts.push(AttemptRecord {
            number,
            outcome,
            message,
            at: now,
        });

        outcome
    }

    /// Stop both engines.
    pub fn shutdown(&mut self) {
        self.recognizer.stop();
        self.synthesizer.stop();
    }

    pub fn into_parts(self) -> (R, S) {
        (self.recognizer, self.synthesizer)
    }

    fn say(&mut self, utterance: &Utterance) {
        if self.synthesizer.is_available() {
            self.synthesizer.speak(utterance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::Grade;
    use crate::speech::{Recognition, LETTER_RATE, WORD_RATE};
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedRecognizer {
        available: bool,
        script: VecDeque<Result<Recognition, RecognitionError>>,
        stops: u32,
    }

    impl ScriptedRecognizer {
        fn with(script: Vec<Result<Recognition, RecognitionError>>) -> Self {
            Self {
                available: true,
                script: script.into(),
                stops: 0,
            }
        }
    }

    impl SpeechRecognizer for ScriptedRecognizer {
        fn is_available(&self) -> bool {
            self.available
        }

        fn recognize(
            &mut self,
            _target: &str,
            _settings: &SpeechSettings,
        ) -> Result<Recognition, RecognitionError> {
            self.script.pop_front().unwrap_or(Err(RecognitionError::NoMatch))
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    #[derive(Default)]
    struct RecordingSynthesizer {
        spoken: Vec<Utterance>,
    }

    impl SpeechSynthesizer for RecordingSynthesizer {
        fn is_available(&self) -> bool {
            true
        }

        fn speak(&mut self, utterance: &Utterance) {
            self.spoken.push(utterance.clone());
        }

        fn stop(&mut self) {}
    }

    fn heard(text: &str, confidence: f32) -> Result<Recognition, RecognitionError> {
        Ok(Recognition::new(vec![text.to_string()], vec![confidence]))
    }

    fn session(
        script: Vec<Result<Recognition, RecognitionError>>,
    ) -> VoiceSession<ScriptedRecognizer, RecordingSynthesizer> {
        let mut session = VoiceSession::new(
            ScriptedRecognizer::with(script),
            RecordingSynthesizer::default(),
            Evaluator::default(),
        );
        session.set_target("Casa");
        session
    }

    #[test]
    fn retries_until_good_enough() {
        let mut session = session(vec![heard("pato", 0.1), heard("cosa", 0.1)]);

        let first = session.attempt(Utc::now());
        assert_eq!(first.grade(), Some(Grade::Retry));
        assert!(!session.is_complete());

        let second = session.attempt(Utc::now());
        assert_eq!(second.grade(), Some(Grade::Good));
        assert!(session.is_complete());
        assert_eq!(session.best_stars(), 2);
        let numbers: Vec<u32> = session.attempts().iter().map(|a| a.number).collect();
        assert_eq!(numbers, vec![1, 2]);

        let (recognizer, synthesizer) = session.into_parts();
        assert_eq!(recognizer.stops, 1);
        let messages: Vec<_> = synthesizer.spoken.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(messages, vec!["Inténtalo de nuevo 🔄", "¡MUY BIEN! 👏"]);
    }

    #[test]
    fn recognizer_failure_is_no_input() {
        let mut session = session(vec![Err(RecognitionError::NetworkTimeout)]);
        let outcome = session.attempt(Utc::now());
        assert_eq!(
            outcome,
            Outcome::NoInput {
                error: RecognitionError::NetworkTimeout
            }
        );
        assert_eq!(session.attempts()[0].message, "Tiempo de espera agotado");
    }

    #[test]
    fn unavailable_recognizer_is_not_called() {
        let mut recognizer = ScriptedRecognizer::with(vec![heard("casa", 1.0)]);
        recognizer.available = false;
        let mut session =
            VoiceSession::new(recognizer, RecordingSynthesizer::default(), Evaluator::default());
        session.set_target("casa");

        let outcome = session.attempt(Utc::now());
        assert_eq!(outcome.stars(), 0);
        assert_eq!(session.into_parts().0.script.len(), 1);
    }

    #[test]
    fn prompts_use_letter_and_word_rates() {
        let mut session = session(vec![]);
        session.prompt();
        session.set_target("e");
        session.prompt();
        session.set_target("pelota");
        session.prompt_slow();

        let spoken = session.into_parts().1.spoken;
        let pairs: Vec<_> = spoken.iter().map(|u| (u.text.as_str(), u.rate)).collect();
        assert_eq!(pairs[0], ("casa", WORD_RATE));
        assert_eq!(pairs[1], ("e", LETTER_RATE));
        assert_eq!(spoken.len(), 5);
    }

    #[test]
    fn new_target_clears_attempts() {
        let mut session = session(vec![heard("casa", 0.9)]);
        session.attempt(Utc::now());
        assert_eq!(session.attempts().len(), 1);

        session.set_target("oso");
        assert!(session.attempts().is_empty());
        assert_eq!(session.best_stars(), 0);
    }
}
