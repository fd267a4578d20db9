//! In-memory learner progress.
//!
//! Persistence belongs to the host app; this tracker holds the rules for
//! stars, mastery and level unlocks so any store can be layered on top.

use crate::error::ProgressError;
use crate::grading::GradeResult;
use crate::letters::{self, LEVEL_CONSONANTS, LEVEL_VOWELS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated stars at which a letter counts as mastered.
pub const MASTERY_STARS: u32 = 3;
/// Mastered vowels needed to unlock the consonant level.
pub const VOWELS_TO_UNLOCK: usize = 3;
/// Mastered consonants needed to unlock the level after consonants.
pub const CONSONANTS_TO_UNLOCK: usize = 10;

const LEVEL_SYLLABLES: u8 = 3;

/// Progress for a single letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterProgress {
    pub letter: String,
    pub stars: u32,
    pub attempts: u32,
    pub successes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_practiced: Option<DateTime<Utc>>,
    pub mastered: bool,
}

impl LetterProgress {
    pub fn new(letter: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            ..Self::default()
        }
    }
}

/// Learner-wide progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub total_stars: u32,
    pub total_time_secs: u64,
    pub unlocked_levels: Vec<u8>,
    pub session_start: DateTime<Utc>,
}

impl UserProgress {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            total_stars: 0,
            total_time_secs: 0,
            unlocked_levels: vec![LEVEL_VOWELS],
            session_start: now,
        }
    }

    pub fn is_unlocked(&self, level: u8) -> bool {
        self.unlocked_levels.contains(&level)
    }
}

/// Snapshot of all progress, for backup or a parent dashboard.
#[derive(Debug, Clone, Serialize)]
struct ProgressExport<'a> {
    export_date: DateTime<Utc>,
    user_progress: &'a UserProgress,
    letter_progress: Vec<&'a LetterProgress>,
    mastered_count: usize,
    accuracy_rate: u32,
}

/// Tracks stars, attempts and unlocks for every catalog letter.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    letters: BTreeMap<String, LetterProgress>,
    user: UserProgress,
}

impl ProgressTracker {
    /// Fresh progress for every letter in the catalog.
    pub fn new(now: DateTime<Utc>) -> Self {
        let letters = letters::LETTERS
            .iter()
            .map(|l| (l.letter.to_string(), LetterProgress::new(l.letter)))
            .collect();
        Self {
            letters,
            user: UserProgress::new(now),
        }
    }

    pub fn user(&self) -> &UserProgress {
        &self.user
    }

    pub fn letter(&self, letter: &str) -> Option<&LetterProgress> {
        self.letters.get(&key(letter))
    }

    pub fn all(&self) -> impl Iterator<Item = &LetterProgress> {
        self.letters.values()
    }

    pub fn mastered(&self) -> impl Iterator<Item = &LetterProgress> {
        self.letters.values().filter(|p| p.mastered)
    }

    pub fn mastered_count(&self) -> usize {
        self.mastered().count()
    }

    /// Count an attempt, successful or not.
    pub fn add_attempt(&mut self, letter: &str) -> Result<(), ProgressError> {
        self.entry(letter)?.attempts += 1;
        Ok(())
    }

    /// Credit a successful attempt with `stars`, then re-check mastery and unlocks.
    pub fn add_stars(
        &mut self,
        letter: &str,
        stars: u32,
        now: DateTime<Utc>,
    ) -> Result<(), ProgressError> {
        let progress = self.entry(letter)?;
        progress.stars += stars;
        progress.successes += 1;
        progress.last_practiced = Some(now);

        if !progress.mastered && progress.stars >= MASTERY_STARS {
            progress.mastered = true;
            tracing::info!(letter = %progress.letter, "letter mastered");
        }

        self.user.total_stars += stars;
        self.check_level_unlock();
        Ok(())
    }

    /// Record a graded attempt: always an attempt, a success when it earned stars.
    pub fn record(
        &mut self,
        letter: &str,
        result: &GradeResult,
        now: DateTime<Utc>,
    ) -> Result<(), ProgressError> {
        self.add_attempt(letter)?;
        if result.stars > 0 {
            self.add_stars(letter, u32::from(result.stars), now)?;
        }
        Ok(())
    }

    pub fn update_total_time(&mut self, secs: u64) {
        self.user.total_time_secs = secs;
    }

    /// Share of attempts that earned stars, as an integer percentage.
    pub fn accuracy_rate(&self) -> u32 {
        let (attempts, successes) = self
            .letters
            .values()
            .fold((0u64, 0u64), |(a, s), p| (a + u64::from(p.attempts), s + u64::from(p.successes)));

        if attempts == 0 {
            return 0;
        }
        u32::try_from(successes * 100 / attempts).unwrap_or(u32::MAX)
    }

    /// Drop all progress and start over.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        *self = Self::new(now);
    }

    /// Serialize everything to a JSON document.
    pub fn export(&self, now: DateTime<Utc>) -> Result<serde_json::Value, ProgressError> {
        let export = ProgressExport {
            export_date: now,
            user_progress: &self.user,
            letter_progress: self.letters.values().collect(),
            mastered_count: self.mastered_count(),
            accuracy_rate: self.accuracy_rate(),
        };
        serde_json::to_value(&export).map_err(|e| ProgressError::Export(e.to_string()))
    }

    fn entry(&mut self, letter: &str) -> Result<&mut LetterProgress, ProgressError> {
        self.letters
            .get_mut(&key(letter))
            .ok_or_else(|| ProgressError::UnknownLetter(letter.to_string()))
    }

    fn check_level_unlock(&mut self) {
        let (vowels, consonants) = self.mastered().fold((0, 0), |(v, c), p| {
            match letters::letter(&p.letter).map(|l| l.level) {
                Some(LEVEL_VOWELS) => (v + 1, c),
                Some(LEVEL_CONSONANTS) => (v, c + 1),
                _ => (v, c),
            }
        });

        if vowels >= VOWELS_TO_UNLOCK {
            self.unlock(LEVEL_CONSONANTS);
        }
        if consonants >= CONSONANTS_TO_UNLOCK {
            self.unlock(LEVEL_SYLLABLES);
        }
    }

    fn unlock(&mut self, level: u8) {
        if !self.user.is_unlocked(level) {
            self.user.unlocked_levels.push(level);
            tracing::info!(level, "level unlocked");
        }
    }
}

fn key(letter: &str) -> String {
    letter.trim().to_uppercase()
}
