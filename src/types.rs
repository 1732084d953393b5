use crate::engines::evaluation::squared_fitness;
use crate::error::{PhrasegenError, Result};
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Code points a random phrase character is drawn from (' ' up to, not including, 'z')
pub const PRINTABLE_RANGE: Range<u8> = 32..122;

/// The phrase the binary evolves toward
pub const DEFAULT_TARGET: &str = "constexpr ::std::ptrdiff_t m_Collision = 0x31C;";

/// Fixed reference string every individual is scored against.
///
/// Only non-empty ASCII targets are accepted, so byte offsets and character
/// offsets are the same thing everywhere a phrase is sliced or compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target(String);

impl Target {
    pub fn new(phrase: impl Into<String>) -> Result<Self> {
        let phrase = phrase.into();
        if phrase.is_empty() {
            return Err(PhrasegenError::InvalidTarget(
                "Target must not be empty".to_string(),
            ));
        }
        if !phrase.is_ascii() {
            return Err(PhrasegenError::InvalidTarget(format!(
                "Target must be ASCII, got {:?}",
                phrase
            )));
        }
        Ok(Self(phrase))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One candidate solution with its cached fitness.
///
/// Fields are private so the fitness can never go stale: the only way to get
/// a new phrase is a new individual scored by [`Individual::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Individual {
    phrase: String,
    fitness: u64, // (matching positions)^2
}

impl Individual {
    /// Build an individual, scoring `phrase` against `target`
    pub fn new(phrase: String, target: &Target) -> Self {
        let fitness = squared_fitness(&phrase, target.as_str());
        Self { phrase, fitness }
    }

    /// Individual with an arbitrary fitness, for selection tests
    #[cfg(test)]
    pub(crate) fn with_fitness(phrase: &str, fitness: u64) -> Self {
        Self {
            phrase: phrase.to_string(),
            fitness,
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn fitness(&self) -> u64 {
        self.fitness
    }

    pub fn len(&self) -> usize {
        self.phrase.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }
}

pub type Population = Vec<Individual>;
