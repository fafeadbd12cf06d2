//! Session configuration.
//!
//! The effectiveness rules are fixed; only session length and the
//! random seed are configurable.

use serde::{Deserialize, Serialize};

use super::QuizRng;
use crate::error::TriviaError;

/// Rounds in a session unless configured otherwise.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Configuration for a quiz session.
///
/// Deserializing rejects `rounds == 0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuizConfig")]
pub struct QuizConfig {
    /// Seed for round generation.
    /// `None` draws a fresh seed from OS entropy.
    pub seed: Option<u64>,

    /// Guesses per session (default: 10).
    pub rounds: u32,
}

/// Unvalidated wire form of [`QuizConfig`].
#[derive(Deserialize)]
struct RawQuizConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default = "default_rounds")]
    rounds: u32,
}

fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}

impl TryFrom<RawQuizConfig> for QuizConfig {
    type Error = TriviaError;

    fn try_from(raw: RawQuizConfig) -> Result<Self, Self::Error> {
        if raw.rounds == 0 {
            return Err(TriviaError::ZeroRounds);
        }
        Ok(Self {
            seed: raw.seed,
            rounds: raw.rounds,
        })
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl QuizConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed so rounds are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of guesses per session.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Session must have at least 1 round");
        self.rounds = rounds;
        self
    }

    /// Build the RNG described by this config.
    #[must_use]
    pub fn rng(&self) -> QuizRng {
        match self.seed {
            Some(seed) => QuizRng::new(seed),
            None => QuizRng::from_entropy(),
        }
    }
}
