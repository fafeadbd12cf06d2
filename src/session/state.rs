//! Session state machine.
//!
//! ## Modes
//!
//! - `Pending`: waiting for the player to start. Guesses are rejected.
//! - `Playing`: each guess scores the current round and installs a new one.
//!
//! `play` moves to `Playing` from either mode, restarting any session in
//! progress. The guess that uses up the last round moves back to `Pending`.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::core::{QuizConfig, QuizRng};
use crate::round::Round;

/// Whether a session is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Pending,
    Playing,
}

/// A quiz session: score, remaining rounds, timing, and the current round.
#[derive(Clone, Debug)]
pub struct Session {
    rng: QuizRng,
    rounds: u32,
    mode: Mode,
    score: i32,
    remaining: u32,
    started_at: Option<Instant>,
    finish_time: Duration,
    round: Round,
}

impl Session {
    /// Create a pending session with its first round already drawn.
    ///
    /// Panics if `config.rounds` is zero.
    pub fn new(config: &QuizConfig) -> Self {
        assert!(config.rounds > 0, "Session must have at least 1 round");
        let mut rng = config.rng();
        let round = Round::generate(&mut rng);
        log::debug!("new session with seed {}", rng.seed());

        Self {
            rng,
            rounds: config.rounds,
            mode: Mode::Pending,
            score: 0,
            remaining: config.rounds,
            started_at: None,
            finish_time: Duration::ZERO,
            round,
        }
    }

    /// Start (or restart) a session now.
    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }

    /// Start (or restart) a session at `now`.
    ///
    /// Resets score and remaining rounds. The round on display is kept.
    pub fn play_at(&mut self, now: Instant) {
        if self.mode == Mode::Playing {
            log::info!("restarting session, discarding score {}", self.score);
        }
        self.mode = Mode::Playing;
        self.score = 0;
        self.remaining = self.rounds;
        self.started_at = Some(now);
        log::info!("session started: {} rounds", self.rounds);
    }

    /// Guess the option at `index` now.
    ///
    /// See [`Session::guess_at`].
    pub fn guess(&mut self, index: usize) -> Option<i32> {
        self.guess_at(index, Instant::now())
    }

    /// Guess the option at `index` at time `now`.
    ///
    /// Adds the option's score to the total, draws a new round and counts
    /// down the remaining rounds. The last guess records the finish time and
    /// returns to `Pending`. Returns the score delta, or `None` when no
    /// session is in progress.
    ///
    /// Panics if `index` is not a valid option index.
    pub fn guess_at(&mut self, index: usize, now: Instant) -> Option<i32> {
        let choice = self.round.option(index);
        if self.mode != Mode::Playing {
            log::warn!("ignoring guess {index} while pending");
            return None;
        }

        let foe = self.round.foe;
        let delta = self.round.score(index);
        self.score += delta;
        log::info!("chose {choice} against {foe}, scored {delta} (total {})", self.score);

        if self.remaining == 1 {
            let started = self.started_at.unwrap_or(now);
            self.finish_time = now.saturating_duration_since(started);
            self.mode = Mode::Pending;
            log::info!(
                "session finished: score {} in {:.3}s",
                self.score,
                self.finish_time.as_secs_f64()
            );
        }

        // Drawn even after the final guess so the next session starts fresh.
        self.round = Round::generate(&mut self.rng);
        self.remaining -= 1;

        Some(delta)
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Score of the current (or last finished) session.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Guesses left before the session finishes.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Duration of the last finished session (zero before any finishes).
    #[must_use]
    pub fn finish_time(&self) -> Duration {
        self.finish_time
    }

    /// Round currently on display.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Seed driving this session's rounds.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&QuizConfig::default())
    }
}
