//! Core plumbing: deterministic RNG and session configuration.

pub mod config;
pub mod rng;

pub use config::{QuizConfig, DEFAULT_ROUNDS};
pub use rng::QuizRng;
