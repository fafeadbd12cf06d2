//! Crate error type.

use thiserror::Error;

/// Errors surfaced by the library.
///
/// The category set is closed, so failures are limited to naming a
/// category that does not exist or loading an unusable config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriviaError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("session must have at least 1 round")]
    ZeroRounds,
}
