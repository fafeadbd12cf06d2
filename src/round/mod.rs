//! Round generation.
//!
//! A round is one foe plus four distinct options. Generation shuffles the
//! full category pool and swaps candidates into the first option slot
//! until at least one option is effective against the foe, or the pool
//! runs dry.

mod generator;

pub use generator::{Round, OPTION_COUNT};
