//! # type-trivia
//!
//! A type-effectiveness trivia game: the player is shown a foe category and
//! picks, from four options, the one that is most effective against it.
//!
//! ## Scoring
//!
//! | Option vs foe | Points |
//! |---------------|--------|
//! | immune        | -2     |
//! | weak          | -1     |
//! | neutral       | 0      |
//! | strong        | +1     |
//!
//! ## Modules
//!
//! - `core`: Deterministic RNG and session configuration
//! - `types`: The 18 categories, their colors, and the effectiveness chart
//! - `round`: Round generation with at least one effective option
//! - `session`: Session lifecycle, views, and key bindings
//!
//! ## Example
//!
//! ```
//! use type_trivia::{Mode, QuizConfig, Session};
//!
//! let mut session = Session::new(&QuizConfig::new().with_seed(42).with_rounds(3));
//! session.play();
//! for _ in 0..3 {
//!     session.guess(0);
//! }
//! assert_eq!(session.mode(), Mode::Pending);
//! ```

pub mod core;
pub mod error;
pub mod round;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use crate::core::{QuizConfig, QuizRng, DEFAULT_ROUNDS};
pub use crate::error::TriviaError;
pub use crate::round::{Round, OPTION_COUNT};
pub use crate::session::{Command, Key, Mode, Session, SessionView, Swatch};
pub use crate::types::{color_of, effectiveness, relations_of, score_of, Category, Effectiveness, Relations};
