//! Categories and the effectiveness chart between them.

pub mod category;
pub mod chart;

pub use category::{color_of, Category};
pub use chart::{effectiveness, relations_of, score_of, Effectiveness, Relations};
