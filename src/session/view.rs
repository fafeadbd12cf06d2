//! Read-only snapshot for presentation layers.

use serde::Serialize;

use super::state::{Mode, Session};
use crate::types::Category;

/// A category with its display label and color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub category: Category,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<Category> for Swatch {
    fn from(category: Category) -> Self {
        Self {
            category,
            label: category.name(),
            color: category.color(),
        }
    }
}

/// Everything a view needs to render one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub mode: Mode,
    pub score: i32,
    pub remaining: u32,
    /// Finish time of the last completed session in milliseconds.
    pub finish_time_ms: u64,
    pub foe: Swatch,
    pub options: Vec<Swatch>,
}

impl Session {
    /// Snapshot the current state for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let round = self.round();
        SessionView {
            mode: self.mode(),
            score: self.score(),
            remaining: self.remaining(),
            finish_time_ms: u64::try_from(self.finish_time().as_millis()).unwrap_or(u64::MAX),
            foe: round.foe.into(),
            options: round.options.iter().copied().map(Swatch::from).collect(),
        }
    }
}
