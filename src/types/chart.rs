//! Type effectiveness chart.
//!
//! Each category carries a [`Relations`] record describing how it fares
//! when chosen as the answer against a foe. Scoring checks the record in a
//! fixed precedence: immune, then weak, then strong, then neutral.

use serde::{Deserialize, Serialize};

use super::category::Category;
use Category::*;

/// How a category fares against others when picked as the answer.
///
/// The three lists are pairwise disjoint for every category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relations {
    /// Foes this category has no effect on.
    pub immune_against: &'static [Category],
    /// Foes this category is weak against.
    pub weak_against: &'static [Category],
    /// Foes this category is strong against.
    pub strong_against: &'static [Category],
}

impl Relations {
    const fn new(
        immune_against: &'static [Category],
        weak_against: &'static [Category],
        strong_against: &'static [Category],
    ) -> Self {
        Self {
            immune_against,
            weak_against,
            strong_against,
        }
    }
}

/// Relation record for `category` as an answer.
#[must_use]
pub const fn relations_of(category: Category) -> Relations {
    match category {
        Normal => Relations::new(&[Ghost], &[Rock, Steel], &[]),
        Fire => Relations::new(&[], &[Fire, Water, Rock, Dragon], &[Grass, Ice, Bug, Steel]),
        Water => Relations::new(&[], &[Water, Grass, Dragon], &[Fire, Ground, Rock]),
        Electric => Relations::new(&[Ground], &[Electric, Grass, Dragon], &[Water, Flying]),
        Grass => Relations::new(
            &[],
            &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],
            &[Water, Ground, Rock],
        ),
        Ice => Relations::new(&[], &[Fire, Water, Ice, Steel], &[Grass, Ground, Flying, Dragon]),
        Fighting => Relations::new(
            &[Ghost],
            &[Poison, Flying, Psychic, Bug, Fairy],
            &[Normal, Ice, Rock, Dark, Steel],
        ),
        Poison => Relations::new(&[Steel], &[Poison, Ground, Rock, Ghost], &[Grass, Fairy]),
        Ground => Relations::new(&[Flying], &[Grass, Bug], &[Fire, Electric, Poison, Rock, Steel]),
        Flying => Relations::new(&[], &[Electric, Rock, Steel], &[Grass, Fighting, Bug]),
        Psychic => Relations::new(&[Dark], &[Psychic, Steel], &[Fighting, Poison]),
        Bug => Relations::new(
            &[],
            &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],
            &[Grass, Psychic, Dark],
        ),
        Rock => Relations::new(&[], &[Fighting, Ground, Steel], &[Fire, Ice, Flying, Bug]),
        Ghost => Relations::new(&[Normal], &[Dark], &[Psychic, Ghost]),
        Dragon => Relations::new(&[Fairy], &[Steel], &[Dragon]),
        Dark => Relations::new(&[], &[Fighting, Dark, Fairy], &[Psychic, Ghost]),
        Steel => Relations::new(&[], &[Fire, Water, Electric, Steel], &[Ice, Rock, Fairy]),
        Fairy => Relations::new(&[], &[Fire, Poison, Steel], &[Fighting, Dragon, Dark]),
    }
}

/// Outcome of picking an option against a foe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effectiveness {
    /// The option has no effect on the foe.
    Immune,
    /// The option backfires.
    Weak,
    /// Neither strong nor weak.
    Neutral,
    /// The option is effective.
    Strong,
}

impl Effectiveness {
    /// Points awarded for this outcome.
    #[must_use]
    pub const fn points(self) -> i32 {
        match self {
            Effectiveness::Immune => -2,
            Effectiveness::Weak => -1,
            Effectiveness::Neutral => 0,
            Effectiveness::Strong => 1,
        }
    }
}

/// Evaluate `option` against `foe`.
///
/// Precedence is immune, weak, strong, neutral: the first list containing
/// the foe decides.
#[must_use]
pub fn effectiveness(foe: Category, option: Category) -> Effectiveness {
    let relations = relations_of(option);
    if relations.immune_against.contains(&foe) {
        Effectiveness::Immune
    } else if relations.weak_against.contains(&foe) {
        Effectiveness::Weak
    } else if relations.strong_against.contains(&foe) {
        Effectiveness::Strong
    } else {
        Effectiveness::Neutral
    }
}

/// Points for picking `option` against `foe`: one of -2, -1, 0 or 1.
#[must_use]
pub fn score_of(foe: Category, option: Category) -> i32 {
    effectiveness(foe, option).points()
}
