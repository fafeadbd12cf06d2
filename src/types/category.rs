//! The 18 fixed categories and their display colors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::QuizRng;
use crate::error::TriviaError;

/// One of the 18 fixed type categories.
///
/// Used both for the foe and for the answer options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 18;

    /// Every category, in table order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Normal,
        Category::Fire,
        Category::Water,
        Category::Electric,
        Category::Grass,
        Category::Ice,
        Category::Fighting,
        Category::Poison,
        Category::Ground,
        Category::Flying,
        Category::Psychic,
        Category::Bug,
        Category::Rock,
        Category::Ghost,
        Category::Dragon,
        Category::Dark,
        Category::Steel,
        Category::Fairy,
    ];

    /// Position in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Normal => "Normal",
            Category::Fire => "Fire",
            Category::Water => "Water",
            Category::Electric => "Electric",
            Category::Grass => "Grass",
            Category::Ice => "Ice",
            Category::Fighting => "Fighting",
            Category::Poison => "Poison",
            Category::Ground => "Ground",
            Category::Flying => "Flying",
            Category::Psychic => "Psychic",
            Category::Bug => "Bug",
            Category::Rock => "Rock",
            Category::Ghost => "Ghost",
            Category::Dragon => "Dragon",
            Category::Dark => "Dark",
            Category::Steel => "Steel",
            Category::Fairy => "Fairy",
        }
    }

    /// Display color as a 3-digit CSS hex string, e.g. `"#f42"`.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Category::Normal => "#aa9",
            Category::Fire => "#f42",
            Category::Water => "#39f",
            Category::Electric => "#fc3",
            Category::Grass => "#7c5",
            Category::Ice => "#6cf",
            Category::Fighting => "#b54",
            Category::Poison => "#a59",
            Category::Ground => "#db5",
            Category::Flying => "#89f",
            Category::Psychic => "#f59",
            Category::Bug => "#ab2",
            Category::Rock => "#ba6",
            Category::Ghost => "#66b",
            Category::Dragon => "#76e",
            Category::Dark => "#754",
            Category::Steel => "#aab",
            Category::Fairy => "#e9e",
        }
    }

    /// Display color expanded to 24-bit RGB (each hex digit doubled).
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        let digits = &self.color().as_bytes()[1..];
        (nibble(digits[0]) * 17, nibble(digits[1]) * 17, nibble(digits[2]) * 17)
    }

    /// Pick a category uniformly at random.
    pub fn random(rng: &mut QuizRng) -> Category {
        Category::ALL[rng.gen_range_usize(0..Self::COUNT)]
    }
}

// Color strings are compile-time constants, always lowercase hex.
const fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => 0,
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TriviaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TriviaError::UnknownCategory(s.to_string()))
    }
}

/// Display color of a category.
#[must_use]
pub fn color_of(category: Category) -> &'static str {
    category.color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_color_lookup() {
        assert_eq!(color_of(Category::Fire), "#f42");
        assert_eq!(color_of(Category::Fairy), "#e9e");
        for category in Category::ALL {
            let color = color_of(category);
            assert_eq!(color.len(), 4);
            assert!(color.starts_with('#'));
        }
    }

    #[test]
    fn test_rgb_expansion() {
        assert_eq!(Category::Fire.rgb(), (0xff, 0x44, 0x22));
        assert_eq!(Category::Water.rgb(), (0x33, 0x99, 0xff));
        assert_eq!(Category::Dark.rgb(), (0x77, 0x55, 0x44));
    }

    #[test]
    fn test_parse() {
        assert_eq!("Ghost".parse::<Category>(), Ok(Category::Ghost));
        assert_eq!("  electric ".parse::<Category>(), Ok(Category::Electric));
        assert_eq!(
            "Sound".parse::<Category>(),
            Err(TriviaError::UnknownCategory("Sound".to_string()))
        );
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Category::Psychic).unwrap();
        assert_eq!(json, "\"Psychic\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Psychic);
    }

    #[test]
    fn test_random_covers_categories() {
        let mut rng = QuizRng::new(3);
        let mut seen = [false; Category::COUNT];
        for _ in 0..1000 {
            seen[Category::random(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
