//! Round type and generator.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::QuizRng;
use crate::types::{score_of, Category};

/// Options offered per round.
pub const OPTION_COUNT: usize = 4;

/// Shuffled category pool. Never exceeds the category count, so it stays inline.
type Pool = SmallVec<[Category; Category::COUNT]>;

/// One foe and the options shown against it.
///
/// Option order is display order only; it does not affect scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub foe: Category,
    pub options: [Category; OPTION_COUNT],
}

impl Round {
    /// Generate a round from the full category set.
    pub fn generate(rng: &mut QuizRng) -> Round {
        let mut pool = Category::ALL;
        rng.shuffle(&mut pool);
        Round::from_pool(&pool, rng)
    }

    /// Build a round from an already shuffled pool.
    ///
    /// The foe is taken from the back of the pool and the options from the
    /// front. While no option is effective, the first option slot is
    /// replaced with the next candidate from the back. If the pool runs out
    /// first, the round is returned without an effective option. The
    /// options are shuffled for display at the end.
    ///
    /// Panics if the pool holds fewer than `OPTION_COUNT + 1` categories.
    pub fn from_pool(pool: &[Category], rng: &mut QuizRng) -> Round {
        assert!(
            pool.len() > OPTION_COUNT,
            "Pool needs at least {} categories, got {}",
            OPTION_COUNT + 1,
            pool.len()
        );
        debug_assert!(
            pool.iter().enumerate().all(|(i, c)| !pool[..i].contains(c)),
            "Pool categories must be distinct"
        );

        let mut pool: Pool = pool.iter().copied().collect();
        let Some(foe) = pool.pop() else {
            unreachable!("pool length checked above")
        };
        let mut options = [foe; OPTION_COUNT];
        options.copy_from_slice(&pool[..OPTION_COUNT]);
        let mut candidates: Pool = pool.drain(OPTION_COUNT..).collect();

        let effective = |options: &[Category; OPTION_COUNT]| options.iter().any(|&opt| score_of(foe, opt) > 0);

        while !effective(&options) {
            let Some(next) = candidates.pop() else {
                log::warn!("no effective option against {foe}, keeping {options:?}");
                break;
            };
            log::debug!("replacing {} with {next} against {foe}", options[0]);
            options[0] = next;
        }

        rng.shuffle(&mut options);
        Round { foe, options }
    }

    /// Option at display position `index`.
    ///
    /// Panics if `index >= OPTION_COUNT`.
    #[must_use]
    pub fn option(&self, index: usize) -> Category {
        assert!(index < OPTION_COUNT, "Option index {index} out of range");
        self.options[index]
    }

    /// Score for picking the option at `index`.
    #[must_use]
    pub fn score(&self, index: usize) -> i32 {
        score_of(self.foe, self.option(index))
    }

    /// Whether any option scores above zero against the foe.
    #[must_use]
    pub fn has_effective_option(&self) -> bool {
        self.options.iter().any(|&opt| score_of(self.foe, opt) > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::*;

    #[test]
    fn test_generate_shape() {
        let mut rng = QuizRng::new(42);
        for _ in 0..200 {
            let round = Round::generate(&mut rng);
            assert!(!round.options.contains(&round.foe));
            for (i, opt) in round.options.iter().enumerate() {
                assert!(!round.options[..i].contains(opt));
            }
            assert!(round.has_effective_option());
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let mut rng1 = QuizRng::new(7);
        let mut rng2 = QuizRng::new(7);
        for _ in 0..20 {
            assert_eq!(Round::generate(&mut rng1), Round::generate(&mut rng2));
        }
    }

    #[test]
    fn test_from_pool_keeps_effective_draw() {
        // Foe Grass from the back, options from the front; Fire already counters it.
        let pool = [Fire, Water, Normal, Ice, Rock, Dark, Grass];
        let round = Round::from_pool(&pool, &mut QuizRng::new(1));

        assert_eq!(round.foe, Grass);
        let mut options = round.options;
        options.sort();
        let mut expected = [Fire, Water, Normal, Ice];
        expected.sort();
        assert_eq!(options, expected);
    }

    #[test]
    fn test_from_pool_replaces_first_slot() {
        // Nothing in the front four counters Normal; Fighting is drawn in from the back.
        let pool = [Water, Fire, Grass, Ice, Fighting, Rock, Dark, Normal];
        let round = Round::from_pool(&pool, &mut QuizRng::new(1));

        assert_eq!(round.foe, Normal);
        assert!(round.has_effective_option());
        assert!(round.options.contains(&Fighting));
        assert!(!round.options.contains(&Water));
        for kept in [Fire, Grass, Ice] {
            assert!(round.options.contains(&kept));
        }
    }

    #[test]
    fn test_from_pool_exhausted_fallback() {
        let pool = [Water, Fire, Grass, Ice, Dark, Rock, Normal];
        let round = Round::from_pool(&pool, &mut QuizRng::new(1));

        assert_eq!(round.foe, Normal);
        assert!(!round.has_effective_option());
        // Last candidate tried ends up in the replaced slot.
        assert!(round.options.contains(&Dark));
        assert!(!round.options.contains(&Water));
        assert!(!round.options.contains(&Rock));
    }

    #[test]
    #[should_panic(expected = "Pool needs at least 5 categories")]
    fn test_from_pool_too_small() {
        let _ = Round::from_pool(&[Fire, Water, Grass, Ice], &mut QuizRng::new(1));
    }

    #[test]
    fn test_score_by_index() {
        let round = Round {
            foe: Grass,
            options: [Fire, Water, Normal, Bug],
        };
        assert_eq!(round.score(0), 1);
        assert_eq!(round.score(1), -1);
        assert_eq!(round.score(2), 0);
        assert_eq!(round.score(3), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_option_out_of_range() {
        let round = Round {
            foe: Grass,
            options: [Fire, Water, Normal, Bug],
        };
        let _ = round.option(OPTION_COUNT);
    }
}
