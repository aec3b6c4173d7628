//! Throwing sticks, the chance element of Senet.
//!
//! Four flat sticks, each with a marked and an unmarked face, are thrown
//! together. The throw's value is the number of marked faces showing,
//! except that zero marked faces scores 5 (the best throw, not a miss).
//! Values therefore range over 1..=5 with a distinctly non-uniform
//! distribution.

use crate::core::rng::GameRng;
use serde::{Deserialize, Serialize};

/// Number of sticks thrown each turn.
pub const STICK_COUNT: u32 = 4;

/// Result of one throw of the sticks.
///
/// `probability` is the chance of this value arising from a single throw.
/// It is populated by [`StickThrow::distribution`]; throws drawn with
/// [`StickThrow::random`] carry `0.0` there, since the field describes
/// the distribution rather than the sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickThrow {
    pub value: u8,
    pub probability: f64,
}

impl StickThrow {
    /// Enumerate the exact throw distribution, sorted by value.
    ///
    /// All 16 face combinations are counted: four sticks yield marked
    /// counts 0..=4, with the zero count remapped to value 5. The
    /// resulting probabilities are 4/16, 6/16, 4/16, 1/16, 1/16 for
    /// values 1 through 5 and sum to exactly 1.
    #[must_use]
    pub fn distribution() -> [StickThrow; 5] {
        let mut counts = [0u32; 5];
        for mask in 0u32..(1 << STICK_COUNT) {
            let marked = mask.count_ones() as u8;
            let value = if marked == 0 { 5 } else { marked };
            counts[value as usize - 1] += 1;
        }

        let total = f64::from(1u32 << STICK_COUNT);
        std::array::from_fn(|i| StickThrow {
            value: i as u8 + 1,
            probability: f64::from(counts[i]) / total,
        })
    }

    /// Throw the sticks using the given RNG.
    ///
    /// Each stick lands marked-side-up with probability 1/2,
    /// independently.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> StickThrow {
        let mut marked = 0u8;
        for _ in 0..STICK_COUNT {
            if rng.gen_bool(0.5) {
                marked += 1;
            }
        }

        StickThrow {
            value: if marked == 0 { 5 } else { marked },
            probability: 0.0,
        }
    }
}

impl std::fmt::Display for StickThrow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_values_sorted() {
        let dist = StickThrow::distribution();
        let values: Vec<_> = dist.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_distribution_probabilities_exact() {
        let dist = StickThrow::distribution();

        assert_eq!(dist[0].probability, 4.0 / 16.0);
        assert_eq!(dist[1].probability, 6.0 / 16.0);
        assert_eq!(dist[2].probability, 4.0 / 16.0);
        assert_eq!(dist[3].probability, 1.0 / 16.0);
        assert_eq!(dist[4].probability, 1.0 / 16.0);
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let total: f64 = StickThrow::distribution()
            .iter()
            .map(|t| t.probability)
            .sum();
        // Sixteenths are exact in binary floating point.
        assert_eq!(total, 1.0);
    }

    #[test]
    fn test_random_throws_stay_in_range() {
        let mut rng = GameRng::new(42);

        for _ in 0..1000 {
            let throw = StickThrow::random(&mut rng);
            assert!((1..=5).contains(&throw.value));
            assert_eq!(throw.probability, 0.0);
        }
    }

    #[test]
    fn test_random_is_deterministic() {
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        for _ in 0..200 {
            assert_eq!(
                StickThrow::random(&mut rng1).value,
                StickThrow::random(&mut rng2).value
            );
        }
    }

    #[test]
    fn test_throw_display() {
        let throw = StickThrow {
            value: 3,
            probability: 0.0,
        };
        assert_eq!(format!("{}", throw), "3");
    }

    #[test]
    fn test_throw_serialization() {
        let throw = StickThrow {
            value: 5,
            probability: 1.0 / 16.0,
        };
        let json = serde_json::to_string(&throw).unwrap();
        let back: StickThrow = serde_json::from_str(&json).unwrap();
        assert_eq!(throw, back);
    }
}
