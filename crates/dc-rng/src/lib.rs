//! dc-rng: random number service for the dungeon crawl core
//!
//! Uses a seeded ChaCha stream for reproducibility (replays, tests, save/restore).
//! Integer helpers follow the classic roguelike vocabulary (`random2`,
//! `x_chance_in_y`, `one_chance_in`, ...) so game rules read the same way they
//! are usually written down.
//!
//! Bounds are a contract: asking for a value in an empty range is a bug in the
//! caller and panics.

mod defer;
mod dice;
pub mod global;
mod hash;

pub use defer::{DeferNode, DeferRand};
pub use dice::Dice;
pub use hash::hash32;

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Note: RNG state is not serialized - games restore with a new stream derived from the seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG from an array of 32-bit seed keys.
    ///
    /// The keys are folded with MurmurHash2; identical keys always give an
    /// identical stream.
    pub fn from_keys(keys: &[u32]) -> Self {
        Self::new(fold_keys(keys))
    }

    /// Create a new RNG from gathered entropy: wall clock, process id and the
    /// OS random source.
    pub fn from_entropy() -> Self {
        let clock = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
            .unwrap_or(0);
        let mut keys = [0u32; 5];
        keys[0] = clock.wrapping_add(std::process::id());
        for key in keys.iter_mut().skip(1) {
            *key = OsRng.next_u32();
        }
        Self::from_keys(&keys)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// # Panics
    /// If `bound` is zero.
    pub fn uniform_int(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "uniform_int called with an empty range");
        self.rng.gen_range(0..bound)
    }

    /// Uniform real in `[0, 1)`.
    pub fn uniform_real(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Returns 0..max-1; a `max` of 0 or 1 always gives 0.
    pub fn random2(&mut self, max: i32) -> i32 {
        if max <= 1 {
            return 0;
        }
        self.uniform_int(max as u32) as i32
    }

    /// Returns true with probability 1/2
    pub fn coinflip(&mut self) -> bool {
        self.random2(2) == 0
    }

    /// Returns true with probability 1/n
    pub fn one_chance_in(&mut self, n: i32) -> bool {
        self.random2(n) == 0
    }

    /// Returns true with probability x/y, decided by a single integer draw.
    pub fn x_chance_in_y(&mut self, x: i32, y: i32) -> bool {
        if x <= 0 {
            return false;
        }
        if x >= y {
            return true;
        }
        self.random2(y) < x
    }

    /// Uniform integer in `[low, high]`.
    pub fn random_range(&mut self, low: i32, high: i32) -> i32 {
        assert!(low <= high, "random_range called with low > high");
        low + self.random2(high - low + 1)
    }

    /// Integer in `[low, high]`, averaged over `rolls` draws.
    pub fn random_range_rolls(&mut self, low: i32, high: i32, rolls: i32) -> i32 {
        assert!(low <= high, "random_range called with low > high");
        low + self.random2avg(high - low + 1, rolls)
    }

    /// Average of `rolls` draws from 0..max-1 (the later draws may reach max).
    pub fn random2avg(&mut self, max: i32, rolls: i32) -> i32 {
        assert!(rolls > 0, "random2avg needs at least one roll");
        let mut sum = self.random2(max);
        for _ in 1..rolls {
            sum += self.random2(max + 1);
        }
        sum / rolls
    }

    /// `num / den`, rounding up with probability equal to the remainder.
    pub fn div_rand_round(&mut self, num: i32, den: i32) -> i32 {
        assert!(den != 0, "div_rand_round by zero");
        let rem = num % den;
        if rem == 0 {
            return num / den;
        }
        num / den + i32::from(self.random2(den) < rem)
    }

    /// Roll `num` dice with `size` sides; 0 when either is non-positive.
    pub fn roll_dice(&mut self, num: i32, size: i32) -> i32 {
        if num <= 0 || size <= 0 {
            return 0;
        }
        (0..num).map(|_| 1 + self.random2(size)).sum()
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.uniform_int(items.len() as u32) as usize])
        }
    }

    /// Pick a value with probability proportional to its weight.
    ///
    /// Returns `None` only when every weight is zero.
    pub fn choose_weighted<'a, T>(&mut self, choices: &'a [(T, u32)]) -> Option<&'a T> {
        let total: u64 = choices.iter().map(|(_, w)| u64::from(*w)).sum();
        if total == 0 {
            return None;
        }
        let r = self.rng.gen_range(0..total);
        let mut sum = 0u64;
        for (value, weight) in choices {
            sum += u64::from(*weight);
            if sum > r {
                return Some(value);
            }
        }
        None
    }

    /// Index variant over a fixed weight table; entries with weight <= 0 are skipped.
    pub fn choose_weighted_index(&mut self, weights: &[i32]) -> Option<usize> {
        let total: i64 = weights.iter().filter(|w| **w > 0).map(|w| i64::from(*w)).sum();
        if total == 0 {
            return None;
        }
        let r = self.rng.gen_range(0..total);
        let mut sum = 0i64;
        for (i, weight) in weights.iter().enumerate() {
            if *weight <= 0 {
                continue;
            }
            sum += i64::from(*weight);
            if sum > r {
                return Some(i);
            }
        }
        None
    }

    /// Shuffle a slice in place (Fisher-Yates)
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.uniform_int(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

fn fold_keys(keys: &[u32]) -> u64 {
    let bytes: Vec<u8> = keys.iter().flat_map(|k| k.to_le_bytes()).collect();
    let low = hash32(&bytes);
    let mut salted = bytes;
    salted.extend_from_slice(&low.to_le_bytes());
    let high = hash32(&salted);
    (u64::from(high) << 32) | u64::from(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.random2(10);
            assert!((0..10).contains(&n));
        }
    }

    #[test]
    fn test_random2_degenerate() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.random2(0), 0);
        assert_eq!(rng.random2(1), 0);
        assert_eq!(rng.random2(-5), 0);
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn test_uniform_int_zero_bound_panics() {
        let mut rng = GameRng::new(42);
        rng.uniform_int(0);
    }

    #[test]
    fn test_uniform_real_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let r = rng.uniform_real();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.random2(100), rng2.random2(100));
        }
    }

    #[test]
    fn test_key_seeding_is_deterministic() {
        let mut a = GameRng::from_keys(&[1, 2, 3]);
        let mut b = GameRng::from_keys(&[1, 2, 3]);
        let mut c = GameRng::from_keys(&[3, 2, 1]);
        assert_eq!(a.seed(), b.seed());
        assert_ne!(a.seed(), c.seed());
        for _ in 0..50 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
        let _ = c.next_u32();
    }

    #[test]
    fn test_x_chance_in_y_edges() {
        let mut rng = GameRng::new(1);
        for _ in 0..100 {
            assert!(!rng.x_chance_in_y(0, 10));
            assert!(!rng.x_chance_in_y(-3, 10));
            assert!(rng.x_chance_in_y(10, 10));
            assert!(rng.x_chance_in_y(11, 10));
        }
    }

    #[test]
    fn test_x_chance_in_y_rate() {
        let mut rng = GameRng::new(99);
        let hits = (0..20_000).filter(|_| rng.x_chance_in_y(3, 10)).count();
        assert!((5_400..6_600).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_random_range_inclusive() {
        let mut rng = GameRng::new(5);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let v = rng.random_range(3, 6);
            assert!((3..=6).contains(&v));
            seen[(v - 3) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_random2avg_bounds() {
        let mut rng = GameRng::new(5);
        for _ in 0..1000 {
            let v = rng.random2avg(10, 3);
            assert!((0..=10).contains(&v));
        }
    }

    #[test]
    fn test_div_rand_round() {
        let mut rng = GameRng::new(11);
        assert_eq!(rng.div_rand_round(10, 5), 2);
        for _ in 0..200 {
            let v = rng.div_rand_round(7, 5);
            assert!(v == 1 || v == 2);
        }
    }

    #[test]
    fn test_roll_dice() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.roll_dice(2, 6);
            assert!((2..=12).contains(&n));
        }
        assert_eq!(rng.roll_dice(0, 6), 0);
        assert_eq!(rng.roll_dice(2, 0), 0);
    }

    #[test]
    fn test_weighted_single_nonzero() {
        let mut rng = GameRng::new(3);
        let choices = [('a', 0), ('b', 0), ('c', 5)];
        for _ in 0..200 {
            assert_eq!(rng.choose_weighted(&choices), Some(&'c'));
        }
    }

    #[test]
    fn test_weighted_all_zero() {
        let mut rng = GameRng::new(3);
        let choices = [('a', 0), ('b', 0), ('c', 0)];
        assert_eq!(rng.choose_weighted(&choices), None);
        assert_eq!(rng.choose_weighted::<char>(&[]), None);
    }

    #[test]
    fn test_weighted_uniform_under_equal_weights() {
        let mut rng = GameRng::new(1234);
        let choices = [(0usize, 1), (1, 1), (2, 1), (3, 1)];
        let mut counts = [0u32; 4];
        for _ in 0..40_000 {
            counts[*rng.choose_weighted(&choices).unwrap()] += 1;
        }
        for c in counts {
            assert!((9_300..10_700).contains(&c), "counts = {counts:?}");
        }
    }

    #[test]
    fn test_weighted_index_skips_non_positive() {
        let mut rng = GameRng::new(8);
        for _ in 0..200 {
            assert_eq!(rng.choose_weighted_index(&[-4, 0, 7, 0]), Some(2));
        }
        assert_eq!(rng.choose_weighted_index(&[0, -1]), None);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(8);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn test_serde_keeps_seed() {
        let rng = GameRng::new(77);
        let json = serde_json::to_string(&rng).unwrap();
        let back: GameRng = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed(), 77);
    }
}
