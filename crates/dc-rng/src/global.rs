//! Process-wide generator
//!
//! Legacy callers that cannot thread a [`GameRng`] through use this
//! thread-local instance. Reseeding with the same material always gives the
//! same sequence. The core game state carries its own generator and does not
//! touch this one.

use std::cell::RefCell;

use crate::GameRng;

thread_local! {
    static RNG: RefCell<GameRng> = RefCell::new(GameRng::new(0));
    static SAVED: RefCell<Vec<GameRng>> = const { RefCell::new(Vec::new()) };
}

/// Reseed from a single 32-bit seed.
pub fn seed_rng(seed: u32) {
    seed_rng_keys(&[seed]);
}

/// Reseed from an array of seed keys.
pub fn seed_rng_keys(keys: &[u32]) {
    let rng = GameRng::from_keys(keys);
    tracing::debug!(seed = rng.seed(), "reseeding process generator");
    RNG.with(|cell| *cell.borrow_mut() = rng);
}

/// Reseed from gathered entropy (clock, pid, OS randomness).
pub fn seed_rng_from_entropy() {
    let rng = GameRng::from_entropy();
    tracing::debug!(seed = rng.seed(), "reseeding process generator from entropy");
    RNG.with(|cell| *cell.borrow_mut() = rng);
}

/// Run `f` with the process generator.
pub fn with_rng<R>(f: impl FnOnce(&mut GameRng) -> R) -> R {
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Save the generator state so it can be restored with [`pop_rng_state`].
pub fn push_rng_state() {
    let snapshot = with_rng(|rng| rng.clone());
    SAVED.with(|saved| saved.borrow_mut().push(snapshot));
}

/// Restore the most recently pushed state. Returns false if nothing was saved.
pub fn pop_rng_state() -> bool {
    match SAVED.with(|saved| saved.borrow_mut().pop()) {
        Some(rng) => {
            RNG.with(|cell| *cell.borrow_mut() = rng);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reseed_is_deterministic() {
        seed_rng(1234);
        let first: Vec<i32> = (0..10).map(|_| with_rng(|r| r.random2(1000))).collect();
        seed_rng(1234);
        let second: Vec<i32> = (0..10).map(|_| with_rng(|r| r.random2(1000))).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_push_pop_restores_sequence() {
        seed_rng_keys(&[5, 6, 7]);
        push_rng_state();
        let a: Vec<i32> = (0..5).map(|_| with_rng(|r| r.random2(1000))).collect();
        assert!(pop_rng_state());
        let b: Vec<i32> = (0..5).map(|_| with_rng(|r| r.random2(1000))).collect();
        assert_eq!(a, b);
        assert!(!pop_rng_state());
    }
}
