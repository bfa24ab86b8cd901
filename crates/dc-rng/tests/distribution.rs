use std::collections::HashMap;

use dc_rng::{DeferRand, GameRng};
use proptest::prelude::*;

#[test]
fn test_shuffle_permutations_are_uniform() {
    let mut rng = GameRng::new(2024);
    let mut counts: HashMap<[u8; 3], u32> = HashMap::new();
    for _ in 0..60_000 {
        let mut items = [0u8, 1, 2];
        rng.shuffle(&mut items);
        *counts.entry(items).or_default() += 1;
    }
    assert_eq!(counts.len(), 6);
    for (perm, count) in &counts {
        assert!((9_300..10_700).contains(count), "{perm:?} seen {count} times");
    }
}

#[test]
fn test_shuffle_trivial_inputs() {
    let mut rng = GameRng::new(1);
    let mut empty: [u8; 0] = [];
    rng.shuffle(&mut empty);
    let mut one = [42];
    rng.shuffle(&mut one);
    assert_eq!(one, [42]);
}

#[test]
fn test_weighted_proportions() {
    let mut rng = GameRng::new(77);
    let choices = [("rare", 1), ("common", 3)];
    let common = (0..40_000)
        .filter(|_| *rng.choose_weighted(&choices).unwrap() == "common")
        .count();
    assert!((29_000..31_000).contains(&common), "common = {common}");
}

proptest! {
    #[test]
    fn prop_shuffle_preserves_multiset(seed in any::<u64>(), mut items in proptest::collection::vec(0u16..50, 0..40)) {
        let mut rng = GameRng::new(seed);
        let mut expected = items.clone();
        rng.shuffle(&mut items);
        expected.sort_unstable();
        items.sort_unstable();
        prop_assert_eq!(items, expected);
    }

    #[test]
    fn prop_same_seed_same_stream(seed in any::<u64>()) {
        let mut a = GameRng::new(seed);
        let mut b = GameRng::new(seed);
        for _ in 0..20 {
            prop_assert_eq!(a.random2(1_000_000), b.random2(1_000_000));
        }
    }

    #[test]
    fn prop_defer_chance_consistent(seed in any::<u64>(), path in proptest::collection::vec(0u32..8, 0..4), x in 1i32..50, y in 51i32..200) {
        let mut rng = GameRng::new(seed);
        let mut tree = DeferRand::new();
        // A smaller threshold passing implies every larger threshold passes.
        if tree.node(&path).x_chance_in_y(&mut rng, x, y) {
            prop_assert!(tree.node(&path).x_chance_in_y(&mut rng, x + 1, y));
            prop_assert!(tree.node(&path).x_chance_in_y(&mut rng, 2 * x, 2 * y - 1));
        }
        prop_assert_eq!(tree.materialised(), 1);
    }
}
