//! Deferred random trees
//!
//! A `DeferRand` is an infinite tree of random values addressed by paths of
//! child indices. The first query on a node draws one fraction in `[0, 1)` and
//! stores it; every later query on that node, whatever its parameters, is a
//! function of that stored fraction. Asking "1 in 10" and then "1 in 5" on the
//! same node therefore gives consistent answers, and `random2(n)` is monotonic
//! in `n`.
//!
//! The root owns every materialised node, so nodes are never copied; the tree
//! itself is move-only.

use std::collections::BTreeMap;

use crate::GameRng;

/// Root of a lazily materialised tree of random fractions.
#[derive(Debug, Default)]
pub struct DeferRand {
    fractions: BTreeMap<Vec<u32>, f64>,
}

impl DeferRand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle on the root node.
    pub fn root(&mut self) -> DeferNode<'_> {
        DeferNode {
            tree: self,
            path: Vec::new(),
        }
    }

    /// Handle on the node at `path` (relative to the root).
    pub fn node(&mut self, path: &[u32]) -> DeferNode<'_> {
        DeferNode {
            tree: self,
            path: path.to_vec(),
        }
    }

    /// Number of nodes that have drawn their fraction.
    pub fn materialised(&self) -> usize {
        self.fractions.len()
    }

    /// The stored fraction of a node, if it has been queried.
    pub fn peek(&self, path: &[u32]) -> Option<f64> {
        self.fractions.get(path).copied()
    }
}

/// A borrowed position inside a [`DeferRand`].
#[derive(Debug)]
pub struct DeferNode<'a> {
    tree: &'a mut DeferRand,
    path: Vec<u32>,
}

impl DeferNode<'_> {
    /// Descend to child `index`.
    pub fn child(mut self, index: u32) -> Self {
        self.path.push(index);
        self
    }

    fn sub(&mut self, index: u32) -> DeferNode<'_> {
        let mut path = self.path.clone();
        path.push(index);
        DeferNode {
            tree: &mut *self.tree,
            path,
        }
    }

    fn fraction(&mut self, rng: &mut GameRng) -> f64 {
        *self
            .tree
            .fractions
            .entry(self.path.clone())
            .or_insert_with(|| rng.uniform_real())
    }

    /// True when the node's fraction is below `x / y`.
    pub fn x_chance_in_y(&mut self, rng: &mut GameRng, x: i32, y: i32) -> bool {
        if x <= 0 {
            return false;
        }
        if x >= y {
            return true;
        }
        self.fraction(rng) * f64::from(y) < f64::from(x)
    }

    pub fn one_chance_in(&mut self, rng: &mut GameRng, n: i32) -> bool {
        self.x_chance_in_y(rng, 1, n)
    }

    /// `floor(fraction * maxp1)`, so 0..maxp1-1.
    pub fn random2(&mut self, rng: &mut GameRng, maxp1: i32) -> i32 {
        if maxp1 <= 1 {
            return 0;
        }
        let value = (self.fraction(rng) * f64::from(maxp1)) as i32;
        value.min(maxp1 - 1)
    }

    pub fn random_range(&mut self, rng: &mut GameRng, low: i32, high: i32) -> i32 {
        assert!(low <= high, "random_range called with low > high");
        low + self.random2(rng, high - low + 1)
    }

    /// Average over `rolls` children of this node.
    pub fn random2avg(&mut self, rng: &mut GameRng, max: i32, rolls: i32) -> i32 {
        assert!(rolls > 0, "random2avg needs at least one roll");
        let mut sum = self.sub(0).random2(rng, max);
        for i in 1..rolls {
            sum += self.sub(i as u32).random2(rng, max + 1);
        }
        sum / rolls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_is_memoised() {
        let mut rng = GameRng::new(1);
        let mut tree = DeferRand::new();
        let first = tree.node(&[2, 5]).random2(&mut rng, 1000);
        for _ in 0..20 {
            assert_eq!(tree.node(&[2, 5]).random2(&mut rng, 1000), first);
        }
        assert_eq!(tree.materialised(), 1);
    }

    #[test]
    fn test_scaled_queries_agree() {
        let mut rng = GameRng::new(2);
        for seed_path in 0..500u32 {
            let mut tree = DeferRand::new();
            if tree.node(&[seed_path]).x_chance_in_y(&mut rng, 1, 10) {
                assert!(tree.node(&[seed_path]).x_chance_in_y(&mut rng, 1, 5));
            }
            let small = tree.node(&[seed_path]).random2(&mut rng, 10);
            let large = tree.node(&[seed_path]).random2(&mut rng, 1000);
            assert!(large / 100 == small, "small={small} large={large}");
        }
    }

    #[test]
    fn test_random2_monotonic_in_argument() {
        let mut rng = GameRng::new(3);
        let mut tree = DeferRand::new();
        let mut last = 0;
        for n in 1..200 {
            let v = tree.root().random2(&mut rng, n);
            assert!(v >= last);
            assert!(v < n.max(1));
            last = v;
        }
    }

    #[test]
    fn test_children_are_independent_nodes() {
        let mut rng = GameRng::new(4);
        let mut tree = DeferRand::new();
        tree.root().child(1).random2(&mut rng, 10);
        tree.root().child(1).child(0).random2(&mut rng, 10);
        tree.root().child(2).random2(&mut rng, 10);
        assert_eq!(tree.materialised(), 3);
        assert!(tree.peek(&[1]).is_some());
        assert!(tree.peek(&[1, 0]).is_some());
        assert!(tree.peek(&[]).is_none());
    }

    #[test]
    fn test_random2avg_uses_children() {
        let mut rng = GameRng::new(5);
        let mut tree = DeferRand::new();
        let a = tree.node(&[7]).random2avg(&mut rng, 20, 3);
        let b = tree.node(&[7]).random2avg(&mut rng, 20, 3);
        assert_eq!(a, b);
        assert!((0..=20).contains(&a));
        assert_eq!(tree.materialised(), 3);
    }

    #[test]
    fn test_random_range_on_node() {
        let mut rng = GameRng::new(6);
        let mut tree = DeferRand::new();
        let v = tree.root().random_range(&mut rng, 5, 9);
        assert!((5..=9).contains(&v));
        assert_eq!(tree.root().random_range(&mut rng, 5, 9), v);
    }
}
