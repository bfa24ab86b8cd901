//! Dice definitions (NdS)

use serde::{Deserialize, Serialize};

use crate::GameRng;

/// `num` dice of `size` sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub num: i32,
    pub size: i32,
}

impl Dice {
    pub const fn new(num: i32, size: i32) -> Self {
        Self { num, size }
    }

    pub fn roll(&self, rng: &mut GameRng) -> i32 {
        rng.roll_dice(self.num, self.size)
    }

    /// Highest possible total
    pub const fn max(&self) -> i32 {
        if self.num <= 0 || self.size <= 0 {
            0
        } else {
            self.num * self.size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_within_max() {
        let mut rng = GameRng::new(9);
        let d = Dice::new(3, 4);
        assert_eq!(d.max(), 12);
        for _ in 0..500 {
            let v = d.roll(&mut rng);
            assert!((3..=12).contains(&v));
        }
    }
}
