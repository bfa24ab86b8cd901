//! Player stats (Str, Int, Dex)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

/// Stat type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumCount,
)]
#[repr(u8)]
pub enum Stat {
    Strength = 0,
    Intelligence = 1,
    Dexterity = 2,
}

impl Stat {
    pub const fn short_name(&self) -> &'static str {
        match self {
            Stat::Strength => "Str",
            Stat::Intelligence => "Int",
            Stat::Dexterity => "Dex",
        }
    }

    pub const fn full_name(&self) -> &'static str {
        match self {
            Stat::Strength => "strength",
            Stat::Intelligence => "intelligence",
            Stat::Dexterity => "dexterity",
        }
    }
}

/// Current stat values, including every active modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    values: [i32; Stat::COUNT],
}

impl Stats {
    pub const fn new(strength: i32, intelligence: i32, dexterity: i32) -> Self {
        Self {
            values: [strength, intelligence, dexterity],
        }
    }

    pub const fn get(&self, stat: Stat) -> i32 {
        self.values[stat as usize]
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        self.values[stat as usize] = value;
    }

    pub fn modify(&mut self, stat: Stat, delta: i32) {
        self.values[stat as usize] += delta;
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new(10, 10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modify_is_additive() {
        let mut stats = Stats::default();
        stats.modify(Stat::Strength, 2);
        stats.modify(Stat::Dexterity, -2);
        assert_eq!(stats.get(Stat::Strength), 12);
        assert_eq!(stats.get(Stat::Dexterity), 8);
        stats.modify(Stat::Strength, -2);
        assert_eq!(stats.get(Stat::Strength), 10);
        assert_eq!(stats.get(Stat::Intelligence), 10);
    }

    #[test]
    fn test_names() {
        assert_eq!(Stat::Dexterity.full_name(), "dexterity");
        assert_eq!(Stat::Strength.short_name(), "Str");
    }
}
