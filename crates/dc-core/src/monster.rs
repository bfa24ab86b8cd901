//! Monster kinds referenced by player forms
//!
//! The transformation core never spawns monsters; it only needs the kind a
//! form resembles (for glyphs and descriptions) and a few size facts.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Body size category, smallest first
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumIter,
)]
pub enum BodySize {
    Tiny,
    Little,
    Small,
    #[default]
    Medium,
    Large,
    Big,
    Giant,
}

/// What kind of being something is, for holy/unholy interactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Holiness {
    #[default]
    Natural,
    Undead,
    Nonliving,
    Plant,
}

/// A monster kind a player form can resemble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum MonsterKind {
    #[strum(serialize = "player")]
    Player,
    #[strum(serialize = "redback")]
    Redback,
    #[strum(serialize = "statue")]
    Statue,
    #[strum(serialize = "ice beast")]
    IceBeast,
    #[strum(serialize = "dragon")]
    Dragon,
    #[strum(serialize = "fire dragon")]
    FireDragon,
    #[strum(serialize = "ice dragon")]
    IceDragon,
    #[strum(serialize = "swamp dragon")]
    SwampDragon,
    #[strum(serialize = "lich")]
    Lich,
    #[strum(serialize = "bat")]
    Bat,
    #[strum(serialize = "vampire bat")]
    VampireBat,
    #[strum(serialize = "hog")]
    Hog,
    #[strum(serialize = "animated tree")]
    AnimatedTree,
    #[strum(serialize = "insubstantial wisp")]
    InsubstantialWisp,
    #[strum(serialize = "wandering mushroom")]
    WanderingMushroom,
    #[strum(serialize = "player shadow")]
    PlayerShadow,
    #[strum(serialize = "twister")]
    Twister,
}

impl MonsterKind {
    /// Name with an indefinite article
    pub fn a_name(&self) -> String {
        let name = self.to_string();
        let article = match name.chars().next() {
            Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
            _ => "a",
        };
        format!("{article} {name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_ordering() {
        assert!(BodySize::Tiny < BodySize::Medium);
        assert!(BodySize::Giant > BodySize::Large);
    }

    #[test]
    fn test_names() {
        assert_eq!(MonsterKind::FireDragon.to_string(), "fire dragon");
        assert_eq!(MonsterKind::IceDragon.a_name(), "an ice dragon");
        assert_eq!(MonsterKind::Bat.a_name(), "a bat");
    }
}
