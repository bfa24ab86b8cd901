//! Player species
//!
//! Species facts the transformation core depends on: undeath, body shape,
//! natural flight and swimming, and the dragon a draconian turns into.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::MutationType;
use crate::monster::{BodySize, MonsterKind};

/// How undead a species is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum UndeadState {
    Alive,
    /// Vampires: undead, but able to be temporarily alive
    Semi,
    Full,
}

/// Player species
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Species {
    #[default]
    Human,
    #[strum(serialize = "Hill Orc")]
    HillOrc,
    Minotaur,
    #[strum(serialize = "Deep Dwarf")]
    DeepDwarf,
    Gargoyle,
    Felid,
    Octopode,
    Merfolk,
    Naga,
    Tengu,
    Vampire,
    Mummy,
    Ghoul,
    Draconian,
    #[strum(serialize = "Red Draconian")]
    RedDraconian,
    #[strum(serialize = "White Draconian")]
    WhiteDraconian,
    #[strum(serialize = "Green Draconian")]
    GreenDraconian,
}

impl Species {
    pub const fn undead_state(&self) -> UndeadState {
        match self {
            Species::Vampire => UndeadState::Semi,
            Species::Mummy | Species::Ghoul => UndeadState::Full,
            _ => UndeadState::Alive,
        }
    }

    pub const fn is_draconian(&self) -> bool {
        matches!(
            self,
            Species::Draconian
                | Species::RedDraconian
                | Species::WhiteDraconian
                | Species::GreenDraconian
        )
    }

    /// The dragon this species becomes in dragon form
    pub const fn dragon_form(&self) -> MonsterKind {
        match self {
            Species::RedDraconian => MonsterKind::FireDragon,
            Species::WhiteDraconian => MonsterKind::IceDragon,
            Species::GreenDraconian => MonsterKind::SwampDragon,
            _ => MonsterKind::Dragon,
        }
    }

    pub const fn body_size(&self) -> BodySize {
        match self {
            Species::Felid => BodySize::Little,
            Species::Naga => BodySize::Large,
            _ => BodySize::Medium,
        }
    }

    pub const fn can_swim(&self) -> bool {
        matches!(self, Species::Merfolk | Species::Octopode)
    }

    pub const fn likes_water(&self) -> bool {
        self.can_swim()
    }

    /// Nagas wear barding instead of boots
    pub const fn wears_barding(&self) -> bool {
        matches!(self, Species::Naga)
    }

    /// Flight that no form change or item can take away
    pub const fn racial_permanent_flight(&self, experience_level: i32) -> bool {
        matches!(self, Species::Tengu) && experience_level >= 5
    }

    /// Gargoyles are living stone
    pub const fn is_nonliving(&self) -> bool {
        matches!(self, Species::Gargoyle)
    }

    pub const fn arm_count(&self) -> i32 {
        match self {
            Species::Octopode => 8,
            _ => 2,
        }
    }

    /// Innate level of a mutation for this species
    pub const fn innate_mutation(&self, mutation: MutationType) -> u8 {
        match (self, mutation) {
            (Species::Minotaur, MutationType::Horns) => 2,
            (Species::Tengu, MutationType::Talons) => 3,
            (Species::Felid, MutationType::Paws) => 1,
            (Species::Merfolk, MutationType::Mertail) => 1,
            (Species::Vampire, MutationType::Vampirism) => 1,
            (Species::Ghoul, MutationType::Claws) => 1,
            _ => 0,
        }
    }

    /// Whether this species' body can ever carry a mutation
    pub const fn mutation_conflict(&self, mutation: MutationType) -> bool {
        match mutation {
            MutationType::Talons => matches!(self, Species::Naga | Species::Octopode),
            MutationType::TentacleSpike => !matches!(self, Species::Octopode),
            MutationType::Horns => matches!(self, Species::Felid),
            _ => false,
        }
    }

    pub const fn hand_name(&self, plural: bool) -> &'static str {
        match (self, plural) {
            (Species::Felid, false) => "paw",
            (Species::Felid, true) => "paws",
            (Species::Octopode, false) => "tentacle",
            (Species::Octopode, true) => "tentacles",
            (_, false) => "hand",
            (_, true) => "hands",
        }
    }

    /// How this species addresses an altar
    pub const fn prayer_action(&self) -> &'static str {
        match self {
            Species::Naga => "coil in front of",
            Species::Octopode => "curl up in front of",
            Species::Felid => "sit before",
            _ => "kneel at",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undead_states() {
        assert_eq!(Species::Human.undead_state(), UndeadState::Alive);
        assert_eq!(Species::Vampire.undead_state(), UndeadState::Semi);
        assert_eq!(Species::Mummy.undead_state(), UndeadState::Full);
    }

    #[test]
    fn test_draconian_colours() {
        assert_eq!(Species::RedDraconian.dragon_form(), MonsterKind::FireDragon);
        assert_eq!(Species::WhiteDraconian.dragon_form(), MonsterKind::IceDragon);
        assert_eq!(Species::Human.dragon_form(), MonsterKind::Dragon);
        assert!(Species::GreenDraconian.is_draconian());
        assert!(!Species::Naga.is_draconian());
    }

    #[test]
    fn test_body_shape() {
        assert_eq!(Species::Felid.hand_name(true), "paws");
        assert_eq!(Species::Octopode.hand_name(false), "tentacle");
        assert_eq!(Species::Human.hand_name(true), "hands");
        assert!(Species::Naga.mutation_conflict(MutationType::Talons));
        assert!(!Species::Octopode.mutation_conflict(MutationType::TentacleSpike));
        assert!(Species::Human.mutation_conflict(MutationType::TentacleSpike));
    }

    #[test]
    fn test_flight_and_swimming() {
        assert!(Species::Tengu.racial_permanent_flight(5));
        assert!(!Species::Tengu.racial_permanent_flight(4));
        assert!(Species::Merfolk.can_swim());
        assert!(!Species::Human.can_swim());
    }
}
