//! Mutations
//!
//! Only the slice of the mutation system the transformation core touches:
//! per-mutation levels split into innate and total, and the handful of body
//! mutations the appendage form grants or a form can suppress.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

/// Mutation type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumCount,
)]
#[repr(u8)]
pub enum MutationType {
    #[strum(serialize = "horns")]
    Horns = 0,
    #[strum(serialize = "tentacle spike")]
    TentacleSpike,
    #[strum(serialize = "talons")]
    Talons,
    #[strum(serialize = "claws")]
    Claws,
    #[strum(serialize = "paws")]
    Paws,
    #[strum(serialize = "mertail")]
    Mertail,
    #[strum(serialize = "vampirism")]
    Vampirism,
    #[strum(serialize = "missing hand")]
    MissingHand,
}

/// Static description of a mutation
#[derive(Debug, Clone, Copy)]
pub struct MutationDef {
    pub mutation: MutationType,
    pub max_levels: u8,
    /// Suppressed while in a form that does not keep mutations
    pub physical: bool,
    pub descriptions: [&'static str; 3],
}

static MUTATION_DEFS: [MutationDef; MutationType::COUNT] = [
    MutationDef {
        mutation: MutationType::Horns,
        max_levels: 3,
        physical: true,
        descriptions: [
            "You have a pair of small horns on your head.",
            "You have a pair of horns on your head.",
            "You have a pair of big horns on your head.",
        ],
    },
    MutationDef {
        mutation: MutationType::TentacleSpike,
        max_levels: 3,
        physical: true,
        descriptions: [
            "One of your tentacles bears a spike.",
            "One of your tentacles bears a nasty spike.",
            "One of your tentacles bears a large vicious spike.",
        ],
    },
    MutationDef {
        mutation: MutationType::Talons,
        max_levels: 3,
        physical: true,
        descriptions: [
            "You have sharp toenails.",
            "You have razor-sharp toenails.",
            "You have claws for feet.",
        ],
    },
    MutationDef {
        mutation: MutationType::Claws,
        max_levels: 3,
        physical: true,
        descriptions: [
            "You have sharp fingernails.",
            "You have very sharp fingernails.",
            "You have claws for hands.",
        ],
    },
    MutationDef {
        mutation: MutationType::Paws,
        max_levels: 1,
        physical: true,
        descriptions: ["You have sharp claws.", "", ""],
    },
    MutationDef {
        mutation: MutationType::Mertail,
        max_levels: 1,
        physical: true,
        descriptions: ["You revert to a slippery and agile tail in water.", "", ""],
    },
    MutationDef {
        mutation: MutationType::Vampirism,
        max_levels: 1,
        physical: false,
        descriptions: ["You are a vampire.", "", ""],
    },
    MutationDef {
        mutation: MutationType::MissingHand,
        max_levels: 1,
        physical: true,
        descriptions: ["You are missing a hand.", "", ""],
    },
];

impl MutationType {
    pub fn def(&self) -> &'static MutationDef {
        let def = &MUTATION_DEFS[*self as usize];
        debug_assert_eq!(def.mutation, *self, "mutation table out of order");
        def
    }

    /// Description of the mutation at `level` (1-based)
    pub fn description(&self, level: u8) -> &'static str {
        let def = self.def();
        let level = level.clamp(1, def.max_levels);
        def.descriptions[usize::from(level - 1)]
    }
}

/// Mutation levels held by the player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutations {
    /// Total level, innate included
    base: [u8; MutationType::COUNT],
    innate: [u8; MutationType::COUNT],
}

impl Mutations {
    pub fn base_level(&self, mutation: MutationType) -> u8 {
        self.base[mutation as usize]
    }

    pub fn innate_level(&self, mutation: MutationType) -> u8 {
        self.innate[mutation as usize]
    }

    pub fn set_base_level(&mut self, mutation: MutationType, level: u8) {
        self.base[mutation as usize] = level.min(mutation.def().max_levels);
    }

    /// Grant an innate mutation; the total level rises to match
    pub fn set_innate_level(&mut self, mutation: MutationType, level: u8) {
        let level = level.min(mutation.def().max_levels);
        self.innate[mutation as usize] = level;
        if self.base[mutation as usize] < level {
            self.base[mutation as usize] = level;
        }
    }

    /// Acquire one more level, up to the maximum
    pub fn gain(&mut self, mutation: MutationType) -> bool {
        let level = self.base_level(mutation);
        if level >= mutation.def().max_levels {
            return false;
        }
        self.base[mutation as usize] = level + 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_matches_enum() {
        for mutation in MutationType::iter() {
            assert_eq!(mutation.def().mutation, mutation);
        }
    }

    #[test]
    fn test_levels_clamp() {
        let mut muts = Mutations::default();
        muts.set_base_level(MutationType::Horns, 9);
        assert_eq!(muts.base_level(MutationType::Horns), 3);
        assert!(!muts.gain(MutationType::Horns));
        muts.set_innate_level(MutationType::Mertail, 1);
        assert_eq!(muts.base_level(MutationType::Mertail), 1);
        assert_eq!(muts.innate_level(MutationType::Mertail), 1);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            MutationType::Horns.description(2),
            "You have a pair of horns on your head."
        );
        assert_eq!(MutationType::Horns.description(0), MutationType::Horns.description(1));
    }
}
