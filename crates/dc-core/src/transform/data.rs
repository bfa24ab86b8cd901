//! Static form table
//!
//! Indexed by `Transformation as usize`; the order must match the enum.

use super::form::{
    AttackVerbs, BAD_DURATION, Capability, DEFAULT_DURATION, FakeMutation, Form, FormDuration,
    PowerScaling, Resist, Transformation, UnarmedBrand,
};
use crate::monster::{BodySize, Holiness, MonsterKind};
use crate::object::SlotMask;

const DEFAULT_VERBS: AttackVerbs = AttackVerbs {
    weak: "hit",
    medium: "punch",
    strong: "pummel",
    devastating: "pound",
};

const ANIMAL_VERBS: AttackVerbs = AttackVerbs {
    weak: "hit",
    medium: "bite",
    strong: "maul",
    devastating: "maul",
};

const NO_DURATION: FormDuration = FormDuration::new(0, PowerScaling::None, 0);

/// Every form, in `Transformation` order
pub(crate) static FORM_DATA: [Form; 15] = [
    Form {
        tran: Transformation::None,
        short_name: "",
        long_name: "",
        wiz_name: "none",
        description: "your old self",
        blocked_slots: SlotMask::empty(),
        resists: &[],
        duration: NO_DURATION,
        str_mod: 0,
        dex_mod: 0,
        size: None,
        hp_mod: 10,
        flat_ac: 0,
        power_ac: 0,
        xl_ac: 0,
        can_cast: true,
        spellcasting_penalty: 0,
        unarmed_hit_bonus: 0,
        base_unarmed_damage: 3,
        uc_brand: UnarmedBrand::Normal,
        uc_attack: "",
        verbs: DEFAULT_VERBS,
        can_fly: Capability::Default,
        can_swim: Capability::Default,
        can_bleed: Capability::Default,
        keeps_mutations: true,
        shout_verb: "",
        shout_volume_modifier: 0,
        hand_name: "",
        foot_name: "",
        flesh_equivalent: "",
        prayer_action: "",
        equivalent_mons: MonsterKind::Player,
        holiness: None,
        fakemuts: &[],
    },
    Form {
        tran: Transformation::Spider,
        short_name: "Spider",
        long_name: "spider-form",
        wiz_name: "spider",
        description: "a venomous arachnid creature",
        blocked_slots: SlotMask::PHYSICAL,
        resists: &[(Resist::Poison, 1)],
        duration: DEFAULT_DURATION,
        str_mod: 0,
        dex_mod: 5,
        size: Some(BodySize::Tiny),
        hp_mod: 10,
        flat_ac: 2,
        power_ac: 0,
        xl_ac: 0,
        can_cast: true,
        spellcasting_penalty: 10,
        unarmed_hit_bonus: 10,
        base_unarmed_damage: 5,
        uc_brand: UnarmedBrand::Venom,
        uc_attack: "Fangs",
        verbs: ANIMAL_VERBS,
        can_fly: Capability::Default,
        can_swim: Capability::Forbid,
        can_bleed: Capability::Default,
        keeps_mutations: false,
        shout_verb: "hiss",
        shout_volume_modifier: -4,
        hand_name: "front leg",
        foot_name: "leg",
        flesh_equivalent: "chitin",
        prayer_action: "crawl onto",
        equivalent_mons: MonsterKind::Redback,
        holiness: None,
        fakemuts: &[
            FakeMutation {
                terse: "venomous fangs",
                verbose: "Your bite is venomous.",
            },
            FakeMutation {
                terse: "rPois",
                verbose: "You are resistant to poison.",
            },
        ],
    },
    Form {
        tran: Transformation::BladeHands,
        short_name: "Blade",
        long_name: "",
        wiz_name: "blade",
        description: "",
        blocked_slots: SlotMask::SHIELD.union(SlotMask::GLOVES).union(SlotMask::WEAPON),
        resists: &[],
        duration: FormDuration::new(10, PowerScaling::Single, 100),
        str_mod: 0,
        dex_mod: 0,
        size: None,
        hp_mod: 10,
        flat_ac: 0,
        power_ac: 0,
        xl_ac: 0,
        can_cast: true,
        spellcasting_penalty: 20,
        unarmed_hit_bonus: 12,
        base_unarmed_damage: 12,
        uc_brand: UnarmedBrand::Normal,
        uc_attack: "",
        verbs: AttackVerbs {
            weak: "hit",
            medium: "slash",
            strong: "slice",
            devastating: "shred",
        },
        can_fly: Capability::Default,
        can_swim: Capability::Default,
        can_bleed: Capability::Default,
        keeps_mutations: true,
        shout_verb: "",
        shout_volume_modifier: 0,
        hand_name: "",
        foot_name: "",
        flesh_equivalent: "",
        prayer_action: "",
        equivalent_mons: MonsterKind::Player,
        holiness: None,
        fakemuts: &[],
    },
    Form {
        tran: Transformation::Statue,
        short_name: "Statue",
        long_name: "statue-form",
        wiz_name: "statue",
        description: "a stone statue",
        blocked_slots: SlotMask::STATUE,
        resists: &[
            (Resist::Electricity, 1),
            (Resist::NegativeEnergy, 1),
            (Resist::Poison, 1),
            (Resist::Petrification, 1),
        ],
        duration: DEFAULT_DURATION,
        str_mod: 2,
        dex_mod: -2,
        size: None,
        hp_mod: 13,
        flat_ac: 17,
        power_ac: 10,
        xl_ac: 0,
        can_cast: true,
        spellcasting_penalty: 0,
        unarmed_hit_bonus: 9,
        base_unarmed_damage: 9,
        uc_brand: UnarmedBrand::Normal,
        uc_attack: "",
        verbs: AttackVerbs {
            weak: "hit",
            medium: "punch",
            strong: "pummel",
            devastating: "batter",
        },
        can_fly: Capability::Default,
        can_swim: Capability::Forbid,
        can_bleed: Capability::Forbid,
        keeps_mutations: true,
        shout_verb: "",
        shout_volume_modifier: 0,
        hand_name: "",
        foot_name: "",
        flesh_equivalent: "stone",
        prayer_action: "",
        equivalent_mons: MonsterKind::Statue,
        holiness: Some(Holiness::Nonliving),
        fakemuts: &[
            FakeMutation {
                terse: "slow",
                verbose: "Your stone body moves slowly.",
            },
            FakeMutation {
                terse: "rElec",
                verbose: "You are resistant to electric shocks.",
            },
        ],
    },
    Form {
        tran: Transformation::IceBeast,
        short_name: "Ice",
        long_name: "ice-form",
        wiz_name: "ice",
        description: "a creature of crystalline ice",
        blocked_slots: SlotMask::PHYSICAL,
        resists: &[(Resist::Cold, 3), (Resist::Poison, 1)],
        duration: FormDuration::new(30, PowerScaling::Double, 100),
        str_mod: 0,
        dex_mod: 0,
        size: Some(BodySize::Large),
        hp_mod: 12,
        flat_ac: 5,
        power_ac: 10,
        xl_ac: 0,
        can_cast: true,
        spellcasting_penalty: 10,
        unarmed_hit_bonus: 10,
        base_unarmed_damage: 12,
        uc_brand: UnarmedBrand::Freezing,
        uc_attack: "",
        verbs: ANIMAL_VERBS,
        can_fly: Capability::Default,
        can_swim: Capability::Enable,
        can_bleed: Capability::Forbid,
        keeps_mutations: false,
        shout_verb: "",
        shout_volume_modifier: 0,
        hand_name: "front paw",
        foot_name: "paw",
        flesh_equivalent: "ice",
        prayer_action: "",
        equivalent_mons: MonsterKind::IceBeast,
        holiness: None,
        fakemuts: &[
            FakeMutation {
                terse: "rC+++",
                verbose: "You are immune to cold.",
            },
            FakeMutation {
                terse: "freezing melee",
                verbose: "Your touch freezes.",
            },
        ],
    },
    Form {
        tran: Transformation::Dragon,
        short_name: "Dragon",
        long_name: "dragon-form",
        wiz_name: "dragon",
        description: "a fearsome dragon",
        blocked_slots: SlotMask::PHYSICAL,
        resists: &[(Resist::Poison, 1)],
        duration: DEFAULT_DURATION,
        str_mod: 10,
        dex_mod: 0,
        size: Some(BodySize::Giant),
        hp_mod: 15,
        flat_ac: 16,
        power_ac: 0,
        xl_ac: 0,
        can_cast: true,
        spellcasting_penalty: 0,
        unarmed_hit_bonus: 12,
        base_unarmed_damage: 12,
        uc_brand: UnarmedBrand::Normal,
        uc_attack: "Teeth and claws",
        verbs: ANIMAL_VERBS,
        can_fly: Capability::Enable,
        can_swim: Capability::Default,
        can_bleed: Capability::Default,
        keeps_mutations: false,
        shout_verb: "roar",
        shout_volume_modifier: 6,
        hand_name: "foreclaw",
        foot_name: "talon",
        flesh_equivalent: "scales",
        prayer_action: "spread your wings before",
        equivalent_mons: MonsterKind::Dragon,
        holiness: None,
        fakemuts: &[
            FakeMutation {
                terse: "flying",
                verbose: "You can fly.",
            },
            FakeMutation {
                terse: "rPois",
                verbose: "You are resistant to poison.",
            },
        ],
    },
    Form {
        tran: Transformation::Lich,
        short_name: "Lich",
        long_name: "lich-form",
        wiz_name: "lich",
        description: "a lich",
        blocked_slots: SlotMask::empty(),
        resists: &[
            (Resist::Cold, 1),
            (Resist::NegativeEnergy, 3),
            (Resist::Poison, 1),
            (Resist::Miasma, 1),
        ],
        duration: DEFAULT_DURATION,
        str_mod: 0,
        dex_mod: 0,
        size: None,
        hp_mod: 10,
        flat_ac: 6,
        power_ac: 0,
        xl_ac: 0,
        can_cast: true,
        spellcasting_penalty: 0,
        unarmed_hit_bonus: 0,
        base_unarmed_damage: 5,
        uc_brand: UnarmedBrand::Draining,
        uc_attack: "",
        verbs: DEFAULT_VERBS,
        can_fly: Capability::Default,
        can_swim: Capability::Default,
        can_bleed: Capability::Forbid,
        keeps_mutations: true,
        shout_verb: "",
        shout_volume_modifier: 0,
        hand_name: "",
        foot_name: "",
        flesh_equivalent: "",
        prayer_action: "",
        equivalent_mons: MonsterKind::Lich,
        holiness: Some(Holiness::Undead),
        fakemuts: &[FakeMutation {
            terse: "rN+++",
            verbose: "You are immune to negative energy.",
        }],
    },
    Form {
        tran: Transformation::Bat,
        short_name: "Bat",
        long_name: "bat-form",
        wiz_name: "bat",
        description: "a bat",
        blocked_slots: SlotMask::PHYSICAL.union(SlotMask::RINGS),
        resists: &[],
        duration: BAD_DURATION,
        str_mod: -5,
        dex_mod: 5,
        size: Some(BodySize::Tiny),
        hp_mod: 10,
        flat_ac: 0,
        power_ac: 0,
        xl_ac: 0,
        can_cast: false,
        spellcasting_penalty: 0,
        unarmed_hit_bonus: 12,
        base_unarmed_damage: 1,
        uc_brand: UnarmedBrand::Normal,
        uc_attack: "Teeth",
        verbs: ANIMAL_VERBS,
        can_fly: Capability::Enable,
        can_swim: Capability::Forbid,
        can_bleed: Capability::Default,
        keeps_mutations: false,
        shout_verb: "squeak",
        shout_volume_modifier: -4,
        hand_name: "foreclaw",
        foot_name: "hind leg",
        flesh_equivalent: "",
        prayer_action: "perch on",
        equivalent_mons: MonsterKind::Bat,
        holiness: None,
        fakemuts: &[FakeMutation {
            terse: "flying",
            verbose: "You can fly.",
        }],
    },
    Form {
        tran: Transformation::Pig,
        short_name: "Pig",
        long_name: "pig-form",
        wiz_name: "pig",
        description: "a filthy swine",
        blocked_slots: SlotMask::PHYSICAL.union(SlotMask::RINGS),
        resists: &[],
        duration: BAD_DURATION,
        str_mod: 0,
        dex_mod: 0,
        size: Some(BodySize::Small),
        hp_mod: 10,
        flat_ac: 0,
        power_ac: 0,
        xl_ac: 0,
        can_cast: false,
        spellcasting_penalty: 0,
        unarmed_hit_bonus: 0,
        base_unarmed_damage: 3,
        uc_brand: UnarmedBrand::Normal,
        uc_attack: "Teeth",
        verbs: ANIMAL_VERBS,
        can_fly: Capability::Default,
        can_swim: Capability::Default,
        can_bleed: Capability::Default,
        keeps_mutations: false,
        shout_verb: "squeal",
        shout_volume_modifier: 0,
        hand_name: "front trotter",
        foot_name: "trotter",
        flesh_equivalent: "",
        prayer_action: "sniff at",
        equivalent_mons: MonsterKind::Hog,
        holiness: None,
        fakemuts: &[],
    },
    Form {
        tran: Transformation::Appendage,
        short_name: "App",
        long_name: "appendage",
        wiz_name: "appendage",
        description: "",
        blocked_slots: SlotMask::HEAD_FOOT,
        resists: &[],
        duration: FormDuration::new(10, PowerScaling::Double, 60),
        str_mod: 0,
        dex_mod: 0,
        size: None,
        hp_mod: 10,
        flat_ac: 0,
        power_ac: 0,
        xl_ac: 0,
        can_cast: true,
        spellcasting_penalty: 0,
        unarmed_hit_bonus: 0,
        base_unarmed_damage: 3,
        uc_brand: UnarmedBrand::Normal,
        uc_attack: "",
        verbs: DEFAULT_VERBS,
        can_fly: Capability::Default,
        can_swim: Capability::Default,
        can_bleed: Capability::Default,
        keeps_mutations: true,
        shout_verb: "",
        shout_volume_modifier: 0,
        hand_name: "",
        foot_name: "",
        flesh_equivalent: "",
        prayer_action: "",
        equivalent_mons: MonsterKind::Player,
        holiness: None,
        fakemuts: &[],
    },
    Form {
        tran: Transformation::Tree,
        short_name: "Tree",
        long_name: "tree-form",
        wiz_name: "tree",
        description: "a tree",
        blocked_slots: SlotMask::LEAR.union(SlotMask::CLOAK),
        resists: &[(Resist::Poison, 1), (Resist::NegativeEnergy, 1)],
        duration: BAD_DURATION,
        str_mod: 10,
        dex_mod: 0,
        size: None,
        hp_mod: 15,
        flat_ac: 20,
        power_ac: 0,
        xl_ac: 0,
        can_cast: true,
        spellcasting_penalty: 0,
        unarmed_hit_bonus: 10,
        base_unarmed_damage: 12,
        uc_brand: UnarmedBrand::Normal,
        uc_attack: "Branches",
        verbs: AttackVerbs {
            weak: "hit",
            medium: "smack",
            strong: "pummel",
            devastating: "thrash",
        },
        can_fly: Capability::Forbid,
        can_swim: Capability::Forbid,
        can_bleed: Capability::Forbid,
        keeps_mutations: false,
        shout_verb: "creak",
        shout_volume_modifier: 0,
        hand_name: "branch",
        foot_name: "root",
        flesh_equivalent: "wood",
        prayer_action: "sway towards",
        equivalent_mons: MonsterKind::AnimatedTree,
        holiness: Some(Holiness::Plant),
        fakemuts: &[FakeMutation {
            terse: "stationary",
            verbose: "Your roots keep you in place.",
        }],
    },
    Form {
        tran: Transformation::Wisp,
        short_name: "Wisp",
        long_name: "wisp-form",
        wiz_name: "wisp",
        description: "an insubstantial wisp",
        blocked_slots: SlotMask::all(),
        resists: &[
            (Resist::Fire, 1),
            (Resist::Cold, 1),
            (Resist::Electricity, 1),
            (Resist::Poison, 1),
            (Resist::NegativeEnergy, 3),
            (Resist::Acid, 1),
            (Resist::StickyFlame, 1),
            (Resist::Petrification, 1),
        ],
        duration: BAD_DURATION,
        str_mod: 0,
        dex_mod: 0,
        size: Some(BodySize::Tiny),
        hp_mod: 10,
        flat_ac: 5,
        power_ac: 0,
        xl_ac: 0,
        can_cast: false,
        spellcasting_penalty: 0,
        unarmed_hit_bonus: 10,
        base_unarmed_damage: 5,
        uc_brand: UnarmedBrand::Normal,
        uc_attack: "Misty tendrils",
        verbs: AttackVerbs {
            weak: "touch",
            medium: "touch",
            strong: "engulf",
            devastating: "engulf",
        },
        can_fly: Capability::Enable,
        can_swim: Capability::Forbid,
        can_bleed: Capability::Forbid,
        keeps_mutations: false,
        shout_verb: "whoosh",
        shout_volume_modifier: -8,
        hand_name: "misty tendril",
        foot_name: "strand",
        flesh_equivalent: "vapour",
        prayer_action: "drift before",
        equivalent_mons: MonsterKind::InsubstantialWisp,
        holiness: Some(Holiness::Nonliving),
        fakemuts: &[FakeMutation {
            terse: "insubstantial",
            verbose: "You are an insubstantial wisp.",
        }],
    },
    Form {
        tran: Transformation::Fungus,
        short_name: "Fungus",
        long_name: "fungus-form",
        wiz_name: "fungus",
        description: "a sentient fungus",
        blocked_slots: SlotMask::PHYSICAL,
        resists: &[(Resist::Poison, 1), (Resist::NegativeEnergy, 1)],
        duration: BAD_DURATION,
        str_mod: 0,
        dex_mod: 0,
        size: Some(BodySize::Tiny),
        hp_mod: 10,
        flat_ac: 12,
        power_ac: 0,
        xl_ac: 0,
        can_cast: false,
        spellcasting_penalty: 0,
        unarmed_hit_bonus: 10,
        base_unarmed_damage: 12,
        uc_brand: UnarmedBrand::Confusion,
        uc_attack: "Spores",
        verbs: AttackVerbs {
            weak: "release spores at",
            medium: "release spores at",
            strong: "release spores at",
            devastating: "release spores at",
        },
        can_fly: Capability::Forbid,
        can_swim: Capability::Forbid,
        can_bleed: Capability::Forbid,
        keeps_mutations: false,
        shout_verb: "sporulate",
        shout_volume_modifier: -8,
        hand_name: "hypha",
        foot_name: "mycelium",
        flesh_equivalent: "flesh",
        prayer_action: "",
        equivalent_mons: MonsterKind::WanderingMushroom,
        holiness: Some(Holiness::Plant),
        fakemuts: &[FakeMutation {
            terse: "confusing spores",
            verbose: "Your spores confuse those they touch.",
        }],
    },
    Form {
        tran: Transformation::Shadow,
        short_name: "Shadow",
        long_name: "shadow-form",
        wiz_name: "shadow",
        description: "a swirling mass of dark shadows",
        blocked_slots: SlotMask::empty(),
        resists: &[
            (Resist::Poison, 1),
            (Resist::NegativeEnergy, 3),
            (Resist::Miasma, 1),
            (Resist::Petrification, 1),
        ],
        duration: DEFAULT_DURATION,
        str_mod: 0,
        dex_mod: 0,
        size: None,
        hp_mod: 5,
        flat_ac: 0,
        power_ac: 0,
        xl_ac: 0,
        can_cast: true,
        spellcasting_penalty: 20,
        unarmed_hit_bonus: 0,
        base_unarmed_damage: 3,
        uc_brand: UnarmedBrand::Draining,
        uc_attack: "",
        verbs: DEFAULT_VERBS,
        can_fly: Capability::Default,
        can_swim: Capability::Default,
        can_bleed: Capability::Forbid,
        keeps_mutations: true,
        shout_verb: "",
        shout_volume_modifier: -10,
        hand_name: "",
        foot_name: "",
        flesh_equivalent: "shadow",
        prayer_action: "",
        equivalent_mons: MonsterKind::PlayerShadow,
        holiness: None,
        fakemuts: &[FakeMutation {
            terse: "half hp",
            verbose: "Your shadowy body is fragile.",
        }],
    },
    Form {
        tran: Transformation::Storm,
        short_name: "Storm",
        long_name: "storm-form",
        wiz_name: "storm",
        description: "a lightning-filled tempest",
        blocked_slots: SlotMask::PHYSICAL.union(SlotMask::RINGS),
        resists: &[
            (Resist::Electricity, 1),
            (Resist::Poison, 1),
            (Resist::StickyFlame, 1),
            (Resist::Petrification, 1),
        ],
        duration: DEFAULT_DURATION,
        str_mod: 0,
        dex_mod: 0,
        size: Some(BodySize::Large),
        hp_mod: 10,
        flat_ac: 0,
        power_ac: 0,
        xl_ac: 0,
        can_cast: true,
        spellcasting_penalty: 10,
        unarmed_hit_bonus: 0,
        base_unarmed_damage: 2,
        uc_brand: UnarmedBrand::Electrocution,
        uc_attack: "Thunder",
        verbs: AttackVerbs {
            weak: "hit",
            medium: "buffet",
            strong: "batter",
            devastating: "blast",
        },
        can_fly: Capability::Enable,
        can_swim: Capability::Forbid,
        can_bleed: Capability::Forbid,
        keeps_mutations: false,
        shout_verb: "rumble",
        shout_volume_modifier: 4,
        hand_name: "gust",
        foot_name: "gale",
        flesh_equivalent: "air",
        prayer_action: "swirl before",
        equivalent_mons: MonsterKind::Twister,
        holiness: Some(Holiness::Nonliving),
        fakemuts: &[FakeMutation {
            terse: "blinking",
            verbose: "You can move as swiftly as lightning.",
        }],
    },
];
