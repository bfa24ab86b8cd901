//! Form registry
//!
//! One immutable [`Form`] per [`Transformation`], held in a static table
//! indexed by the variant tag. Data lives here; per-variant behaviour that
//! data cannot express lives in [`super::behavior`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr};
use dc_rng::Dice;

use super::behavior::{self, FormBehavior};
use super::data::FORM_DATA;
use crate::GameRng;
use crate::dungeon::Feature;
use crate::monster::{BodySize, Holiness, MonsterKind};
use crate::object::{EquipSlot, Item, SlotMask};
use crate::player::You;

/// A player transformation
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
    FromRepr,
)]
#[repr(u8)]
pub enum Transformation {
    #[default]
    None = 0,
    Spider,
    BladeHands,
    Statue,
    IceBeast,
    Dragon,
    Lich,
    Bat,
    Pig,
    Appendage,
    Tree,
    Wisp,
    Fungus,
    Shadow,
    Storm,
}

// ─────────────────────────────────────────────────────────────────────────────
// Form data types
// ─────────────────────────────────────────────────────────────────────────────

/// Three-way capability override (enable, forbid, or leave to the species)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Default,
    Enable,
    Forbid,
}

/// How spell power lengthens a form's duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerScaling {
    None,
    Single,
    OneAndAHalf,
    Double,
}

/// Duration in turns: base plus a power bonus, capped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDuration {
    pub base: i32,
    pub scaling: PowerScaling,
    pub max: i32,
}

impl FormDuration {
    pub const fn new(base: i32, scaling: PowerScaling, max: i32) -> Self {
        Self { base, scaling, max }
    }

    /// Random bonus turns for spell power `power`
    pub fn power_bonus(&self, power: i32, rng: &mut GameRng) -> i32 {
        match self.scaling {
            PowerScaling::None => 0,
            PowerScaling::Single => rng.random2(power),
            PowerScaling::OneAndAHalf => rng.random2(power) + rng.random2(power / 2),
            PowerScaling::Double => rng.random2(power) + rng.random2(power),
        }
    }

    /// Turns the form lasts
    pub fn turns(&self, power: i32, rng: &mut GameRng) -> i32 {
        (self.base + self.power_bonus(power, rng)).min(self.max)
    }
}

/// Most voluntary forms
pub const DEFAULT_DURATION: FormDuration = FormDuration::new(20, PowerScaling::Double, 100);
/// Forms that are mostly inflicted
pub const BAD_DURATION: FormDuration = FormDuration::new(15, PowerScaling::OneAndAHalf, 100);

/// Resistance kinds a form can grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Resist {
    Fire,
    Cold,
    NegativeEnergy,
    Electricity,
    Poison,
    Miasma,
    Acid,
    StickyFlame,
    Petrification,
}

/// Brand on unarmed attacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum UnarmedBrand {
    Normal,
    Venom,
    Freezing,
    Draining,
    Confusion,
    Electrocution,
}

impl UnarmedBrand {
    /// Suffix for attack names, e.g. "Fangs (venom)"
    pub const fn suffix(&self) -> Option<&'static str> {
        match self {
            UnarmedBrand::Normal => None,
            UnarmedBrand::Venom => Some("venom"),
            UnarmedBrand::Freezing => Some("freeze"),
            UnarmedBrand::Draining => Some("drain"),
            UnarmedBrand::Confusion => Some("confuse"),
            UnarmedBrand::Electrocution => Some("elec"),
        }
    }
}

/// Attack verbs by damage tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackVerbs {
    pub weak: &'static str,
    pub medium: &'static str,
    pub strong: &'static str,
    pub devastating: &'static str,
}

/// A pseudo-mutation reported while in a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeMutation {
    pub terse: &'static str,
    pub verbose: &'static str,
}

/// Immutable description of a transformation
#[derive(Debug)]
pub struct Form {
    pub tran: Transformation,
    pub short_name: &'static str,
    pub long_name: &'static str,
    pub wiz_name: &'static str,
    pub description: &'static str,

    pub blocked_slots: SlotMask,
    pub resists: &'static [(Resist, i32)],
    pub duration: FormDuration,

    pub str_mod: i32,
    pub dex_mod: i32,
    /// `None` keeps the species size
    pub size: Option<BodySize>,
    /// Hit point multiplier in tenths
    pub hp_mod: i32,

    pub flat_ac: i32,
    pub power_ac: i32,
    pub xl_ac: i32,

    pub can_cast: bool,
    pub spellcasting_penalty: i32,

    pub unarmed_hit_bonus: i32,
    pub base_unarmed_damage: i32,
    pub uc_brand: UnarmedBrand,
    /// Empty means the default unarmed attack name
    pub uc_attack: &'static str,
    pub verbs: AttackVerbs,

    pub can_fly: Capability,
    pub can_swim: Capability,
    pub can_bleed: Capability,
    pub keeps_mutations: bool,

    pub shout_verb: &'static str,
    pub shout_volume_modifier: i32,
    pub hand_name: &'static str,
    pub foot_name: &'static str,
    pub flesh_equivalent: &'static str,
    pub prayer_action: &'static str,

    pub equivalent_mons: MonsterKind,
    pub holiness: Option<Holiness>,
    pub fakemuts: &'static [FakeMutation],
}

/// Look up the form for a transformation.
pub fn get_form(tran: Transformation) -> &'static Form {
    let form = &FORM_DATA[tran as usize];
    debug_assert_eq!(form.tran, tran, "form table out of order at {tran}");
    form
}

/// Look up a form by raw variant index; an index outside the table means the
/// caller and the table disagree, which cannot be recovered from.
pub fn form_for_index(index: usize) -> &'static Form {
    let tran = u8::try_from(index)
        .ok()
        .and_then(Transformation::from_repr)
        .unwrap_or_else(|| panic!("no form with index {index}"));
    get_form(tran)
}

impl Form {
    pub(crate) fn behavior(&self) -> &'static dyn FormBehavior {
        behavior::for_form(self.tran)
    }

    // ── Equipment ────────────────────────────────────────────────────────

    /// Whether anything could be worn in `slot` in this form
    pub fn slot_available(&self, slot: EquipSlot) -> bool {
        if slot == EquipSlot::RingAmulet {
            return !self.all_blocked(SlotMask::RINGS);
        }
        !self.blocked_slots.has(slot)
    }

    /// Whether every slot in `slots` is blocked
    pub fn all_blocked(&self, slots: SlotMask) -> bool {
        self.blocked_slots.contains(slots)
    }

    pub fn can_wield(&self) -> bool {
        self.slot_available(EquipSlot::Weapon)
    }

    /// Whether any armour slot is open
    pub fn armour_available(&self) -> bool {
        !self.all_blocked(SlotMask::WEAR)
    }

    pub fn rings_available(&self) -> bool {
        !self.all_blocked(SlotMask::RINGS)
    }

    /// Whether `item` can be worn in this form. Armour, jewellery and
    /// Lear's hauberk are checked; wielding is handled separately.
    pub fn can_wear_item(&self, item: &Item) -> bool {
        if item.is_jewellery() {
            if item.is_amulet() {
                return self.slot_available(EquipSlot::Amulet);
            }
            return self.rings_available();
        }

        if item.is_lear_hauberk() {
            return !self.blocked_slots.intersects(SlotMask::LEAR);
        }

        match item.armour_slot {
            Some(slot) => self.slot_available(slot),
            None => true,
        }
    }

    // ── Duration ─────────────────────────────────────────────────────────

    /// Duration in turns for a casting at `power`
    pub fn get_duration(&self, power: i32, rng: &mut GameRng) -> i32 {
        self.duration.turns(power, rng)
    }

    // ── Movement ─────────────────────────────────────────────────────────

    pub fn enables_flight(&self) -> bool {
        self.can_fly == Capability::Enable
    }

    pub fn forbids_flight(&self) -> bool {
        self.can_fly == Capability::Forbid
    }

    pub fn forbids_swimming(&self) -> bool {
        self.can_swim == Capability::Forbid
    }

    pub fn player_can_fly(&self, you: &You) -> bool {
        self.behavior().player_can_fly(self, you)
    }

    pub fn player_can_swim(&self, you: &You) -> bool {
        self.behavior().player_can_swim(self, you)
    }

    // ── Resistances ──────────────────────────────────────────────────────

    /// Base resistance level from the form table
    pub fn resist(&self, kind: Resist) -> i32 {
        self.resists
            .iter()
            .find(|(r, _)| *r == kind)
            .map_or(0, |(_, level)| *level)
    }

    pub fn res_fire(&self, you: &You) -> i32 {
        self.behavior().res_fire(self, you)
    }

    pub fn res_cold(&self, you: &You) -> i32 {
        self.behavior().res_cold(self, you)
    }

    pub fn res_neg(&self) -> i32 {
        self.resist(Resist::NegativeEnergy)
    }

    pub fn res_elec(&self) -> bool {
        self.resist(Resist::Electricity) > 0
    }

    pub fn res_pois(&self) -> i32 {
        self.resist(Resist::Poison)
    }

    pub fn res_miasma(&self) -> bool {
        self.resist(Resist::Miasma) > 0
    }

    pub fn res_acid(&self) -> bool {
        self.resist(Resist::Acid) > 0
    }

    pub fn res_sticky_flame(&self) -> bool {
        self.resist(Resist::StickyFlame) > 0
    }

    pub fn res_petrify(&self) -> bool {
        self.resist(Resist::Petrification) > 0
    }

    // ── Combat ───────────────────────────────────────────────────────────

    /// AC bonus in hundredths
    pub fn get_ac_bonus(&self, you: &You) -> i32 {
        self.behavior().ac_bonus(self, you)
    }

    pub fn get_base_unarmed_damage(&self, you: &You, rng: &mut GameRng) -> i32 {
        self.behavior().base_unarmed_damage(self, you, rng)
    }

    /// Unarmed damage as a single die sized by the base damage
    pub fn unarmed_damage_dice(&self, you: &You, rng: &mut GameRng) -> Dice {
        Dice::new(1, self.get_base_unarmed_damage(you, rng))
    }

    pub fn get_uc_attack_name(&self, you: &You, default_name: &str) -> String {
        self.behavior().uc_attack_name(self, you, default_name)
    }

    pub fn can_offhand_punch(&self) -> bool {
        self.behavior().can_offhand_punch(self)
    }

    pub fn get_equivalent_mons(&self, you: &You) -> MonsterKind {
        self.behavior().equivalent_mons(self, you)
    }

    // ── Text ─────────────────────────────────────────────────────────────

    pub fn get_long_name(&self, you: &You) -> String {
        self.behavior().long_name(self, you)
    }

    /// "a living statue of rough stone" and the like
    pub fn get_transform_description(&self, you: &You) -> String {
        self.behavior().transform_description(self, you)
    }

    /// "You are ..." / "You were ..."
    pub fn get_description(&self, you: &You, past: bool) -> String {
        self.behavior().description(self, you, past)
    }

    pub fn transform_message(
        &self,
        you: &You,
        feature: Feature,
        previous: Transformation,
        rng: &mut GameRng,
    ) -> String {
        self.behavior()
            .transform_message(self, you, feature, previous, rng)
    }

    pub fn get_untransform_message(&self, you: &You) -> Option<String> {
        self.behavior().untransform_message(self, you)
    }

    /// What the player does when praying at an altar
    pub fn player_prayer_action(&self, you: &You) -> String {
        if self.enables_flight() && !self.prayer_action.is_empty() {
            return self.prayer_action.to_string();
        }
        if you.airborne() {
            return "hover solemnly before".to_string();
        }
        if !self.prayer_action.is_empty() {
            return self.prayer_action.to_string();
        }
        you.species.prayer_action().to_string()
    }

    /// Pseudo-mutations shown while in this form
    pub fn get_fakemuts(&self, terse: bool) -> Vec<&'static str> {
        self.fakemuts
            .iter()
            .map(|m| if terse { m.terse } else { m.verbose })
            .collect()
    }

    /// What happens to the player's gear on entering this form
    pub fn melding_description(&self) -> Option<&'static str> {
        if self.all_blocked(SlotMask::all()) {
            Some("Your equipment is entirely melded.")
        } else if self.all_blocked(SlotMask::PHYSICAL) {
            Some("Your armour is entirely melded.")
        } else if self.blocked_slots.contains(SlotMask::WEAR) {
            Some("Your armour is largely melded.")
        } else if self.blocked_slots.intersects(SlotMask::WEAR) {
            Some("Your armour is partially melded.")
        } else {
            None
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free queries
// ─────────────────────────────────────────────────────────────────────────────

/// Debug name of a transformation
pub fn transform_name(tran: Transformation) -> &'static str {
    get_form(tran).wiz_name
}

pub fn form_can_wield(tran: Transformation) -> bool {
    get_form(tran).can_wield()
}

pub fn form_can_wear(tran: Transformation) -> bool {
    get_form(tran).armour_available()
}

pub fn form_can_fly(tran: Transformation, you: &You) -> bool {
    get_form(tran).player_can_fly(you)
}

pub fn form_can_swim(tran: Transformation, you: &You) -> bool {
    get_form(tran).player_can_swim(you)
}

/// Whether the player can stay in deep water in this form. Water-loving
/// species keep that in any form that can swim at all, and as statues.
pub fn form_likes_water(tran: Transformation, you: &You) -> bool {
    if you.species.likes_water()
        && (tran == Transformation::Statue || !get_form(tran).forbids_swimming())
    {
        return true;
    }
    form_can_swim(tran, you)
}

/// Forms that replace the player's body rather than reshaping part of it
pub fn form_changed_physiology(tran: Transformation) -> bool {
    !matches!(
        tran,
        Transformation::None | Transformation::Appendage | Transformation::BladeHands
    )
}

pub fn form_can_bleed(tran: Transformation) -> bool {
    get_form(tran).can_bleed != Capability::Forbid
}

pub fn form_keeps_mutations(tran: Transformation) -> bool {
    get_form(tran).keeps_mutations
}

/// Movement cost of the form
pub fn form_base_movespeed(tran: Transformation) -> i32 {
    match tran {
        Transformation::Bat => 5,
        Transformation::Pig => 7,
        _ => crate::consts::NORMAL_MOVE_COST,
    }
}

pub fn form_hp_mod(tran: Transformation) -> i32 {
    get_form(tran).hp_mod
}

/// Which of the player's limbs become blades
pub fn blade_parts(you: &You, terse: bool) -> String {
    let hands = you.hand_name(true);
    if !terse && you.mutations.base_level(crate::player::MutationType::Paws) > 0 {
        // Only two of four paws turn into blades.
        format!("front {hands}")
    } else if !terse && you.species.arm_count() > 2 {
        format!("main {hands}")
    } else {
        hands.to_string()
    }
}

/// Monster the player resembles in a form
pub fn transform_mons(you: &You) -> MonsterKind {
    get_form(you.form).get_equivalent_mons(you)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Species;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_form_round_trips() {
        for tran in Transformation::iter() {
            assert_eq!(get_form(tran).tran, tran);
            assert_eq!(form_for_index(tran as usize).tran, tran);
        }
    }

    #[test]
    #[should_panic(expected = "no form with index")]
    fn test_bad_index_panics() {
        form_for_index(Transformation::COUNT);
    }

    #[test]
    fn test_slot_queries() {
        let statue = get_form(Transformation::Statue);
        assert!(!statue.slot_available(EquipSlot::Gloves));
        assert!(statue.slot_available(EquipSlot::Helmet));
        assert!(statue.all_blocked(SlotMask::GLOVES | SlotMask::BOOTS));
        assert!(!statue.all_blocked(SlotMask::GLOVES | SlotMask::HELMET));
        assert!(statue.can_wield());

        let wisp = get_form(Transformation::Wisp);
        assert!(!wisp.slot_available(EquipSlot::RingAmulet));
        assert!(!wisp.rings_available());
        assert_eq!(
            wisp.melding_description(),
            Some("Your equipment is entirely melded.")
        );
        assert_eq!(get_form(Transformation::None).melding_description(), None);
    }

    #[test]
    fn test_can_wear_item() {
        let statue = get_form(Transformation::Statue);
        let hat = Item::armour("helmet", EquipSlot::Helmet);
        let robe = Item::armour("robe", EquipSlot::BodyArmour);
        let lear = Item::armour("Lear's hauberk", EquipSlot::BodyArmour)
            .with_props(crate::object::ItemProps::LEAR);
        assert!(statue.can_wear_item(&hat));
        assert!(!statue.can_wear_item(&robe));
        assert!(!statue.can_wear_item(&lear));
        assert!(statue.can_wear_item(&Item::amulet("amulet of faith")));

        let bat = get_form(Transformation::Bat);
        assert!(!bat.can_wear_item(&Item::ring("ring of flight")));
        assert!(bat.can_wear_item(&Item::amulet("amulet of faith")));
    }

    #[test]
    fn test_duration_bounds() {
        let mut rng = GameRng::new(3);
        for tran in Transformation::iter() {
            let form = get_form(tran);
            for power in [0, 10, 50, 200] {
                let turns = form.get_duration(power, &mut rng);
                assert!(turns >= 0);
                assert!(turns <= form.duration.max);
            }
        }
        let fixed = FormDuration::new(7, PowerScaling::None, 100);
        assert_eq!(fixed.turns(500, &mut rng), 7);
        assert_eq!(DEFAULT_DURATION.turns(0, &mut rng), 20);
    }

    #[test]
    fn test_free_queries() {
        assert_eq!(transform_name(Transformation::Statue), "statue");
        assert!(!form_can_wield(Transformation::Spider));
        assert!(form_can_wield(Transformation::Lich));
        assert!(form_changed_physiology(Transformation::Dragon));
        assert!(form_changed_physiology(Transformation::Statue));
        assert!(form_changed_physiology(Transformation::Lich));
        assert!(form_changed_physiology(Transformation::Shadow));
        assert!(!form_changed_physiology(Transformation::None));
        assert!(!form_changed_physiology(Transformation::Appendage));
        assert!(!form_changed_physiology(Transformation::BladeHands));
        assert!(form_keeps_mutations(Transformation::None));
        assert!(!form_can_bleed(Transformation::Statue));
        assert_eq!(form_base_movespeed(Transformation::Bat), 5);
        assert_eq!(form_base_movespeed(Transformation::Pig), 7);
        assert_eq!(form_base_movespeed(Transformation::Statue), 10);
        assert_eq!(form_hp_mod(Transformation::Shadow), 5);
    }

    #[test]
    fn test_unarmed_damage_dice() {
        let you = You::default();
        let mut rng = GameRng::new(4);
        let dice = get_form(Transformation::Statue).unarmed_damage_dice(&you, &mut rng);
        assert_eq!(dice, Dice::new(1, 9));
        for _ in 0..200 {
            assert!((1..=dice.max()).contains(&dice.roll(&mut rng)));
        }
        let bat = get_form(Transformation::Bat).unarmed_damage_dice(&you, &mut rng);
        assert_eq!(bat.max(), 1);
    }

    #[test]
    fn test_flight_and_swim() {
        let you = You::default();
        assert!(form_can_fly(Transformation::Dragon, &you));
        assert!(!form_can_fly(Transformation::Statue, &you));
        assert!(form_can_swim(Transformation::IceBeast, &you));
        assert!(!form_can_swim(Transformation::Statue, &you));
        let merfolk = You::new("Ariel", Species::Merfolk);
        assert!(form_likes_water(Transformation::None, &merfolk));
        assert!(!form_likes_water(Transformation::Tree, &merfolk));
        assert!(form_likes_water(Transformation::Statue, &merfolk));
        assert!(form_likes_water(Transformation::Lich, &merfolk));
        assert!(!form_likes_water(Transformation::Statue, &you));
        assert!(!form_likes_water(Transformation::Lich, &you));
    }

    #[test]
    fn test_blade_parts() {
        assert_eq!(blade_parts(&You::default(), false), "hands");
        let felid = You::new("Tom", Species::Felid);
        assert_eq!(blade_parts(&felid, false), "front paws");
        assert_eq!(blade_parts(&felid, true), "paws");
        let octopode = You::new("Ink", Species::Octopode);
        assert_eq!(blade_parts(&octopode, false), "main tentacles");
    }

    #[test]
    fn test_resist_table() {
        let lich = get_form(Transformation::Lich);
        assert_eq!(lich.res_neg(), 3);
        assert_eq!(lich.resist(Resist::Fire), 0);
        assert!(get_form(Transformation::Statue).res_elec());
        assert!(get_form(Transformation::Wisp).res_petrify());
    }

    #[test]
    fn test_prayer_action() {
        let you = You::default();
        assert_eq!(
            get_form(Transformation::None).player_prayer_action(&you),
            "kneel at"
        );
        assert_eq!(
            get_form(Transformation::Tree).player_prayer_action(&you),
            "sway towards"
        );
        let naga = You::new("Sss", Species::Naga);
        assert_eq!(
            get_form(Transformation::None).player_prayer_action(&naga),
            "coil in front of"
        );
    }

    #[test]
    fn test_fakemuts() {
        let spider = get_form(Transformation::Spider);
        assert!(!spider.get_fakemuts(true).is_empty());
        assert_eq!(spider.get_fakemuts(true).len(), spider.get_fakemuts(false).len());
        assert!(get_form(Transformation::None).get_fakemuts(false).is_empty());
    }
}
