//! Main player structure

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoEnumIterator};

use super::{Durations, Equipment, MutationType, Mutations, Religion, Species, Stat, Stats};
use super::{Duration, UndeadState};
use crate::dungeon::Position;
use crate::monster::{BodySize, Holiness};
use crate::object::{EquipSlot, Item};
use crate::transform::{Transformation, get_form};

bitflags! {
    /// Parts of the status display that need refreshing
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Redraw: u16 {
        const EVASION = 0x0001;
        const ARMOUR_CLASS = 0x0002;
        const WIELD = 0x0004;
        const QUIVER = 0x0008;
        const STATUS_LIGHTS = 0x0010;
        const HIT_POINTS = 0x0020;
        const STATS = 0x0040;
        const TITLE = 0x0080;
    }
}

/// What is holding the player in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum HeldBy {
    Web,
    Net,
    Monster,
}

/// A creature constricting the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constrictor {
    pub monster_id: u32,
    pub size: BodySize,
}

/// A multi-turn action in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum DelayKind {
    Rest,
    Read,
    ArmourOn,
    ArmourOff,
    Travel,
    Run,
}

impl DelayKind {
    /// Delays that move the player around the map
    pub const fn is_relocation(&self) -> bool {
        matches!(self, DelayKind::Travel | DelayKind::Run)
    }
}

/// Why the player died
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum DeathCause {
    /// Hit points fell to zero from a change in maximum
    Frailty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Death {
    pub cause: DeathCause,
    pub aux: String,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct You {
    // Identity
    pub name: String,
    pub species: Species,
    pub experience_level: i32,
    pub pos: Position,

    // Body
    stats: Stats,
    pub hp: i32,
    pub hp_max: i32,
    /// Maximum hit points before the form multiplier
    pub base_hp_max: i32,

    // Transformation state
    pub form: Transformation,
    pub transform_power: Option<i32>,
    /// Spell power remembered for storm form unarmed damage
    pub storm_power: Option<i32>,
    pub transform_uncancellable: bool,
    /// Mutations granted by the appendage form
    pub appendages: Vec<MutationType>,

    pub durations: Durations,
    pub mutations: Mutations,
    pub equipment: Equipment,
    pub inventory: Vec<Item>,

    // Religion
    pub religion: Religion,
    /// Cursed items worn for Ashenzari
    pub bondage: i32,

    // Entanglement
    pub held: Option<HeldBy>,
    pub constricting: Vec<u32>,
    pub constricted_by: Option<Constrictor>,

    // Species specifics
    /// Merfolk tail is out
    pub fishtail: bool,
    /// Vampire is currently blood-filled
    pub vampire_alive: bool,

    // Status
    pub redraw: Redraw,
    pub received_weapon_warning: bool,
    /// Digging with mandibles
    pub digging: bool,
    /// Hit points lost to flaying, returned when it heals
    pub flay_damage: i32,
    pub exp_drain: i32,
    pub delay: Option<DelayKind>,
    /// Temporary flight granted to escape lethal terrain
    pub emergency_flight: bool,
    pub death: Option<Death>,
    pub turn_is_over: bool,
}

impl Default for You {
    fn default() -> Self {
        Self::new("Player", Species::Human)
    }
}

impl You {
    /// Create a fresh character of `species`
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        let mut mutations = Mutations::default();
        for mutation in MutationType::iter() {
            let level = species.innate_mutation(mutation);
            if level > 0 {
                mutations.set_innate_level(mutation, level);
            }
        }

        Self {
            name: name.into(),
            species,
            experience_level: 1,
            pos: Position::default(),
            stats: Stats::default(),
            hp: 30,
            hp_max: 30,
            base_hp_max: 30,
            form: Transformation::None,
            transform_power: None,
            storm_power: None,
            transform_uncancellable: false,
            appendages: Vec::new(),
            durations: Durations::default(),
            mutations,
            equipment: Equipment::default(),
            inventory: Vec::new(),
            religion: Religion::default(),
            bondage: 0,
            held: None,
            constricting: Vec::new(),
            constricted_by: None,
            fishtail: false,
            vampire_alive: species.undead_state() == UndeadState::Semi,
            redraw: Redraw::empty(),
            received_weapon_warning: false,
            digging: false,
            flay_damage: 0,
            exp_drain: 0,
            delay: None,
            emergency_flight: false,
            death: None,
            turn_is_over: false,
        }
    }

    // ── Stats ────────────────────────────────────────────────────────────

    pub fn stat(&self, stat: Stat) -> i32 {
        self.stats.get(stat)
    }

    pub fn strength(&self) -> i32 {
        self.stat(Stat::Strength)
    }

    pub fn dexterity(&self) -> i32 {
        self.stat(Stat::Dexterity)
    }

    pub fn intelligence(&self) -> i32 {
        self.stat(Stat::Intelligence)
    }

    pub fn set_stat(&mut self, stat: Stat, value: i32) {
        self.stats.set(stat, value);
        self.redraw |= Redraw::STATS;
    }

    /// Add a signed delta to a stat
    pub fn adjust_stat(&mut self, stat: Stat, delta: i32) {
        if delta == 0 {
            return;
        }
        self.stats.modify(stat, delta);
        self.redraw |= Redraw::STATS;
        tracing::trace!(%stat, delta, value = self.stat(stat), "stat adjusted");
    }

    // ── Hit points ───────────────────────────────────────────────────────

    /// Recompute maximum hit points from the current form, keeping the
    /// current/maximum ratio.
    pub fn calc_hp(&mut self) {
        let old_max = self.hp_max;
        let new_max = (self.base_hp_max * get_form(self.form).hp_mod / 10).max(1);
        self.hp = if old_max > 0 {
            (i64::from(self.hp) * i64::from(new_max) / i64::from(old_max)) as i32
        } else {
            new_max
        };
        self.hp_max = new_max;
        self.redraw |= Redraw::HIT_POINTS;
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.hp_max);
        self.redraw |= Redraw::HIT_POINTS;
    }

    /// Record a death; the first cause sticks
    pub fn die(&mut self, cause: DeathCause, aux: impl Into<String>) {
        if self.death.is_none() {
            let aux = aux.into();
            tracing::debug!(%cause, %aux, "player died");
            self.death = Some(Death { cause, aux });
        }
    }

    pub fn is_dead(&self) -> bool {
        self.death.is_some()
    }

    /// Drain experience
    pub fn drain(&mut self, amount: i32) {
        self.exp_drain += amount;
    }

    // ── Body ─────────────────────────────────────────────────────────────

    pub fn body_size(&self) -> BodySize {
        get_form(self.form)
            .size
            .unwrap_or_else(|| self.species.body_size())
    }

    /// Undead state, counting lich form as fully undead
    pub fn undead_state(&self) -> UndeadState {
        if self.form == Transformation::Lich {
            return UndeadState::Full;
        }
        match self.species.undead_state() {
            UndeadState::Semi if self.vampire_alive => UndeadState::Alive,
            state => state,
        }
    }

    pub fn holiness(&self) -> Holiness {
        if self.undead_state() != UndeadState::Alive {
            return Holiness::Undead;
        }
        if let Some(holiness) = get_form(self.form).holiness {
            return holiness;
        }
        if self.species.is_nonliving() {
            Holiness::Nonliving
        } else {
            Holiness::Natural
        }
    }

    /// Active mutation level; body mutations are suppressed by forms that
    /// do not keep mutations.
    pub fn mutation_level(&self, mutation: MutationType) -> u8 {
        if mutation.def().physical && !get_form(self.form).keeps_mutations {
            return 0;
        }
        self.mutations.base_level(mutation)
    }

    pub fn has_mutation(&self, mutation: MutationType) -> bool {
        self.mutation_level(mutation) > 0
    }

    pub fn invisible(&self) -> bool {
        self.durations.is_active(Duration::Invisibility)
    }

    pub fn hand_name(&self, plural: bool) -> &'static str {
        self.species.hand_name(plural)
    }

    // ── Flight ───────────────────────────────────────────────────────────

    pub fn racial_permanent_flight(&self) -> bool {
        self.species.racial_permanent_flight(self.experience_level)
    }

    /// Number of worn, unmelded items granting flight
    pub fn equip_flight(&self) -> usize {
        self.equipment
            .iter_worn()
            .filter(|(_, item)| item.grants_flight())
            .count()
    }

    pub fn permanent_flight(&self, include_equip: bool) -> bool {
        self.racial_permanent_flight() || (include_equip && self.equip_flight() > 0)
    }

    pub fn airborne(&self) -> bool {
        let form = get_form(self.form);
        if form.forbids_flight() {
            return false;
        }
        self.durations.is_active(Duration::Flight)
            || self.emergency_flight
            || self.permanent_flight(true)
            || form.enables_flight()
    }

    // ── Equipment ────────────────────────────────────────────────────────

    /// Apply an item's effects on equipping or unmelding it
    pub fn equip_effect(&mut self, slot: EquipSlot) {
        if let Some((stat, amount)) = self.equipment.item(slot).and_then(|i| i.stat_bonus) {
            self.adjust_stat(stat, amount);
        }
        if slot == EquipSlot::Weapon {
            self.redraw |= Redraw::WIELD;
        }
    }

    /// Remove an item's effects on unequipping or melding it
    pub fn unequip_effect(&mut self, slot: EquipSlot) {
        if let Some((stat, amount)) = self.equipment.item(slot).and_then(|i| i.stat_bonus) {
            self.adjust_stat(stat, -amount);
        }
        if slot == EquipSlot::Weapon {
            self.redraw |= Redraw::WIELD;
        }
    }

    /// Equip an item and apply its effects; a displaced item goes to the pack
    pub fn equip(&mut self, slot: EquipSlot, item: Item) {
        self.unequip_item(slot);
        self.equipment.put(slot, item);
        self.equip_effect(slot);
    }

    /// Take off whatever is in `slot` and put it in the pack. A melded item
    /// has no active effects, so none are removed.
    pub fn unequip_item(&mut self, slot: EquipSlot) -> bool {
        if self.equipment.item(slot).is_none() {
            return false;
        }
        if !self.equipment.is_melded(slot) {
            self.unequip_effect(slot);
        }
        if let Some(item) = self.equipment.take(slot) {
            self.inventory.push(item);
        }
        true
    }

    pub fn unwield(&mut self) -> bool {
        let unwielded = self.unequip_item(EquipSlot::Weapon);
        self.redraw |= Redraw::WIELD | Redraw::QUIVER;
        unwielded
    }

    /// Body restrictions on wearing armour, independent of form
    pub fn can_wear_armour(&self, item: &Item) -> bool {
        let Some(slot) = item.armour_slot else {
            return false;
        };
        let species = self.species;
        match slot {
            EquipSlot::Boots => {
                if species.wears_barding() {
                    item.is_barding()
                } else {
                    !item.is_barding()
                        && !matches!(species, Species::Octopode | Species::Felid)
                        && !self.fishtail
                        && self.mutation_level(MutationType::Talons) < 3
                }
            }
            EquipSlot::Gloves => {
                !matches!(species, Species::Octopode | Species::Felid)
                    && self.mutation_level(MutationType::Claws) < 3
            }
            EquipSlot::Helmet => self.mutation_level(MutationType::Horns) < 3,
            EquipSlot::BodyArmour => !matches!(species, Species::Octopode | Species::Felid),
            _ => true,
        }
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Interrupt the current multi-turn action. Relocations (travel, running)
    /// survive unless `stop_relocation` is set.
    pub fn stop_delay(&mut self, stop_relocation: bool) {
        match self.delay {
            Some(delay) if delay.is_relocation() && !stop_relocation => {}
            Some(delay) => {
                tracing::trace!(%delay, "delay interrupted");
                self.delay = None;
            }
            None => {}
        }
    }
}
