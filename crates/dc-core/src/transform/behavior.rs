//! Per-form behaviour
//!
//! Most forms are fully described by their table entry. The few that need
//! text or numbers that depend on the player (species, power, invisibility)
//! override individual hooks of [`FormBehavior`]; everything else falls back
//! to the defaults, which read the table.

use super::appendage;
use super::form::{Form, Resist, Transformation, blade_parts, get_form};
use crate::GameRng;
use crate::dungeon::Feature;
use crate::monster::{BodySize, MonsterKind};
use crate::player::{Species, UndeadState, You};
use crate::world::messages::comma_separated_line;

pub(crate) trait FormBehavior: Sync {
    /// Noun phrase for the form, e.g. "a stone statue"
    fn transform_description(&self, form: &Form, _you: &You) -> String {
        form.description.to_string()
    }

    fn long_name(&self, form: &Form, _you: &You) -> String {
        form.long_name.to_string()
    }

    fn description(&self, form: &Form, you: &You, past: bool) -> String {
        format!(
            "You {} {}.",
            if past { "were" } else { "are" },
            self.transform_description(form, you)
        )
    }

    fn transform_message(
        &self,
        form: &Form,
        you: &You,
        feature: Feature,
        previous: Transformation,
        _rng: &mut GameRng,
    ) -> String {
        let description = self.transform_description(form, you);
        let in_water = feature.is_water() && !you.airborne();
        if in_water && self.player_can_fly(form, you) {
            format!("You fly out of the water as you turn into {description}.")
        } else if feature.is_water()
            && get_form(previous).player_can_fly(you)
            && self.player_can_swim(form, you)
        {
            format!("As you dive into the water, you turn into {description}.")
        } else {
            format!("You turn into {description}.")
        }
    }

    fn untransform_message(&self, _form: &Form, _you: &You) -> Option<String> {
        Some("Your transformation has ended.".to_string())
    }

    fn uc_attack_name(&self, form: &Form, _you: &You, default_name: &str) -> String {
        let base = if form.uc_attack.is_empty() {
            default_name
        } else {
            form.uc_attack
        };
        with_brand(form, base)
    }

    fn base_unarmed_damage(&self, form: &Form, _you: &You, _rng: &mut GameRng) -> i32 {
        form.base_unarmed_damage
    }

    fn equivalent_mons(&self, form: &Form, _you: &You) -> MonsterKind {
        form.equivalent_mons
    }

    fn res_fire(&self, form: &Form, _you: &You) -> i32 {
        form.resist(Resist::Fire)
    }

    fn res_cold(&self, form: &Form, _you: &You) -> i32 {
        form.resist(Resist::Cold)
    }

    /// AC bonus in hundredths
    fn ac_bonus(&self, form: &Form, you: &You) -> i32 {
        form.flat_ac * 100
            + form.power_ac * you.transform_power.unwrap_or(0)
            + form.xl_ac * you.experience_level
    }

    fn can_offhand_punch(&self, form: &Form) -> bool {
        form.can_wield()
    }

    fn player_can_fly(&self, form: &Form, you: &You) -> bool {
        !form.forbids_flight() && (form.enables_flight() || you.racial_permanent_flight())
    }

    fn player_can_swim(&self, form: &Form, you: &You) -> bool {
        let size = form.size.unwrap_or_else(|| you.species.body_size());
        form.can_swim == super::form::Capability::Enable
            || (you.species.can_swim() && !form.forbids_swimming())
            || size >= BodySize::Giant
    }
}

fn with_brand(form: &Form, base: &str) -> String {
    match form.uc_brand.suffix() {
        Some(suffix) => format!("{base} ({suffix})"),
        None => base.to_string(),
    }
}

pub(crate) fn for_form(tran: Transformation) -> &'static dyn FormBehavior {
    match tran {
        Transformation::BladeHands => &BladeForm,
        Transformation::Statue => &StatueForm,
        Transformation::IceBeast => &IceForm,
        Transformation::Dragon => &DragonForm,
        Transformation::Lich => &LichForm,
        Transformation::Bat => &BatForm,
        Transformation::Appendage => &AppendageForm,
        Transformation::Tree => &TreeForm,
        Transformation::Fungus => &FungusForm,
        Transformation::Shadow => &ShadowForm,
        Transformation::Storm => &StormForm,
        Transformation::None
        | Transformation::Spider
        | Transformation::Pig
        | Transformation::Wisp => &PlainForm,
    }
}

struct PlainForm;
impl FormBehavior for PlainForm {}

// ─────────────────────────────────────────────────────────────────────────────
// Blade hands
// ─────────────────────────────────────────────────────────────────────────────

struct BladeForm;

impl FormBehavior for BladeForm {
    fn transform_description(&self, _form: &Form, you: &You) -> String {
        format!("blade {}", blade_parts(you, true))
    }

    fn long_name(&self, _form: &Form, you: &You) -> String {
        format!("blade {}", blade_parts(you, true))
    }

    fn description(&self, _form: &Form, you: &You, past: bool) -> String {
        format!(
            "You {} blades for {}.",
            if past { "had" } else { "have" },
            blade_parts(you, false)
        )
    }

    fn transform_message(
        &self,
        _form: &Form,
        you: &You,
        _feature: Feature,
        _previous: Transformation,
        _rng: &mut GameRng,
    ) -> String {
        format!(
            "Your {} turn into razor-sharp scythe blades.",
            blade_parts(you, false)
        )
    }

    fn untransform_message(&self, _form: &Form, you: &You) -> Option<String> {
        Some(format!(
            "Your {} revert to their normal proportions.",
            blade_parts(you, false)
        ))
    }

    fn uc_attack_name(&self, form: &Form, you: &You, _default_name: &str) -> String {
        with_brand(form, &format!("Blade {}", blade_parts(you, true)))
    }

    fn can_offhand_punch(&self, _form: &Form) -> bool {
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Statue
// ─────────────────────────────────────────────────────────────────────────────

struct StatueForm;

impl FormBehavior for StatueForm {
    fn transform_description(&self, _form: &Form, _you: &You) -> String {
        "a living statue of rough stone".to_string()
    }

    fn transform_message(
        &self,
        form: &Form,
        you: &You,
        _feature: Feature,
        _previous: Transformation,
        rng: &mut GameRng,
    ) -> String {
        match you.species {
            Species::DeepDwarf if rng.one_chance_in(10) => {
                "You inwardly fear your resemblance to a lawn ornament.".to_string()
            }
            Species::Gargoyle => "Your body stiffens and grows slower.".to_string(),
            _ => format!("You turn into {}.", self.transform_description(form, you)),
        }
    }

    fn untransform_message(&self, _form: &Form, you: &You) -> Option<String> {
        Some(if you.species == Species::Gargoyle {
            "You feel less stiff.".to_string()
        } else {
            "You revert to your slightly less stony self.".to_string()
        })
    }

    fn uc_attack_name(&self, form: &Form, you: &You, _default_name: &str) -> String {
        let parts = match you.species {
            Species::Felid => "paws",
            Species::Octopode => "tentacles",
            _ => "fists",
        };
        with_brand(form, &format!("Stone {parts}"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ice beast
// ─────────────────────────────────────────────────────────────────────────────

struct IceForm;

impl FormBehavior for IceForm {
    fn untransform_message(&self, _form: &Form, _you: &You) -> Option<String> {
        Some("You warm up again.".to_string())
    }

    fn uc_attack_name(&self, form: &Form, _you: &You, _default_name: &str) -> String {
        with_brand(form, "Ice paws")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dragon
// ─────────────────────────────────────────────────────────────────────────────

struct DragonForm;

impl FormBehavior for DragonForm {
    fn transform_description(&self, _form: &Form, you: &You) -> String {
        format!("a fearsome {}", you.species.dragon_form())
    }

    fn equivalent_mons(&self, _form: &Form, you: &You) -> MonsterKind {
        you.species.dragon_form()
    }

    fn res_fire(&self, form: &Form, you: &You) -> i32 {
        form.resist(Resist::Fire)
            + match you.species.dragon_form() {
                MonsterKind::FireDragon => 2,
                MonsterKind::IceDragon => -1,
                _ => 0,
            }
    }

    fn res_cold(&self, form: &Form, you: &You) -> i32 {
        form.resist(Resist::Cold)
            + match you.species.dragon_form() {
                MonsterKind::IceDragon => 2,
                MonsterKind::FireDragon => -1,
                _ => 0,
            }
    }

    fn ac_bonus(&self, form: &Form, you: &You) -> i32 {
        if you.species.is_draconian() {
            1000
        } else {
            form.flat_ac * 100
                + form.power_ac * you.transform_power.unwrap_or(0)
                + form.xl_ac * you.experience_level
        }
    }

    fn can_offhand_punch(&self, _form: &Form) -> bool {
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lich
// ─────────────────────────────────────────────────────────────────────────────

struct LichForm;

impl FormBehavior for LichForm {
    fn transform_message(
        &self,
        _form: &Form,
        _you: &You,
        _feature: Feature,
        _previous: Transformation,
        _rng: &mut GameRng,
    ) -> String {
        "Your body is suffused with negative energy!".to_string()
    }

    fn untransform_message(&self, _form: &Form, you: &You) -> Option<String> {
        Some(if you.species.undead_state() == UndeadState::Alive {
            "You feel yourself come back to life.".to_string()
        } else {
            "You feel your undeath return to normal.".to_string()
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bat
// ─────────────────────────────────────────────────────────────────────────────

struct BatForm;

impl FormBehavior for BatForm {
    fn transform_description(&self, _form: &Form, you: &You) -> String {
        self.equivalent_mons(get_form(Transformation::Bat), you)
            .a_name()
    }

    fn equivalent_mons(&self, _form: &Form, you: &You) -> MonsterKind {
        if you.species == Species::Vampire {
            MonsterKind::VampireBat
        } else {
            MonsterKind::Bat
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Appendage
// ─────────────────────────────────────────────────────────────────────────────

struct AppendageForm;

impl FormBehavior for AppendageForm {
    fn transform_description(&self, _form: &Form, you: &You) -> String {
        let parts: Vec<String> = you.appendages.iter().map(ToString::to_string).collect();
        format!("temporary {}", comma_separated_line(&parts))
    }

    fn description(&self, form: &Form, you: &You, past: bool) -> String {
        format!(
            "You {} grown {}.",
            if past { "had" } else { "have" },
            self.transform_description(form, you)
        )
    }

    fn transform_message(
        &self,
        _form: &Form,
        you: &You,
        _feature: Feature,
        _previous: Transformation,
        _rng: &mut GameRng,
    ) -> String {
        you.appendages
            .iter()
            .map(|app| appendage::grow_message(*app))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Each appendage reports its own loss instead.
    fn untransform_message(&self, _form: &Form, _you: &You) -> Option<String> {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tree, fungus
// ─────────────────────────────────────────────────────────────────────────────

struct TreeForm;

impl FormBehavior for TreeForm {
    fn untransform_message(&self, _form: &Form, _you: &You) -> Option<String> {
        Some("You feel less wooden.".to_string())
    }
}

struct FungusForm;

impl FormBehavior for FungusForm {
    fn untransform_message(&self, _form: &Form, _you: &You) -> Option<String> {
        Some("You stop sporulating.".to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shadow
// ─────────────────────────────────────────────────────────────────────────────

struct ShadowForm;

impl FormBehavior for ShadowForm {
    fn untransform_message(&self, _form: &Form, you: &You) -> Option<String> {
        Some(if you.invisible() {
            "You feel less shadowy.".to_string()
        } else {
            "You emerge from the shadows.".to_string()
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Storm
// ─────────────────────────────────────────────────────────────────────────────

struct StormForm;

impl FormBehavior for StormForm {
    fn base_unarmed_damage(&self, _form: &Form, you: &You, rng: &mut GameRng) -> i32 {
        2 + rng.div_rand_round(you.storm_power.unwrap_or(0) * 2, 5)
    }

    fn untransform_message(&self, _form: &Form, _you: &You) -> Option<String> {
        Some("The storm within you subsides.".to_string())
    }

    fn can_offhand_punch(&self, _form: &Form) -> bool {
        true
    }
}
