//! Legality checks run before a form is entered

use serde::{Deserialize, Serialize};
use strum::Display;

use super::form::{Transformation, form_likes_water, get_form};
use super::machine::Prompt;
use super::melding::flying_in_new_form;
use crate::dungeon::Feature;
use crate::gameloop::GameState;
use crate::player::{Duration, MutationType, UndeadState, You};
use crate::world::TransformError;

/// Whether `feature` would kill the player in `tran`. Flight, either from
/// the form or surviving the melding of flight gear, makes every feature safe.
pub fn feat_dangerous_for_form(you: &You, tran: Transformation, feature: Feature) -> bool {
    if flying_in_new_form(you, tran) {
        return false;
    }

    match feature {
        Feature::Lava => true,
        Feature::DeepWater => {
            !you.durations.is_active(Duration::WaterWalk) && !form_likes_water(tran, you)
        }
        _ => false,
    }
}

/// Terrain check for entering `tran` where the player stands
pub fn transformation_is_safe(
    you: &You,
    tran: Transformation,
    feature: Feature,
) -> Result<(), TransformError> {
    if !feat_dangerous_for_form(you, tran, feature) || you.durations.is_active(Duration::Flight) {
        return Ok(());
    }
    if feature == Feature::DeepWater {
        Err(TransformError::WouldDrown)
    } else {
        Err(TransformError::WouldBurn)
    }
}

/// Whether an undead body allows a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum UndeadFormReason {
    Good,
    /// Too undead, or a vampire too thirsty
    TooDead,
    /// A vampire too full of blood for bat form
    TooAlive,
}

impl UndeadFormReason {
    pub fn into_result(self) -> Result<(), TransformError> {
        match self {
            UndeadFormReason::Good => Ok(()),
            UndeadFormReason::TooDead => Err(TransformError::TooDead),
            UndeadFormReason::TooAlive => Err(TransformError::TooAlive),
        }
    }
}

/// Can the player's undead body take `tran`?
///
/// Every undead can enter shadow form. Vampires can enter bat form while
/// bloodless (not when forced), and any form but lich form while alive.
pub fn lifeless_prevents_form(you: &You, tran: Transformation, involuntary: bool) -> UndeadFormReason {
    if you.species.undead_state() == UndeadState::Alive {
        return UndeadFormReason::Good;
    }
    if matches!(tran, Transformation::None | Transformation::Shadow) {
        return UndeadFormReason::Good;
    }
    if !you.has_mutation(MutationType::Vampirism) {
        return UndeadFormReason::TooDead;
    }
    match tran {
        Transformation::Lich => UndeadFormReason::TooDead,
        Transformation::Bat if involuntary => UndeadFormReason::TooDead,
        Transformation::Bat if you.vampire_alive => UndeadFormReason::TooAlive,
        Transformation::Bat => UndeadFormReason::Good,
        _ if you.vampire_alive => UndeadFormReason::Good,
        _ => UndeadFormReason::TooDead,
    }
}

/// Would changing into `new_form` drop strength or dexterity to zero?
///
/// Returns true when it is fine to go ahead. A risky change fails outright
/// when `quiet`, and otherwise asks the player.
pub fn check_form_stat_safety(
    state: &mut GameState,
    new_form: Transformation,
    quiet: bool,
    prompt: &mut dyn Prompt,
) -> bool {
    let you = &state.player;
    let current = get_form(you.form);
    let target = get_form(new_form);
    let str_mod = target.str_mod - current.str_mod;
    let dex_mod = target.dex_mod - current.dex_mod;

    let bad_str = you.strength() > 0 && you.strength() + str_mod <= 0;
    let bad_dex = you.dexterity() > 0 && you.dexterity() + dex_mod <= 0;
    if !bad_str && !bad_dex {
        return true;
    }
    if quiet {
        return false;
    }

    let action = if new_form == Transformation::None {
        "Turning back"
    } else {
        "Transforming"
    };
    let stat = if bad_str { "strength" } else { "dexterity" };
    let question = format!("{action} will reduce your {stat} to zero. Continue?");
    if prompt.yesno(&question) {
        return true;
    }

    state.message(TransformError::Cancelled.to_string());
    false
}
