//! Transformation state machine
//!
//! [`transform`] validates a request completely before touching the player:
//! every refusal returns a [`TransformError`] with the player exactly as they
//! were. Only once all checks pass is the previous form exited and the new
//! one committed. [`untransform`] always returns the player to their own
//! body.

use super::appendage;
use super::form::{
    Transformation, form_can_fly, form_can_wield, form_changed_physiology, form_hp_mod,
    form_keeps_mutations, get_form, transform_name,
};
use super::melding::{
    ash_check_bondage, equipment_removal, remove_equipment, remove_one_equip, unmeld_equipment,
    wearing_lear,
};
use super::safety::{
    UndeadFormReason, feat_dangerous_for_form, lifeless_prevents_form, transformation_is_safe,
};
use super::swimming::{merfolk_check_swimming, merfolk_start_swimming, merfolk_stop_swimming};
use crate::gameloop::GameState;
use crate::monster::Holiness;
use crate::object::{EquipSlot, SlotMask};
use crate::player::{DeathCause, Duration, HeldBy, MutationType, Redraw, Stat};
use crate::world::{MessageChannel, TransformError};

/// Answers yes/no questions put to the player
pub trait Prompt {
    fn yesno(&mut self, question: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Prompt for F {
    fn yesno(&mut self, question: &str) -> bool {
        self(question)
    }
}

/// Prompt that agrees to everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Prompt for AutoConfirm {
    fn yesno(&mut self, _question: &str) -> bool {
        true
    }
}

/// A request to change form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformRequest {
    pub form: Transformation,
    /// Spell power; scales duration and some effects
    pub power: i32,
    /// Forced on the player: no confirmations, failures not shown
    pub involuntary: bool,
    /// Only check whether the change is possible
    pub dry_run: bool,
}

impl TransformRequest {
    pub fn new(form: Transformation, power: i32) -> Self {
        Self {
            form,
            power,
            involuntary: false,
            dry_run: false,
        }
    }

    pub fn involuntary(mut self) -> Self {
        self.involuntary = true;
        self
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

/// What a successful request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformOutcome {
    /// The player changed form
    Transformed,
    /// Already in the form; duration lengthened
    Extended,
    /// Already in the form; duration already at least as long
    NotExtended,
    /// Dry run: the change would be allowed
    Possible,
}

/// Change the player into `request.form`, or refresh the current form.
///
/// Note that a dry run can succeed where the real request fails, since
/// divine protection is only rolled for real requests.
pub fn transform(
    state: &mut GameState,
    request: TransformRequest,
    prompt: &mut dyn Prompt,
) -> Result<TransformOutcome, TransformError> {
    let TransformRequest {
        form: which,
        power,
        mut involuntary,
        dry_run,
    } = request;
    let previous = state.player.form;

    let god = state.player.religion.god;
    if !dry_run
        && which != Transformation::None
        && god.protects_from_polymorph()
        && state
            .rng
            .x_chance_in_y(state.player.religion.piety, state.options.max_piety)
    {
        tracing::debug!(%god, form = %which, "transformation vetoed");
        return Err(TransformError::Vetoed { god });
    }

    if state.acting_god.is_some() {
        involuntary = true;
    }

    if state.player.transform_uncancellable && which != previous {
        return Err(TransformError::Stuck);
    }

    let feature = state.level.feature_at(state.player.pos);
    transformation_is_safe(&state.player, which, feature)?;

    if previous == which {
        if dry_run {
            return Ok(TransformOutcome::Possible);
        }
        return Ok(refresh(state, which, power, involuntary));
    }

    lifeless_prevents_form(&state.player, which, involuntary).into_result()?;
    if which == Transformation::Lich && state.player.durations.is_active(Duration::DeathsDoor) {
        return Err(TransformError::DeathsDoor);
    }

    if which == Transformation::Lich
        && !involuntary
        && !dry_run
        && state.options.form_warnings
        && equipment_removal(&state.player, which).has(EquipSlot::Weapon)
    {
        if let Some(weapon) = state.player.equipment.worn(EquipSlot::Weapon) {
            let question = format!("Really unwield {}?", weapon.name_your());
            if !prompt.yesno(&question) {
                return Err(TransformError::Cancelled);
            }
        }
    }

    let appendages = if which == Transformation::Appendage {
        let chosen = appendage::select_appendages(&state.player);
        if chosen.is_empty() {
            return Err(TransformError::NoFreeBodyParts);
        }
        chosen
    } else {
        Vec::new()
    };

    if dry_run {
        return Ok(TransformOutcome::Possible);
    }

    commit(state, which, power, appendages);
    Ok(TransformOutcome::Transformed)
}

/// Re-cast of the current form: update power and lengthen the duration,
/// never shortening it.
fn refresh(
    state: &mut GameState,
    which: Transformation,
    power: i32,
    involuntary: bool,
) -> TransformOutcome {
    if which == Transformation::None {
        return TransformOutcome::NotExtended;
    }

    state.player.transform_power = Some(power);
    state.player.redraw |= Redraw::ARMOUR_CLASS;

    let turns = get_form(which).get_duration(power, &mut state.rng);
    let duration = turns * state.baseline_delay();
    if state.player.durations.get(Duration::Transformation) < duration {
        state.player.durations.set(Duration::Transformation, duration);
        state.message("You extend your transformation's duration.");
        TransformOutcome::Extended
    } else {
        if !involuntary {
            state.message("You fail to extend your transformation any further.");
        }
        TransformOutcome::NotExtended
    }
}

fn commit(
    state: &mut GameState,
    which: Transformation,
    power: i32,
    appendages: Vec<MutationType>,
) {
    let previous = state.player.form;
    let was_flying = state.player.airborne();

    if previous != Transformation::None {
        untransform(state, true);
    }

    let removed = equipment_removal(&state.player, which);

    state.player.redraw |= Redraw::EVASION | Redraw::ARMOUR_CLASS | Redraw::WIELD | Redraw::QUIVER;

    if form_changed_physiology(which) {
        merfolk_stop_swimming(state);
    }
    if which == Transformation::Storm {
        state.player.storm_power = Some(power);
    }
    state.player.appendages = appendages;

    let form = get_form(which);
    let feature = state.level.feature_at(state.player.pos);
    let entry = form.transform_message(&state.player, feature, previous, &mut state.rng);
    state.message(entry);

    remove_equipment(state, removed, which, true, false);

    state.player.form = which;
    let turns = form.get_duration(power, &mut state.rng);
    let delay = state.baseline_delay();
    state
        .player
        .durations
        .set(Duration::Transformation, turns * delay);
    state.player.transform_power = Some(power);

    state.player.adjust_stat(Stat::Strength, form.str_mod);
    state.player.adjust_stat(Stat::Dexterity, form.dex_mod);
    state.player.calc_hp();

    if state.player.digging && !form_keeps_mutations(which) {
        state.message("Your mandibles meld away.");
        state.player.digging = false;
    }

    apply_entry_effects(state, which);

    if !form_keeps_mutations(which) {
        state.player.constricting.clear();
    }
    release_from_constriction(state);

    if state.player.durations.is_active(Duration::Flayed)
        && state.player.holiness() != Holiness::Natural
    {
        let hp_mod = form_hp_mod(which);
        if hp_mod != 10 {
            let dam = state.player.flay_damage;
            state.player.heal(dam * hp_mod / 10 - dam);
        }
        state.player.durations.clear(Duration::Flayed);
        state.player.flay_damage = 0;
    }

    state.player.stop_delay(which == Transformation::Tree);

    if state.acting_god.is_some_and(|god| god.forces_forms()) {
        state.player.transform_uncancellable = true;
    }

    if was_flying && !state.player.airborne() {
        state.message("You float gracefully downwards.");
    }

    if state.player.emergency_flight && form_can_fly(which, &state.player) && state.player.airborne()
    {
        state.player.emergency_flight = false;
    }

    if state.player.mutations.innate_level(MutationType::Mertail) > 0 {
        merfolk_check_swimming(state, false);
    }

    ash_check_bondage(&mut state.player);

    if state.player.hp <= 0 {
        let aux = format!("gaining the {} transformation", transform_name(which));
        state.player.die(DeathCause::Frailty, aux);
    }

    tracing::debug!(
        form = %which,
        %previous,
        power,
        duration = state.player.durations.get(Duration::Transformation),
        melded = ?state.player.equipment.melded(),
        "transformation committed"
    );
}

fn apply_entry_effects(state: &mut GameState, which: Transformation) {
    match which {
        Transformation::Statue => {
            if state.player.durations.is_active(Duration::IcyArmour) {
                state.message_on(
                    MessageChannel::Duration,
                    "Your new body cracks your icy armour.",
                );
                state.player.durations.clear(Duration::IcyArmour);
            }
        }
        Transformation::Spider => {
            if state.player.held == Some(HeldBy::Web) {
                state.message("You disentangle yourself from the web.");
                state.player.held = None;
            }
        }
        Transformation::Tree => {
            state.message("Your roots penetrate the ground.");
            if state.player.durations.is_active(Duration::Teleport) {
                state.player.durations.clear(Duration::Teleport);
                state.message("You feel strangely stable.");
            }
            state.player.durations.clear(Duration::Flight);
            break_free(state);
        }
        Transformation::Dragon => break_free(state),
        Transformation::Lich => {
            if state.player.durations.is_active(Duration::Wereblood) {
                state.player.durations.clear(Duration::Wereblood);
                state.message("Your lifeless body cannot sustain the wereblood!");
            }
            state.player.redraw |= Redraw::STATUS_LIGHTS;
        }
        Transformation::Appendage => appendage::grant(&mut state.player),
        Transformation::Shadow => {
            state.player.drain(25);
            if state.player.invisible() {
                state.message("You fade into the shadows.");
            } else {
                state.message("You feel less conspicuous.");
            }
        }
        _ => {}
    }
}

/// Tear through whatever holds the player in place
fn break_free(state: &mut GameState) {
    if state.player.held.is_none() {
        return;
    }
    let pos = state.player.pos;
    if state.level.web_at(pos) {
        state.message("You shred the web into pieces!");
        state.level.destroy_web(pos);
    }
    if state.level.net_at(pos) {
        state.message("The net rips apart!");
        state.level.destroy_net(pos);
    }
    state.player.held = None;
}

fn release_from_constriction(state: &mut GameState) {
    if let Some(constrictor) = state.player.constricted_by {
        if state.player.body_size() > constrictor.size {
            tracing::trace!(monster = constrictor.monster_id, "too large to constrict");
            state.player.constricted_by = None;
        }
    }
}

/// End the current form and return the player to their own body.
///
/// Callers check that the player is transformed first. With `skip_move`
/// the player is not landed or rescued from the terrain they stand on.
pub fn untransform(state: &mut GameState, skip_move: bool) {
    let was_flying = state.player.airborne();
    let old_form = state.player.form;
    debug_assert!(
        old_form != Transformation::None,
        "untransform called without a form"
    );

    state.player.redraw |= Redraw::EVASION | Redraw::ARMOUR_CLASS | Redraw::WIELD | Redraw::QUIVER;
    if !form_can_wield(old_form) {
        state.player.received_weapon_warning = false;
    }
    state.player.transform_power = None;
    state.player.storm_power = None;

    let mut melded = equipment_removal(&state.player, old_form);

    state.player.form = Transformation::None;
    state.player.durations.clear(Duration::Transformation);

    if old_form == Transformation::Appendage {
        appendage::revert(state);
    }

    state.player.calc_hp();

    if let Some(msg) = get_form(old_form).get_untransform_message(&state.player) {
        state.message_on(MessageChannel::Duration, msg);
    }

    let form = get_form(old_form);
    state.player.adjust_stat(Stat::Strength, -form.str_mod);
    state.player.adjust_stat(Stat::Dexterity, -form.dex_mod);

    // A swimming merfolk keeps their boots melded into the tail.
    if state.player.fishtail {
        melded.remove(SlotMask::BOOTS);
        if wearing_lear(&state.player) {
            melded.remove(SlotMask::HELMET | SlotMask::GLOVES | SlotMask::BODY_ARMOUR);
        }
    }
    unmeld_equipment(state, melded);

    ash_check_bondage(&mut state.player);

    if !skip_move {
        let feature = state.level.feature_at(state.player.pos);
        if feat_dangerous_for_form(&state.player, Transformation::None, feature)
            && !state.player.airborne()
        {
            state.player.emergency_flight = true;
            state.message_on(
                MessageChannel::Warning,
                "You desperately keep yourself aloft!",
            );
        } else if was_flying && !state.player.airborne() {
            state.message("You float gracefully downwards.");
        }

        if state.player.mutations.innate_level(MutationType::Mertail) > 0 {
            merfolk_check_swimming(state, false);
        }
    }

    // Barding-wearers can't keep ordinary boots on their own body.
    if state.player.species.wears_barding()
        && state
            .player
            .equipment
            .worn(EquipSlot::Boots)
            .is_some_and(|boots| !boots.is_barding())
    {
        remove_one_equip(state, EquipSlot::Boots, true, false);
    }

    if state.player.hp <= 0 {
        let aux = format!("losing the {} form", transform_name(old_form));
        state.player.die(DeathCause::Frailty, aux);
    }

    release_from_constriction(state);

    state.player.turn_is_over = true;
    state.player.transform_uncancellable = false;

    tracing::debug!(form = %old_form, skip_move, "transformation ended");
}

/// Drop the current form at once, as when it is about to carry the player
/// into deadly terrain.
pub fn emergency_untransform(state: &mut GameState) {
    state.message("You quickly transform back into your natural form.");
    untransform(state, true);

    if state.player.mutations.innate_level(MutationType::Mertail) > 0 {
        merfolk_start_swimming(state, false);
    }
}

/// End a form a vampire's blood level can no longer sustain
pub fn vampire_update_transformations(state: &mut GameState) {
    let reason = lifeless_prevents_form(&state.player, state.player.form, false);
    if reason == UndeadFormReason::Good
        || !state.player.durations.is_active(Duration::Transformation)
    {
        return;
    }

    let text = if reason == UndeadFormReason::TooDead {
        "Your blood-deprived body can't sustain your transformation."
    } else {
        "Your blood-filled body can't sustain your transformation."
    };
    state.message_on(MessageChannel::Warning, text);
    untransform(state, false);
}

/// Show a refused request to the player. Divine interventions are always
/// shown; other refusals only when the player asked for the change.
pub fn report_failure(state: &mut GameState, err: &TransformError, involuntary: bool) {
    if err.is_divine() {
        state.message_on(MessageChannel::God, err.to_string());
    } else if !involuntary {
        state.message(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Feature;
    use crate::object::{Item, ItemProps};
    use crate::monster::BodySize;
    use crate::player::{Constrictor, God, Species, You};

    fn new_state() -> GameState {
        GameState::new(You::default(), 7)
    }

    fn enter_form(state: &mut GameState, form: Transformation) -> Result<TransformOutcome, TransformError> {
        transform(state, TransformRequest::new(form, 50), &mut AutoConfirm)
    }

    #[test]
    fn test_enter_and_leave() {
        let mut state = new_state();
        assert_eq!(enter_form(&mut state, Transformation::Spider), Ok(TransformOutcome::Transformed));
        assert_eq!(state.player.form, Transformation::Spider);
        assert_eq!(state.player.transform_power, Some(50));
        assert!(state.player.durations.get(Duration::Transformation) > 0);
        assert_eq!(state.message_texts()[0], "You turn into a venomous arachnid creature.");

        untransform(&mut state, false);
        assert_eq!(state.player.form, Transformation::None);
        assert_eq!(state.player.durations.get(Duration::Transformation), 0);
        assert_eq!(state.player.transform_power, None);
        assert!(state.player.turn_is_over);
    }

    #[test]
    fn test_switching_forms_exits_the_old_one() {
        let mut state = new_state();
        enter_form(&mut state, Transformation::Statue).unwrap();
        assert_eq!(state.player.strength(), 12);
        state.clear_messages();

        enter_form(&mut state, Transformation::IceBeast).unwrap();
        assert_eq!(state.player.form, Transformation::IceBeast);
        assert_eq!(state.player.strength(), 10);
        assert_eq!(state.player.dexterity(), 10);
        assert_eq!(
            state.message_texts()[0],
            "You revert to your slightly less stony self."
        );
    }

    #[test]
    fn test_refresh_messages() {
        let mut state = new_state();
        enter_form(&mut state, Transformation::Spider).unwrap();
        state.clear_messages();

        state.player.durations.set(Duration::Transformation, 1);
        assert_eq!(enter_form(&mut state, Transformation::Spider), Ok(TransformOutcome::Extended));
        assert_eq!(state.message_texts(), vec!["You extend your transformation's duration."]);

        state.clear_messages();
        state.player.durations.set(Duration::Transformation, 100_000);
        assert_eq!(enter_form(&mut state, Transformation::Spider), Ok(TransformOutcome::NotExtended));
        assert_eq!(
            state.message_texts(),
            vec!["You fail to extend your transformation any further."]
        );
        assert_eq!(state.player.durations.get(Duration::Transformation), 100_000);

        state.clear_messages();
        let forced = TransformRequest::new(Transformation::Spider, 10).involuntary();
        assert_eq!(transform(&mut state, forced, &mut AutoConfirm), Ok(TransformOutcome::NotExtended));
        assert!(state.messages.is_empty());
        assert_eq!(state.player.transform_power, Some(10));
    }

    #[test]
    fn test_zin_protects() {
        let mut state = new_state();
        state.player.religion.god = God::Zin;
        state.player.religion.piety = state.options.max_piety;
        assert_eq!(
            enter_form(&mut state, Transformation::Bat),
            Err(TransformError::Vetoed { god: God::Zin })
        );
        assert_eq!(state.player.form, Transformation::None);

        // Dry runs never roll for protection.
        let check = TransformRequest::new(Transformation::Bat, 50).dry_run();
        assert_eq!(transform(&mut state, check, &mut AutoConfirm), Ok(TransformOutcome::Possible));
    }

    #[test]
    fn test_stuck() {
        let mut state = new_state();
        enter_form(&mut state, Transformation::Pig).unwrap();
        state.player.transform_uncancellable = true;
        assert_eq!(enter_form(&mut state, Transformation::Bat), Err(TransformError::Stuck));
        assert_eq!(state.player.form, Transformation::Pig);
        // Refreshing the same form is still allowed.
        assert!(enter_form(&mut state, Transformation::Pig).is_ok());

        untransform(&mut state, true);
        assert!(!state.player.transform_uncancellable);
    }

    #[test]
    fn test_xom_locks_the_form() {
        let mut state = new_state();
        state.acting_god = Some(God::Xom);
        enter_form(&mut state, Transformation::Pig).unwrap();
        assert!(state.player.transform_uncancellable);
    }

    #[test]
    fn test_undead_and_deaths_door() {
        let mut state = GameState::new(You::new("Tut", Species::Mummy), 1);
        assert_eq!(enter_form(&mut state, Transformation::Spider), Err(TransformError::TooDead));
        assert!(enter_form(&mut state, Transformation::Shadow).is_ok());

        let mut vamp = GameState::new(You::new("Vlad", Species::Vampire), 1);
        assert_eq!(enter_form(&mut vamp, Transformation::Bat), Err(TransformError::TooAlive));

        let mut state = new_state();
        state.player.durations.set(Duration::DeathsDoor, 30);
        assert_eq!(enter_form(&mut state, Transformation::Lich), Err(TransformError::DeathsDoor));
    }

    #[test]
    fn test_holy_weapon_prompt() {
        let mut state = new_state();
        state.player.equip(
            EquipSlot::Weapon,
            Item::weapon("holy scourge").with_props(ItemProps::HOLY),
        );

        let mut asked = Vec::new();
        let mut decline = |q: &str| {
            asked.push(q.to_string());
            false
        };
        assert_eq!(
            transform(&mut state, TransformRequest::new(Transformation::Lich, 50), &mut decline),
            Err(TransformError::Cancelled)
        );
        assert_eq!(asked, vec!["Really unwield your holy scourge?"]);
        assert_eq!(state.player.form, Transformation::None);
        assert!(state.player.equipment.worn(EquipSlot::Weapon).is_some());

        state.options.form_warnings = false;
        let mut never = |_: &str| -> bool { panic!("should not prompt") };
        let request = TransformRequest::new(Transformation::Lich, 50);
        transform(&mut state, request, &mut never).unwrap();
        assert!(state.player.equipment.item(EquipSlot::Weapon).is_none());
        assert_eq!(state.player.inventory.len(), 1);
    }

    #[test]
    fn test_entry_side_effects() {
        let mut state = new_state();
        state.player.durations.set(Duration::IcyArmour, 20);
        enter_form(&mut state, Transformation::Statue).unwrap();
        assert!(!state.player.durations.is_active(Duration::IcyArmour));
        assert!(state.message_texts().contains(&"Your new body cracks your icy armour."));
        untransform(&mut state, true);

        let pos = state.player.pos;
        state.level.place_web(pos);
        state.player.held = Some(HeldBy::Web);
        state.player.durations.set(Duration::Teleport, 30);
        state.clear_messages();
        enter_form(&mut state, Transformation::Tree).unwrap();
        assert_eq!(state.player.held, None);
        assert!(!state.level.web_at(pos));
        assert!(!state.player.durations.is_active(Duration::Teleport));
        let texts = state.message_texts();
        assert!(texts.contains(&"Your roots penetrate the ground."));
        assert!(texts.contains(&"You feel strangely stable."));
        assert!(texts.contains(&"You shred the web into pieces!"));
        untransform(&mut state, true);

        state.player.durations.set(Duration::Wereblood, 30);
        state.clear_messages();
        enter_form(&mut state, Transformation::Lich).unwrap();
        assert!(!state.player.durations.is_active(Duration::Wereblood));
        assert!(state.message_texts().contains(&"Your lifeless body cannot sustain the wereblood!"));
        untransform(&mut state, true);

        state.clear_messages();
        enter_form(&mut state, Transformation::Shadow).unwrap();
        assert_eq!(state.player.exp_drain, 25);
        assert!(state.message_texts().contains(&"You feel less conspicuous."));
    }

    #[test]
    fn test_constriction_and_flaying() {
        let mut state = new_state();
        state.player.constricting = vec![3, 4];
        state.player.constricted_by = Some(Constrictor {
            monster_id: 9,
            size: BodySize::Large,
        });
        state.player.durations.set(Duration::Flayed, 40);
        state.player.flay_damage = 10;
        state.player.hp = 20;

        enter_form(&mut state, Transformation::Dragon).unwrap();
        assert!(state.player.constricting.is_empty());
        assert_eq!(state.player.constricted_by, None);
        // Dragons are natural; the flaying stays.
        assert!(state.player.durations.is_active(Duration::Flayed));
        untransform(&mut state, true);

        enter_form(&mut state, Transformation::Statue).unwrap();
        assert!(!state.player.durations.is_active(Duration::Flayed));
        assert_eq!(state.player.flay_damage, 0);
    }

    #[test]
    fn test_leaving_lava_safe_form_on_lava() {
        let mut state = new_state();
        enter_form(&mut state, Transformation::Dragon).unwrap();
        let pos = state.player.pos;
        state.level.set_feature(pos, Feature::Lava);
        state.clear_messages();

        untransform(&mut state, false);
        assert!(state.player.emergency_flight);
        assert!(state.player.airborne());
        assert!(state.message_texts().contains(&"You desperately keep yourself aloft!"));

        // A flying form takes over from the emergency flight.
        enter_form(&mut state, Transformation::Dragon).unwrap();
        assert!(!state.player.emergency_flight);
    }

    #[test]
    fn test_landing() {
        let mut state = new_state();
        enter_form(&mut state, Transformation::Bat).unwrap();
        assert!(state.player.airborne());
        state.clear_messages();
        untransform(&mut state, false);
        assert!(state.message_texts().contains(&"You float gracefully downwards."));
    }

    #[test]
    fn test_emergency_untransform() {
        let mut you = You::new("Ariel", Species::Merfolk);
        you.equip(EquipSlot::Boots, Item::armour("pair of boots", EquipSlot::Boots));
        let mut state = GameState::new(you, 1);
        enter_form(&mut state, Transformation::Statue).unwrap();
        let pos = state.player.pos;
        state.level.set_feature(pos, Feature::DeepWater);
        state.clear_messages();

        emergency_untransform(&mut state);
        assert_eq!(state.player.form, Transformation::None);
        assert!(state.player.fishtail);
        assert_eq!(
            state.message_texts()[0],
            "You quickly transform back into your natural form."
        );
        // The tail keeps the boots melded.
        assert!(state.player.equipment.is_melded(EquipSlot::Boots));
    }

    #[test]
    fn test_vampire_thirst_ends_form() {
        let mut state = GameState::new(You::new("Vlad", Species::Vampire), 1);
        enter_form(&mut state, Transformation::Spider).unwrap();
        vampire_update_transformations(&mut state);
        assert_eq!(state.player.form, Transformation::Spider);

        state.player.vampire_alive = false;
        state.clear_messages();
        vampire_update_transformations(&mut state);
        assert_eq!(state.player.form, Transformation::None);
        assert_eq!(
            state.message_texts()[0],
            "Your blood-deprived body can't sustain your transformation."
        );
    }

    #[test]
    fn test_frailty_kills() {
        let mut state = new_state();
        // Shadow form halves hit points, rounding this one away.
        state.player.base_hp_max = 2;
        state.player.hp_max = 2;
        state.player.hp = 1;
        enter_form(&mut state, Transformation::Shadow).unwrap();
        let death = state.player.death.as_ref().unwrap();
        assert_eq!(death.cause, DeathCause::Frailty);
        assert_eq!(death.aux, "gaining the shadow transformation");
    }

    #[test]
    fn test_report_failure() {
        let mut state = new_state();
        report_failure(&mut state, &TransformError::Stuck, true);
        assert!(state.messages.is_empty());
        report_failure(&mut state, &TransformError::Stuck, false);
        report_failure(&mut state, &TransformError::Vetoed { god: God::Zin }, true);
        assert_eq!(state.messages[0].channel, MessageChannel::Plain);
        assert_eq!(state.messages[1].channel, MessageChannel::God);
        assert_eq!(
            state.messages[1].text,
            "Zin protects your body from unnatural transformation!"
        );
    }
}
