//! Equipment melding
//!
//! Works out which equipped items a form cannot use, and takes them off or
//! melds them into the body on entry; unmelds them again on exit. Slots are
//! always walked in canonical order, so the messages come out the same way
//! every time.

use super::form::{Transformation, form_can_wield, get_form};
use crate::gameloop::GameState;
use crate::object::{EquipSlot, SlotMask, is_shield_incompatible};
use crate::player::{Redraw, You};
use crate::world::MessageChannel;
use crate::world::messages::uppercase_first;

/// Slots whose items must come off or meld for `tran`, given current gear
pub fn equipment_removal(you: &You, tran: Transformation) -> SlotMask {
    let form = get_form(tran);
    let mut result = SlotMask::empty();

    let weapon = you.equipment.item(EquipSlot::Weapon);
    if (weapon.is_some() && !form.can_wield()) || you.equipment.is_melded(EquipSlot::Weapon) {
        result |= SlotMask::WEAPON;
    }
    // Liches can wield, but not holy weapons.
    if tran == Transformation::Lich && weapon.is_some_and(|w| w.is_holy()) {
        result |= SlotMask::WEAPON;
    }

    for (slot, item) in you.equipment.iter() {
        if slot == EquipSlot::Weapon {
            continue;
        }
        let blocked = form.blocked_slots.has(slot);
        let unwearable = slot != EquipSlot::RingAmulet && !form.can_wear_item(item);
        if blocked || unwearable {
            result |= slot.mask();
        }
    }

    result
}

/// Take off or meld the items in `removed`.
///
/// Melding keeps the item in its slot without its effects. A weapon only
/// melds when the new form has no hands to wield it with; otherwise it is
/// dropped into the pack.
pub fn remove_equipment(
    state: &mut GameState,
    removed: SlotMask,
    tran: Transformation,
    meld: bool,
    mutation: bool,
) {
    let mut newly_melded = SlotMask::empty();

    for slot in removed.slots() {
        let Some(item) = state.player.equipment.item(slot) else {
            continue;
        };

        let mut unequip = !meld;
        if !unequip && slot == EquipSlot::Weapon && (form_can_wield(tran) || !item.is_weapon()) {
            unequip = true;
        }

        let name = item.name_your();
        let plural = item.is_plural();
        let curse_breaks = unequip && item.cursed && state.player.religion.god.breaks_curses();

        let msg = if curse_breaks {
            format!(
                "{} {} away, shattering the curse!",
                name,
                if plural { "fall" } else { "falls" }
            )
        } else if unequip {
            format!("{} {} away!", name, if plural { "fall" } else { "falls" })
        } else {
            format!(
                "{} {} into your body.",
                name,
                if plural { "meld" } else { "melds" }
            )
        };
        state.message(uppercase_first(&msg));

        if unequip {
            if slot == EquipSlot::Weapon {
                state.player.unwield();
                state.message("You are now empty-handed.");
            } else {
                state.player.unequip_item(slot);
            }
            if mutation {
                tracing::debug!(%slot, "mutation forced an item off");
            }
        } else if state.player.equipment.meld(slot) {
            newly_melded |= slot.mask();
        }
    }

    for slot in newly_melded.slots() {
        state.player.unequip_effect(slot);
    }
    if !removed.is_empty() {
        state.player.redraw |= Redraw::ARMOUR_CLASS | Redraw::EVASION;
    }

    ash_check_bondage(&mut state.player);
}

/// Unmeld one slot. Returns true if the item came back into use, false if
/// it no longer fits and was pushed off into the pack instead.
fn unmeld_slot(state: &mut GameState, slot: EquipSlot) -> bool {
    let Some(item) = state.player.equipment.item(slot) else {
        return false;
    };
    let you = &state.player;

    let force_remove = if slot == EquipSlot::Weapon {
        you.equipment
            .worn(EquipSlot::Shield)
            .is_some_and(|shield| is_shield_incompatible(item, shield))
    } else if !item.is_jewellery() {
        let two_handed = you
            .equipment
            .worn(EquipSlot::Weapon)
            .is_some_and(|w| w.is_two_handed());
        // The body may have changed (mutations) while the item was melded.
        !you.can_wear_armour(item) || (slot == EquipSlot::Shield && two_handed)
    } else {
        false
    };

    let name = uppercase_first(&item.name_your());
    let plural = item.is_plural();
    if force_remove {
        let verb = if plural { "are" } else { "is" };
        state.message(format!("{name} {verb} pushed off your body!"));
        tracing::debug!(%slot, "melded item no longer fits");
        state.player.unequip_item(slot);
        false
    } else {
        let verb = if plural { "unmeld" } else { "unmelds" };
        state.message(format!("{name} {verb} from your body."));
        state.player.equipment.unmeld(slot)
    }
}

/// Restore melded items in `melded`, in canonical order
pub fn unmeld_equipment(state: &mut GameState, melded: SlotMask) {
    let mut restored = SlotMask::empty();

    for slot in melded.slots() {
        if !state.player.equipment.is_melded(slot) {
            continue;
        }
        if unmeld_slot(state, slot) {
            restored |= slot.mask();
        }
    }

    for slot in restored.slots() {
        state.player.equip_effect(slot);
    }
    if !melded.is_empty() {
        state.player.redraw |= Redraw::ARMOUR_CLASS | Redraw::EVASION;
    }

    ash_check_bondage(&mut state.player);
}

/// Slots Lear's hauberk also covers
fn lears_takes_slot(slot: EquipSlot) -> bool {
    matches!(
        slot,
        EquipSlot::Helmet | EquipSlot::Gloves | EquipSlot::Boots | EquipSlot::BodyArmour
    )
}

pub(crate) fn wearing_lear(you: &You) -> bool {
    you.equipment
        .item(EquipSlot::BodyArmour)
        .is_some_and(|i| i.is_lear_hauberk())
}

/// Unmeld a single slot; Lear's hauberk is restored as a whole, and only if
/// the current form allows it.
pub fn unmeld_one_equip(state: &mut GameState, slot: EquipSlot) {
    let mut slot = slot;
    if lears_takes_slot(slot) && wearing_lear(&state.player) {
        if get_form(state.player.form)
            .blocked_slots
            .intersects(SlotMask::LEAR)
        {
            return;
        }
        slot = EquipSlot::BodyArmour;
    }
    unmeld_equipment(state, slot.mask());
}

/// Remove or meld a single slot; for Lear's hauberk the whole suit goes.
pub fn remove_one_equip(state: &mut GameState, slot: EquipSlot, meld: bool, mutation: bool) {
    let slot = if lears_takes_slot(slot) && wearing_lear(&state.player) {
        EquipSlot::BodyArmour
    } else {
        slot
    };
    let form = state.player.form;
    remove_equipment(state, slot.mask(), form, meld, mutation);
}

/// Would the player still be flying after the flight items they wear meld
/// into `tran`?
pub fn flying_in_new_form(you: &You, tran: Transformation) -> bool {
    let form = get_form(tran);
    if form.forbids_flight() {
        return false;
    }
    if form.player_can_fly(you) || you.racial_permanent_flight() {
        return true;
    }
    if !you.airborne() {
        return false;
    }

    let removed = equipment_removal(you, tran);
    let sources = you.equip_flight();
    let melded_sources = you
        .equipment
        .iter_worn()
        .filter(|(slot, item)| removed.has(*slot) && item.grants_flight())
        .count();
    sources > melded_sources
}

/// Ashenzari counts the cursed items the player actively wears.
pub fn ash_check_bondage(you: &mut You) {
    if !you.religion.god.breaks_curses() {
        you.bondage = 0;
        return;
    }
    let bondage = you.equipment.iter_worn().filter(|(_, i)| i.cursed).count() as i32;
    if bondage != you.bondage {
        tracing::trace!(old = you.bondage, new = bondage, "bondage recomputed");
        you.bondage = bondage;
        you.redraw |= Redraw::TITLE;
    }
}

/// Report a form's melding to the player before committing to it
pub fn describe_melding(state: &mut GameState, tran: Transformation) {
    if let Some(text) = get_form(tran).melding_description() {
        state.message_on(MessageChannel::Prompt, text);
    }
}
