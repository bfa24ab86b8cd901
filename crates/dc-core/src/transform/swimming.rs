//! Merfolk tails
//!
//! A merfolk standing in water swaps legs for a tail, which melds their
//! boots; leaving the water brings the boots back.

use super::melding::{ash_check_bondage, remove_one_equip, unmeld_one_equip};
use crate::gameloop::GameState;
use crate::object::EquipSlot;
use crate::player::{MutationType, Redraw};

/// Start or stop swimming to match the player's position. Safe to call
/// after any move or change of form.
pub fn merfolk_check_swimming(state: &mut GameState, stepped: bool) {
    let feature = state.level.feature_at(state.player.pos);
    if !state.player.airborne()
        && feature.is_water()
        && state.player.has_mutation(MutationType::Mertail)
    {
        merfolk_start_swimming(state, stepped);
    } else {
        merfolk_stop_swimming(state);
    }
}

pub fn merfolk_start_swimming(state: &mut GameState, stepped: bool) {
    if state.player.fishtail {
        return;
    }

    if stepped {
        state.message("Your legs become a tail as you enter the water.");
    } else {
        state.message("Your legs become a tail as you dive into the water.");
    }
    if state.player.invisible() {
        state.message("...but don't expect to remain undetected.");
    }

    state.player.fishtail = true;
    remove_one_equip(state, EquipSlot::Boots, true, false);
    state.player.redraw |= Redraw::EVASION;
    ash_check_bondage(&mut state.player);
}

pub fn merfolk_stop_swimming(state: &mut GameState) {
    if !state.player.fishtail {
        return;
    }
    state.player.fishtail = false;
    unmeld_one_equip(state, EquipSlot::Boots);
    state.player.redraw |= Redraw::EVASION;
    ash_check_bondage(&mut state.player);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Feature;
    use crate::object::Item;
    use crate::player::{Duration, Species, You};

    fn merfolk_in_boots() -> GameState {
        let mut you = You::new("Ariel", Species::Merfolk);
        you.equip(
            EquipSlot::Boots,
            Item::armour("pair of boots", EquipSlot::Boots).with_quantity(2),
        );
        GameState::new(you, 1)
    }

    #[test]
    fn test_tail_melds_boots() {
        let mut state = merfolk_in_boots();
        let pos = state.player.pos;
        state.level.set_feature(pos, Feature::DeepWater);

        merfolk_check_swimming(&mut state, true);
        assert!(state.player.fishtail);
        assert!(state.player.equipment.is_melded(EquipSlot::Boots));
        assert_eq!(
            state.message_texts(),
            vec![
                "Your legs become a tail as you enter the water.",
                "Your pair of boots meld into your body.",
            ]
        );

        // Already swimming: nothing happens.
        state.clear_messages();
        merfolk_check_swimming(&mut state, true);
        assert!(state.messages.is_empty());

        state.level.set_feature(pos, Feature::Floor);
        merfolk_check_swimming(&mut state, true);
        assert!(!state.player.fishtail);
        assert!(!state.player.equipment.is_melded(EquipSlot::Boots));
        assert_eq!(
            state.message_texts(),
            vec!["Your pair of boots unmeld from your body."]
        );
    }

    #[test]
    fn test_invisible_dive() {
        let mut state = merfolk_in_boots();
        state.player.durations.set(Duration::Invisibility, 30);
        merfolk_start_swimming(&mut state, false);
        assert_eq!(
            &state.message_texts()[..2],
            &[
                "Your legs become a tail as you dive into the water.",
                "...but don't expect to remain undetected.",
            ]
        );
    }

    #[test]
    fn test_humans_never_grow_tails() {
        let mut state = GameState::new(You::default(), 1);
        let pos = state.player.pos;
        state.level.set_feature(pos, Feature::ShallowWater);
        merfolk_check_swimming(&mut state, true);
        assert!(!state.player.fishtail);
    }
}
