//! Beastly appendages
//!
//! The appendage form grants every body-part mutation the player has room
//! for at a fixed level, and on exit takes back exactly that grant while
//! keeping any levels gained from elsewhere in the meantime.

use crate::gameloop::GameState;
use crate::player::{MutationType, You};
use crate::world::MessageChannel;

/// Mutations the appendage form can grant, in grant order
pub const APPENDAGES: [MutationType; 3] = [
    MutationType::Horns,
    MutationType::TentacleSpike,
    MutationType::Talons,
];

/// Level each appendage is granted at
pub fn beastly_level(mutation: MutationType) -> u8 {
    match mutation {
        MutationType::TentacleSpike => 3,
        MutationType::Horns | MutationType::Talons => 2,
        other => panic!("{other} is not an appendage"),
    }
}

/// Appendages the player's body has room for: no conflicting physiology and
/// no existing level of the mutation.
pub fn select_appendages(you: &You) -> Vec<MutationType> {
    let chosen: Vec<_> = APPENDAGES
        .into_iter()
        .filter(|app| {
            !you.species.mutation_conflict(*app) && you.mutations.base_level(*app) == 0
        })
        .collect();
    tracing::debug!(species = %you.species, ?chosen, "appendages selected");
    chosen
}

pub(crate) fn grow_message(mutation: MutationType) -> &'static str {
    match mutation {
        MutationType::Horns => "You grow a pair of large bovine horns.",
        MutationType::TentacleSpike => "One of your tentacles grows a vicious spike.",
        MutationType::Talons => "Your feet morph into talons.",
        other => panic!("{other} is not an appendage"),
    }
}

fn lose_message(mutation: MutationType, still_present: bool) -> &'static str {
    match (mutation, still_present) {
        (MutationType::Horns, true) => "Your horns shrink.",
        (MutationType::Horns, false) => "Your horns disappear.",
        (MutationType::TentacleSpike, true) => "Your tentacle spike shrinks.",
        (MutationType::TentacleSpike, false) => "Your tentacle spike disappears.",
        (MutationType::Talons, true) => "Your talons shrink.",
        (MutationType::Talons, false) => "Your talons disappear.",
        (other, _) => panic!("{other} is not an appendage"),
    }
}

/// Set every recorded appendage to its granted level
pub(crate) fn grant(you: &mut You) {
    for app in you.appendages.clone() {
        you.mutations.set_base_level(app, beastly_level(app));
    }
}

/// Take back the recorded appendages. Levels above innate plus the grant
/// were gained during the form and are kept.
pub(crate) fn revert(state: &mut GameState) {
    let appendages = std::mem::take(&mut state.player.appendages);
    for app in appendages {
        let levels = state.player.mutations.base_level(app);
        let innate = state.player.mutations.innate_level(app);
        let extra = levels.saturating_sub(innate).saturating_sub(beastly_level(app));
        state.player.mutations.set_base_level(app, innate + extra);

        if levels > 0 {
            let still_present = state.player.has_mutation(app);
            state.message_on(MessageChannel::Duration, lose_message(app, still_present));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Species;

    #[test]
    fn test_levels() {
        assert_eq!(beastly_level(MutationType::Horns), 2);
        assert_eq!(beastly_level(MutationType::Talons), 2);
        assert_eq!(beastly_level(MutationType::TentacleSpike), 3);
    }

    #[test]
    #[should_panic(expected = "is not an appendage")]
    fn test_unknown_appendage_panics() {
        beastly_level(MutationType::Claws);
    }

    #[test]
    fn test_selection_respects_body() {
        assert_eq!(
            select_appendages(&You::default()),
            vec![MutationType::Horns, MutationType::Talons]
        );
        assert_eq!(
            select_appendages(&You::new("Ink", Species::Octopode)),
            vec![MutationType::Horns, MutationType::TentacleSpike]
        );
        // Innate horns leave only the feet.
        assert_eq!(
            select_appendages(&You::new("Mino", Species::Minotaur)),
            vec![MutationType::Talons]
        );
        let mut naga = You::new("Sss", Species::Naga);
        naga.mutations.set_base_level(MutationType::Horns, 1);
        assert!(select_appendages(&naga).is_empty());
    }

    #[test]
    fn test_revert_keeps_extra_levels() {
        let mut state = GameState::new(You::default(), 1);
        state.player.appendages = vec![MutationType::Horns, MutationType::Talons];
        grant(&mut state.player);
        assert_eq!(state.player.mutations.base_level(MutationType::Horns), 2);
        // A horns mutation gained during the form survives it.
        state.player.mutations.gain(MutationType::Horns);
        revert(&mut state);
        assert_eq!(state.player.mutations.base_level(MutationType::Horns), 1);
        assert_eq!(state.player.mutations.base_level(MutationType::Talons), 0);
        assert!(state.player.appendages.is_empty());
        assert_eq!(
            state.message_texts(),
            vec!["Your horns shrink.", "Your talons disappear."]
        );
    }
}
