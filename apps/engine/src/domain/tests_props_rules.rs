use proptest::prelude::*;

use crate::domain::cards::{CardKind, CardSelection};
use crate::domain::direction::{correct_direction, Direction};
use crate::domain::outcome::{apply_reveal, draw_award};
use crate::domain::rules::move_cost;
use crate::domain::run_state::RunState;

fn any_selection() -> impl Strategy<Value = CardSelection> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(shield, doubler, swift)| {
        let mut selection = CardSelection::NONE;
        if shield {
            selection = selection.with(CardKind::Shield);
        }
        if doubler {
            selection = selection.with(CardKind::Doubler);
        }
        if swift {
            selection = selection.with(CardKind::Swift);
        }
        selection
    })
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Left), Just(Direction::Right)]
}

proptest! {
    /// The cost formula equals its closed form for every subset.
    #[test]
    fn cost_matches_closed_form(selection in any_selection()) {
        let n = selection.count() as u64;
        let base = (1 + n).max(1);
        let expected = if selection.contains(CardKind::Swift) {
            base.saturating_sub(2)
        } else {
            base
        };
        prop_assert_eq!(move_cost(&selection), expected);
    }

    /// Swift alone is free; nothing else ever is.
    #[test]
    fn only_swift_alone_is_free(selection in any_selection()) {
        let cost = move_cost(&selection);
        let swift_alone =
            selection.contains(CardKind::Swift) && selection.count() == 1;
        prop_assert_eq!(cost == 0, swift_alone);
    }

    /// Award draws stay inside the closed card set and the {1, 2} count range.
    #[test]
    fn award_is_well_formed(entropy in any::<[u8; 32]>(), selection in any_selection()) {
        let award = draw_award(&entropy, &selection);
        prop_assert!(CardKind::ALL.contains(&award.kind));
        let expected = if selection.contains(CardKind::Doubler) { 2 } else { 1 };
        prop_assert_eq!(award.count, expected);
    }

    /// Reachable run states never violate the core invariants, whatever the
    /// sequence of guesses and entropy looks like.
    #[test]
    fn outcome_sequences_preserve_invariants(
        path_length in 1u16..=6,
        steps in proptest::collection::vec(
            (any_direction(), any::<[u8; 32]>(), any_selection()),
            1..40,
        ),
    ) {
        let mut run = RunState::new();
        let mut wins = 0u32;
        let mut resets = 0u32;

        for (guessed, entropy, selection) in steps {
            // Grant whatever the move wants to spend; commit validation
            // guarantees ownership in the real flow.
            for kind in selection.iter() {
                if run.cards.count(kind) == 0 {
                    run.cards.add(kind, 1);
                }
            }

            let correct = correct_direction(&entropy);
            apply_reveal(&mut run, guessed, &selection, correct, path_length, &entropy);

            prop_assert!(run.position < path_length, "post-apply position is never at the end");
            prop_assert!(run.best_position <= path_length);
            prop_assert!(run.best_win_streak >= run.consecutive_wins);
            prop_assert!(run.games_won >= wins);
            prop_assert!(run.total_resets >= resets);
            prop_assert_eq!(run.games_won, run.system_breaches);
            wins = run.games_won;
            resets = run.total_resets;
        }
    }
}
