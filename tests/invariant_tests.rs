//! Property tests over random command sequences.
//!
//! Whatever the player presses, the board must keep every card exactly
//! once, foundations must stay ordered, face-up tableau runs must stay
//! valid, and a rejected command must change nothing.

use proptest::prelude::*;

use klondike::{Command, Deck, GameRng, GameState, KlondikeConfig, Outcome, DECK_SIZE};

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => Just(Command::FlipStock),
        2 => Just(Command::ToggleWasteSelection),
        2 => Just(Command::NavigateLeft),
        2 => Just(Command::NavigateRight),
        2 => Just(Command::NavigateUp),
        2 => Just(Command::NavigateDown),
        3 => Just(Command::MoveToFoundation),
        5 => (1u8..=7).prop_map(Command::MoveToPile),
        1 => (0u8..=9).prop_map(Command::MoveToPile),
    ]
}

fn assert_selection_valid(state: &GameState) {
    let selection = state.selection();
    let column = state.board().column(selection.column);
    match column.get(selection.row) {
        Some(card) => assert!(card.face_up, "selection on face-down card: {selection:?}"),
        None => assert!(column.is_empty() && selection.row == 0, "dangling row: {selection:?}"),
    }
}

proptest! {
    #[test]
    fn prop_invariants_hold(
        seed in any::<u64>(),
        commands in prop::collection::vec(command_strategy(), 0..300),
    ) {
        let deck = Deck::shuffled(&mut GameRng::new(seed));
        let mut state = GameState::with_deck(deck, &KlondikeConfig::default().with_seed(seed));

        for command in commands {
            let board = state.board().clone();
            let selection = *state.selection();

            match state.apply(command) {
                Outcome::Rejected(_) => {
                    prop_assert_eq!(state.board(), &board);
                    prop_assert_eq!(state.selection(), &selection);
                }
                Outcome::Applied => {
                    if command.is_navigation() {
                        prop_assert_eq!(state.board(), &board);
                    }
                }
                Outcome::Quit => unreachable!("quit is never generated"),
            }

            prop_assert_eq!(state.board().validate_complete(), Ok(()));
            prop_assert_eq!(state.board().card_count(), DECK_SIZE);
            assert_selection_valid(&state);
        }
    }

    #[test]
    fn prop_toggle_twice_is_identity(
        seed in any::<u64>(),
        // Up to one full pass of the 24-card stock, so the waste is never
        // emptied by a recycle while still selected.
        flips in 0usize..9,
    ) {
        let deck = Deck::shuffled(&mut GameRng::new(seed));
        let mut state = GameState::with_deck(deck, &KlondikeConfig::default());
        for _ in 0..flips {
            state.apply(Command::FlipStock);
        }
        let before = *state.selection();

        state.apply(Command::ToggleWasteSelection);
        state.apply(Command::ToggleWasteSelection);

        prop_assert_eq!(state.selection(), &before);
    }

    #[test]
    fn prop_flip_empty_stock_preserves_count(
        seed in any::<u64>(),
    ) {
        let deck = Deck::shuffled(&mut GameRng::new(seed));
        let mut state = GameState::with_deck(deck, &KlondikeConfig::default());
        while state.board().stock_len() > 0 {
            state.apply(Command::FlipStock);
        }
        let waste = state.board().waste().to_vec();

        prop_assert_eq!(state.apply(Command::FlipStock), Outcome::Applied);
        prop_assert_eq!(state.board().stock(), waste.as_slice());
        prop_assert!(state.board().waste().is_empty());
        prop_assert_eq!(state.board().card_count(), DECK_SIZE);
    }
}
