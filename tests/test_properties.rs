//! Property-based tests for the game model.
//!
//! These drive engines with arbitrary intent sequences and assert the
//! invariants that must survive any of them.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use tilepress::{Coord, Dictionary, GameConfig, GameEngine, GameError, PlayerId};

/// One call a presentation layer could make.
#[derive(Clone, Debug)]
enum Intent {
    Toggle(usize, usize),
    Submit,
    Pass,
    Clear,
}

fn apply(game: &mut GameEngine, intent: &Intent) -> Result<(), GameError> {
    match *intent {
        Intent::Toggle(row, col) => game.toggle_letter(row, col),
        Intent::Submit => game.submit(),
        Intent::Pass => game.pass(),
        Intent::Clear => game.clear_selection(),
    }
}

/// Every one- and two-letter string, so short selections often land and
/// longer ones get rejected.
fn permissive_dictionary() -> Dictionary {
    let mut words = Vec::new();
    for a in b'A'..=b'Z' {
        words.push((a as char).to_string());
        for b in b'A'..=b'Z' {
            words.push(format!("{}{}", a as char, b as char));
        }
    }
    Dictionary::from_words(words)
}

/// Strategy: board dimensions plus a matching letter string.
fn board_strategy() -> impl Strategy<Value = (usize, usize, String)> {
    (1..=4usize, 1..=4usize).prop_flat_map(|(rows, cols)| {
        (
            Just(rows),
            Just(cols),
            prop::collection::vec(b'A'..=b'Z', rows * cols)
                .prop_map(|bytes| bytes.into_iter().map(char::from).collect()),
        )
    })
}

/// Strategy: one in-bounds intent, biased toward toggles.
fn intent_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Intent> {
    prop_oneof![
        4 => (0..rows, 0..cols).prop_map(|(row, col)| Intent::Toggle(row, col)),
        2 => Just(Intent::Submit),
        1 => Just(Intent::Pass),
        1 => Just(Intent::Clear),
    ]
}

/// Strategy: a board and an intent sequence to drive it with.
fn game_strategy() -> impl Strategy<Value = ((usize, usize, String), Vec<Intent>)> {
    board_strategy().prop_flat_map(|board| {
        let intents = prop::collection::vec(intent_strategy(board.0, board.1), 0..60);
        (Just(board), intents)
    })
}

/// The invariants that must hold between any two intents.
fn check_invariants(game: &GameEngine) -> Result<(), TestCaseError> {
    // Tallies cover the board, and scores mirror them
    let counts = game.grid().count_by_owner();
    prop_assert_eq!(counts.total(), game.grid().len());
    for player in PlayerId::ALL {
        prop_assert_eq!(game.player(player).score as usize, counts.owned_by(player));
    }

    // Stored defense flags always match a fresh evaluation of the rule
    for cell in game.grid().iter() {
        prop_assert_eq!(cell.defended(), game.grid().is_defended(cell.coord()));
        if cell.defended() {
            prop_assert!(cell.owner().is_some());
        }
    }

    // The selection never holds duplicates
    let mut seen = HashSet::new();
    for &coord in game.selection().letters() {
        prop_assert!(seen.insert(coord), "duplicate {} in selection", coord);
    }

    // Played words stay distinct case-insensitively
    let mut words = HashSet::new();
    for entry in game.played_words().iter() {
        prop_assert!(
            words.insert(entry.word.to_lowercase()),
            "duplicate played word {:?}",
            entry.word
        );
    }

    Ok(())
}

proptest! {
    // 1. Core invariants survive any intent sequence
    #[test]
    fn state_invariants_hold(((rows, cols, letters), intents) in game_strategy()) {
        let mut game = GameEngine::new(
            GameConfig::fixed(rows, cols, letters),
            permissive_dictionary(),
            42,
        );
        check_invariants(&game)?;

        for intent in &intents {
            let _ = apply(&mut game, intent);
            check_invariants(&game)?;
        }
    }

    // 2. A terminated game rejects every intent and never changes
    #[test]
    fn terminated_games_are_inert(((rows, cols, letters), intents) in game_strategy()) {
        let mut game = GameEngine::new(
            GameConfig::fixed(rows, cols, letters),
            permissive_dictionary(),
            42,
        );

        for intent in &intents {
            if game.is_terminated() {
                let text = game.grid().text();
                let one = game.player(PlayerId::One).score;
                let two = game.player(PlayerId::Two).score;

                prop_assert_eq!(apply(&mut game, intent), Err(GameError::GameOver));
                prop_assert!(game.is_terminated());
                prop_assert_eq!(game.grid().text(), text);
                prop_assert_eq!(game.player(PlayerId::One).score, one);
                prop_assert_eq!(game.player(PlayerId::Two).score, two);
            } else {
                let _ = apply(&mut game, intent);
            }
        }
    }

    // 3. From any live position, at most two passes end the game
    #[test]
    fn two_passes_always_finish(((rows, cols, letters), intents) in game_strategy()) {
        let mut game = GameEngine::new(
            GameConfig::fixed(rows, cols, letters),
            permissive_dictionary(),
            42,
        );
        for intent in &intents {
            let _ = apply(&mut game, intent);
        }

        if !game.is_terminated() {
            let _ = game.pass();
        }
        if !game.is_terminated() {
            let _ = game.pass();
        }
        prop_assert!(game.is_terminated());
    }

    // 4. Toggling a cell twice restores membership; an unselected cell
    //    leaves the selection exactly as it was
    #[test]
    fn toggle_twice_restores_membership(
        prefix in prop::collection::vec((0..3usize, 0..3usize), 0..6),
        row in 0..3usize,
        col in 0..3usize,
    ) {
        let mut game = GameEngine::new(
            GameConfig::fixed(3, 3, "PDDODAGIP"),
            permissive_dictionary(),
            42,
        );
        for &(r, c) in &prefix {
            game.toggle_letter(r, c).unwrap();
        }

        let target = Coord::new(row, col);
        let was_selected = game.selection().contains(target);
        let before = game.selection().to_vec();

        game.toggle_letter(row, col).unwrap();
        game.toggle_letter(row, col).unwrap();

        if was_selected {
            // Removed then re-appended: same members, now at the back
            let mut expected: Vec<Coord> =
                before.iter().copied().filter(|&c| c != target).collect();
            expected.push(target);
            prop_assert_eq!(game.selection().to_vec(), expected);
        } else {
            prop_assert_eq!(game.selection().to_vec(), before);
        }
    }

    // 5. With an empty dictionary every submission is rejected and pure
    #[test]
    fn rejections_are_pure(((rows, cols, letters), intents) in game_strategy()) {
        let mut game = GameEngine::new(
            GameConfig::fixed(rows, cols, letters),
            Dictionary::from_words(Vec::<String>::new()),
            42,
        );

        for intent in &intents {
            if matches!(intent, Intent::Submit) && !game.is_terminated() {
                let grid = game.grid().clone();
                let selection = game.selection().to_vec();
                let current = game.current_player();

                prop_assert!(game.submit().is_err());
                prop_assert_eq!(game.grid(), &grid);
                prop_assert_eq!(game.selection().to_vec(), selection);
                prop_assert_eq!(game.current_player(), current);
            } else {
                let _ = apply(&mut game, intent);
            }
        }
        prop_assert!(game.played_words().is_empty());
    }

    // 6. The same configuration and seed always build the same board
    #[test]
    fn boards_are_reproducible(rows in 1..=6usize, cols in 1..=6usize, seed in any::<u64>()) {
        let config = GameConfig::new(rows, cols);

        let a = GameEngine::new(config.clone(), permissive_dictionary(), seed);
        let b = GameEngine::new(config, permissive_dictionary(), seed);
        prop_assert_eq!(a.grid().text(), b.grid().text());
    }
}

// 7. A scripted full game holds its invariants at every step and ends
//    with the scores accounting for the whole board (non-proptest)
#[test]
fn full_game_accounting() {
    let mut game = GameEngine::new(
        GameConfig::fixed(2, 2, "NOON"),
        Dictionary::from_words(["no", "on"]),
        42,
    );

    game.toggle_letter(0, 0).unwrap();
    game.toggle_letter(0, 1).unwrap();
    game.submit().unwrap(); // player one: NO

    game.toggle_letter(1, 0).unwrap();
    game.toggle_letter(1, 1).unwrap();
    game.submit().unwrap(); // player two: ON

    assert!(game.is_terminated());
    let one = game.player(PlayerId::One).score as usize;
    let two = game.player(PlayerId::Two).score as usize;
    assert_eq!(one + two, game.grid().len());
    assert_eq!(game.status().result(), Some(tilepress::GameResult::Tie));
}
