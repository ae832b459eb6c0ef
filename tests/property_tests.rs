//! Property-based tests: random move sequences against the engine
//! invariants.

use proptest::prelude::*;

use rust_ttt::core::{GameConfig, Mark};
use rust_ttt::engine::{GameEngine, MoveOutcome};
use rust_ttt::rules::has_winning_line;

proptest! {
    /// Whatever the caller throws at it, the engine only ever reports a
    /// win for a player holding a full line, rejections never mutate
    /// anything, and the scoreboard counts exactly the wins.
    #[test]
    fn prop_move_sequence_invariants(
        size in 1usize..=5,
        moves in proptest::collection::vec((0usize..8, 0usize..8), 0..96),
    ) {
        let mut engine = GameEngine::with_seed(GameConfig::new(size), 0);
        let mut wins = 0u32;

        for (row, col) in moves {
            let board_before = engine.board().clone();
            let player_before = engine.current_player();
            let scores_before = *engine.scores();

            match engine.submit_human_move(row, col) {
                MoveOutcome::Rejected => {
                    prop_assert_eq!(engine.board(), &board_before);
                    prop_assert_eq!(engine.current_player(), player_before);
                    prop_assert_eq!(*engine.scores(), scores_before);
                }
                MoveOutcome::Continue => {
                    prop_assert!(engine.is_active());
                    prop_assert_eq!(engine.current_player(), player_before.opponent());
                    // A continuing game has no winner yet.
                    prop_assert!(!has_winning_line(engine.board(), player_before));
                }
                MoveOutcome::Win(mark) => {
                    wins += 1;
                    prop_assert_eq!(mark, player_before);
                    prop_assert!(has_winning_line(engine.board(), mark));
                    prop_assert!(!engine.is_active());
                    prop_assert_eq!(
                        engine.score_for(mark),
                        scores_before.wins_for(mark) + 1
                    );
                }
                MoveOutcome::Draw => {
                    prop_assert!(engine.board().is_full());
                    prop_assert!(!has_winning_line(engine.board(), Mark::X));
                    prop_assert!(!has_winning_line(engine.board(), Mark::O));
                    prop_assert!(!engine.is_active());
                    prop_assert_eq!(*engine.scores(), scores_before);
                }
            }
        }

        prop_assert_eq!(engine.scores().total(), wins);
    }

    /// Reset always lands in the same starting state and never touches
    /// the scoreboard.
    #[test]
    fn prop_reset_restores_start_state(
        size in 1usize..=5,
        moves in proptest::collection::vec((0usize..5, 0usize..5), 0..40),
    ) {
        let mut engine = GameEngine::with_seed(GameConfig::new(size), 1);
        for (row, col) in moves {
            engine.submit_human_move(row, col);
        }
        let scores = *engine.scores();
        let epoch = engine.epoch();

        engine.reset();

        prop_assert!(engine.is_active());
        prop_assert_eq!(engine.current_player(), Mark::X);
        prop_assert_eq!(engine.board().empty_cells().count(), size * size);
        prop_assert_eq!(*engine.scores(), scores);
        prop_assert_eq!(engine.epoch(), epoch + 1);
    }
}
