//! Computer move selection.
//!
//! Each difficulty level picks an empty cell for the computer:
//!
//! - **Easy**: uniformly random over the empty cells.
//! - **Medium**: a coin flip decides whether to take the random pick
//!   immediately; on tails it falls back to the same random pick. The
//!   gate therefore has no observable effect on the final distribution.
//! - **Hard**: uniformly random as well. No search or positional
//!   evaluation backs this level; it ships with the same distribution
//!   as Easy. Known limitation - do not expect stronger play from it.

use smallvec::SmallVec;

use crate::core::{Board, Coord, Difficulty, GameRng};

/// Empty-cell scratch list; stays inline for boards up to 4x4.
type CoordList = SmallVec<[Coord; 16]>;

/// Pick a cell for the computer, or `None` when the board is full.
#[must_use]
pub fn choose_move(board: &Board, difficulty: Difficulty, rng: &mut GameRng) -> Option<Coord> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            gated_random_move(board, rng, 0.5).or_else(|| random_move(board, rng))
        }
        Difficulty::Hard => best_move(board, rng),
    }
}

/// Uniformly random empty cell.
fn random_move(board: &Board, rng: &mut GameRng) -> Option<Coord> {
    let empty: CoordList = board.empty_cells().collect();
    rng.choose(&empty).copied()
}

/// Random empty cell, but only with the given probability.
fn gated_random_move(board: &Board, rng: &mut GameRng, probability: f64) -> Option<Coord> {
    if !rng.gen_bool(probability) {
        return None;
    }
    random_move(board, rng)
}

/// The strongest move this engine knows: a uniformly random one.
fn best_move(board: &Board, rng: &mut GameRng) -> Option<Coord> {
    random_move(board, rng)
}
