//! # rust-ttt
//!
//! A generalized tic-tac-toe engine: an NxN grid-elimination game with
//! win/draw detection for arbitrary board sizes, turn alternation,
//! session score tracking, and an optional computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure logic, no I/O**: the engine renders nothing and reads no
//!    input. A hosting layer (GUI, TUI, server) submits moves and
//!    observes results.
//!
//! 2. **Explicit instances**: all state lives in a `GameEngine` value
//!    built by an explicit factory. Independent games can coexist in
//!    one process.
//!
//! 3. **Rejection is data**: an occupied cell, an out-of-bounds
//!    coordinate, or a move after game over is a normal
//!    `MoveOutcome::Rejected`, not an error. Contract violations on the
//!    internal board API fail fast instead.
//!
//! 4. **Scheduling is the host's job**: the computer's "thinking" delay
//!    is modeled as an epoch-carrying token the host fires back after a
//!    fixed pause, so a reset can never be hit by a stale move.
//!
//! ## Modules
//!
//! - `core`: marks, the grid, RNG, configuration
//! - `rules`: win detection generalized to size N
//! - `engine`: move orchestration and the computer-opponent policy
//!
//! ## Example
//!
//! ```
//! use rust_ttt::core::{Difficulty, GameConfig, Mark, Mode};
//! use rust_ttt::engine::{GameEngine, MoveOutcome};
//!
//! let config = GameConfig::new(3)
//!     .with_mode(Mode::HumanVsComputer)
//!     .with_difficulty(Difficulty::Easy);
//! let mut engine = GameEngine::with_seed(config, 42);
//!
//! assert_eq!(engine.submit_human_move(1, 1), MoveOutcome::Continue);
//!
//! // The turn passed to the computer; the host waits the visible
//! // delay, then fires the scheduled turn.
//! let turn = engine.pending_computer_turn().unwrap();
//! assert!(engine.request_computer_move(turn).is_accepted());
//! assert_eq!(engine.current_player(), Mark::X);
//! ```

pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord,
    Difficulty, GameConfig, Mode,
    GameRng,
    Mark, ScoreBoard,
};

pub use crate::engine::{
    ComputerTurn, GameEngine, GameStatus, MoveOutcome, COMPUTER_MOVE_DELAY,
};

pub use crate::rules::has_winning_line;
