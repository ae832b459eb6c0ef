//! Core domain types: marks, the grid, RNG, configuration.
//!
//! This module contains the building blocks the engine orchestrates.
//! Sessions configure these via `GameConfig` rather than modifying the
//! core.

pub mod board;
pub mod config;
pub mod player;
pub mod rng;

pub use board::{Board, Cell, Coord};
pub use config::{Difficulty, GameConfig, Mode};
pub use player::{Mark, ScoreBoard};
pub use rng::GameRng;
