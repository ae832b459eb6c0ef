//! Game configuration types.
//!
//! A session configures the engine at startup (and on any settings
//! change) by providing:
//! - board dimension,
//! - opponent mode (two humans, or human against the computer),
//! - computer difficulty.
//!
//! The engine never reads settings from anywhere else - the hosting
//! layer owns the dropdowns/flags and hands a `GameConfig` across.

use serde::{Deserialize, Serialize};

/// Who controls the second mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans sharing one board.
    #[default]
    HumanVsHuman,
    /// The engine plays `O` via its difficulty policy.
    HumanVsComputer,
}

/// Computer move-selection level.
///
/// Only consulted when `Mode::HumanVsComputer` is active. See
/// `engine::policy` for what each level actually does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random over empty cells.
    #[default]
    Easy,
    /// Probability-gated random pick that falls back to the random pick.
    Medium,
    /// Same distribution as Easy; kept as a distinct setting.
    Hard,
}

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{Difficulty, GameConfig, Mode};
///
/// let config = GameConfig::new(5)
///     .with_mode(Mode::HumanVsComputer)
///     .with_difficulty(Difficulty::Medium);
///
/// assert_eq!(config.board_size, 5);
/// assert_eq!(config.mode, Mode::HumanVsComputer);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension N (the grid has N squared cells).
    pub board_size: usize,

    /// Opponent mode.
    pub mode: Mode,

    /// Computer difficulty, ignored outside `HumanVsComputer`.
    pub difficulty: Difficulty,
}

impl GameConfig {
    /// Create a configuration for an N x N board with default mode and
    /// difficulty.
    ///
    /// Panics if `board_size` is zero.
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        assert!(board_size >= 1, "Board size must be at least 1");
        Self {
            board_size,
            mode: Mode::default(),
            difficulty: Difficulty::default(),
        }
    }

    /// Set the opponent mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the computer difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

impl Default for GameConfig {
    /// The classic starting setup: 3x3, two humans, Easy.
    fn default() -> Self {
        Self::new(3)
    }
}
