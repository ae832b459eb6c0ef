//! Game orchestration: turn state, move application, outcome signaling,
//! and the deferred computer turn.
//!
//! `GameEngine` owns exactly one `Board` at a time and is the only
//! writer to it. The hosting layer submits moves and renders whatever
//! the engine reports back; it never mutates game state directly.
//!
//! ## Deferred computer turns
//!
//! The engine never sleeps or spawns timers. When a human move hands
//! the turn to the computer, `pending_computer_turn` yields a
//! `ComputerTurn` token; the host schedules
//! `request_computer_move(token)` after [`COMPUTER_MOVE_DELAY`] (the
//! delay is pacing for the viewer, not a correctness mechanism). The
//! token captures the engine epoch at schedule time, so a token issued
//! before a reset is discarded instead of firing into the replacement
//! board.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Board, Cell, Coord, Difficulty, GameConfig, GameRng, Mark, Mode, ScoreBoard};
use crate::rules;

pub mod policy;

/// How long the host should wait before submitting a pending computer
/// turn. Visible pacing only.
pub const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(400);

/// Lifecycle of a single game on the current board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are being accepted.
    InProgress,
    /// Terminal: the given mark completed a line.
    Won(Mark),
    /// Terminal: the board filled with no winner.
    Draw,
}

impl GameStatus {
    /// Terminal states reject moves until a reset.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of one move submission, human or computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move applied; the game goes on with the other player to move.
    Continue,
    /// Move applied and it completed a line.
    Win(Mark),
    /// Move applied and it filled the board with no winner.
    Draw,
    /// Move refused: occupied cell, out-of-bounds coordinate, terminal
    /// game, or a stale computer turn. Nothing changed.
    Rejected,
}

impl MoveOutcome {
    /// Did the move mutate the board?
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, MoveOutcome::Rejected)
    }
}

/// Token for a scheduled computer move.
///
/// Issued by `pending_computer_turn`, consumed by
/// `request_computer_move`. Captures the engine epoch at issue time; a
/// reset in between invalidates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputerTurn {
    epoch: u64,
}

/// The game engine: board, turn state, scores, and computer opponent.
///
/// Construct one per session via the explicit factories - there is no
/// global instance, so independent games can coexist (tests, multiple
/// sessions).
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{GameConfig, Mark};
/// use rust_ttt::engine::{GameEngine, MoveOutcome};
///
/// let mut engine = GameEngine::new(GameConfig::new(3));
/// assert_eq!(engine.current_player(), Mark::X);
/// assert_eq!(engine.submit_human_move(0, 0), MoveOutcome::Continue);
/// assert_eq!(engine.current_player(), Mark::O);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    current_player: Mark,
    status: GameStatus,
    scores: ScoreBoard,
    rng: GameRng,
    epoch: u64,
}

/// The computer always plays the second mark.
const COMPUTER_MARK: Mark = Mark::O;

impl GameEngine {
    /// Create an engine with a fresh board and an entropy-seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create an engine with a deterministic RNG. Two engines built
    /// from the same config and seed play out identically.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    fn with_rng(config: GameConfig, rng: GameRng) -> Self {
        Self {
            board: Board::new(config.board_size),
            config,
            current_player: Mark::X,
            status: GameStatus::InProgress,
            scores: ScoreBoard::new(),
            rng,
            epoch: 0,
        }
    }

    // === Move submission ===

    /// Submit a human move at `(row, col)`.
    ///
    /// Occupied cells, out-of-bounds coordinates, and terminal games
    /// are rejected without any state change. An accepted move is
    /// checked for a win first, then for a draw; otherwise the turn
    /// passes to the other player.
    pub fn submit_human_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        self.attempt_move(row, col)
    }

    /// The computer turn the host should schedule, if any.
    ///
    /// `Some` exactly while a computer game is in progress with the
    /// computer's mark to move. Submit the token back via
    /// `request_computer_move` after [`COMPUTER_MOVE_DELAY`].
    #[must_use]
    pub fn pending_computer_turn(&self) -> Option<ComputerTurn> {
        (self.config.mode == Mode::HumanVsComputer
            && self.status == GameStatus::InProgress
            && self.current_player == COMPUTER_MARK)
            .then_some(ComputerTurn { epoch: self.epoch })
    }

    /// Execute a scheduled computer turn.
    ///
    /// A token issued before the most recent reset is stale and is
    /// discarded (`Rejected`) - it must not fire into the replacement
    /// board. Otherwise the difficulty policy picks an empty cell and
    /// the move runs through the same termination checks as a human
    /// move.
    pub fn request_computer_move(&mut self, turn: ComputerTurn) -> MoveOutcome {
        if turn.epoch != self.epoch {
            debug!(
                token_epoch = turn.epoch,
                engine_epoch = self.epoch,
                "discarding stale computer turn"
            );
            return MoveOutcome::Rejected;
        }
        if self.status.is_terminal() {
            return MoveOutcome::Rejected;
        }

        match policy::choose_move(&self.board, self.config.difficulty, &mut self.rng) {
            Some(coord) => self.attempt_move(coord.row, coord.col),
            None => MoveOutcome::Rejected,
        }
    }

    fn attempt_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        if self.status.is_terminal() || !self.board.in_bounds(row, col) {
            trace!(row, col, "move rejected");
            return MoveOutcome::Rejected;
        }
        let coord = Coord::new(row, col);
        if !self.board.get(coord).is_empty() {
            trace!(row, col, "move rejected: cell occupied");
            return MoveOutcome::Rejected;
        }

        let mover = self.current_player;
        self.board.set(coord, mover);

        if rules::has_winning_line(&self.board, mover) {
            self.status = GameStatus::Won(mover);
            self.scores.record_win(mover);
            debug!(winner = %mover, "game over: win");
            return MoveOutcome::Win(mover);
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            debug!("game over: draw");
            return MoveOutcome::Draw;
        }

        self.current_player = mover.opponent();
        trace!(player = %mover, %coord, next = %self.current_player, "move applied");
        MoveOutcome::Continue
    }

    // === Reset ===

    /// Start a new game on a fresh board of the same size.
    ///
    /// The old board is discarded whole, `X` moves first again, and the
    /// epoch advances so pending computer turns die. Scores are kept.
    pub fn reset(&mut self) {
        self.reset_with(self.config);
    }

    /// Start a new game under a new configuration (size, mode, or
    /// difficulty change). Scores are kept.
    pub fn reset_with(&mut self, config: GameConfig) {
        self.config = config;
        self.board = Board::new(config.board_size);
        self.current_player = Mark::X;
        self.status = GameStatus::InProgress;
        self.epoch += 1;
        debug!(
            size = config.board_size,
            epoch = self.epoch,
            "board reset"
        );
    }

    // === Queries ===

    /// Cell state at `(row, col)`. Panics out of range; this is a
    /// programming contract, not a gameplay input.
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.board.get(Coord::new(row, col))
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Are moves currently accepted?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Current game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Session win count for `mark`.
    #[must_use]
    pub fn score_for(&self, mark: Mark) -> u32 {
        self.scores.wins_for(mark)
    }

    /// All session scores.
    #[must_use]
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board dimension N.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Opponent mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Computer difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// The computer's mark, when a computer is playing.
    #[must_use]
    pub fn computer_mark(&self) -> Option<Mark> {
        (self.config.mode == Mode::HumanVsComputer).then_some(COMPUTER_MARK)
    }

    /// Reset generation counter. Advances by one on every reset.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
