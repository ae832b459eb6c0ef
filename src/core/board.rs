//! The NxN grid and its cell states.
//!
//! The board is the single source of truth for occupancy. Cells only
//! ever transition `Empty -> Marked`; the reverse happens solely by
//! replacing the whole board on reset. There is no in-place resize.
//!
//! Bounds discipline: `in_bounds` exists for the public move path,
//! which rejects bad coordinates as normal input. `get`/`set` treat an
//! out-of-range coordinate as a caller bug and panic.

use serde::{Deserialize, Serialize};

use super::Mark;

/// A zero-based grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Occupied by a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Is this cell still open?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying mark, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// A size x size grid of cells, row-major.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{Board, Cell, Coord, Mark};
///
/// let mut board = Board::new(3);
/// assert!(board.get(Coord::new(1, 1)).is_empty());
///
/// board.set(Coord::new(1, 1), Mark::X);
/// assert_eq!(board.get(Coord::new(1, 1)), Cell::Marked(Mark::X));
/// assert!(!board.is_full());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board. Size is fixed for the board's lifetime.
    ///
    /// Panics if `size` is zero. Any size >= 1 is accepted; the game is
    /// only interesting from 3 up, but the grid does not enforce that.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "Board size must be at least 1");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Board dimension N.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N squared).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `(row, col)` lies on the grid.
    #[must_use]
    pub const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Cell state at `coord`.
    ///
    /// Panics if `coord` is out of range; callers validate with
    /// `in_bounds` first when the coordinate comes from outside.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.index_of(coord)]
    }

    /// Write `mark` into an empty cell.
    ///
    /// Panics if the cell is already occupied or out of range.
    pub fn set(&mut self, coord: Coord, mark: Mark) {
        let idx = self.index_of(coord);
        assert!(self.cells[idx].is_empty(), "Cell {} is already marked", coord);
        self.cells[idx] = Cell::Marked(mark);
    }

    /// True iff no empty cell remains. O(N^2).
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Coordinates of all empty cells, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.is_empty()
                .then(|| Coord::new(i / self.size, i % self.size))
        })
    }

    fn index_of(&self, coord: Coord) -> usize {
        assert!(
            self.in_bounds(coord.row, coord.col),
            "Coordinate {} out of range for a {}x{} board",
            coord,
            self.size,
            self.size
        );
        coord.row * self.size + coord.col
    }
}
