//! Win detection over a board.
//!
//! Generalizes the classic 3x3 rule to size N: a player wins by holding
//! some full row, some full column, the main diagonal, or the
//! anti-diagonal. Draw detection is simply `Board::is_full` with no
//! winning line, and the engine asks the two questions in that order.

use crate::core::{Board, Cell, Coord, Mark};

/// True iff `mark` holds a complete line on `board`.
///
/// Scans all N rows, all N columns, and both diagonals - O(N^2), called
/// once per applied move.
#[must_use]
pub fn has_winning_line(board: &Board, mark: Mark) -> bool {
    let n = board.size();
    let owns = |row, col| board.get(Coord::new(row, col)) == Cell::Marked(mark);

    for i in 0..n {
        if (0..n).all(|j| owns(i, j)) {
            return true;
        }
        if (0..n).all(|j| owns(j, i)) {
            return true;
        }
    }

    (0..n).all(|i| owns(i, i)) || (0..n).all(|i| owns(i, n - 1 - i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_rows(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    'X' => board.set(Coord::new(r, c), Mark::X),
                    'O' => board.set(Coord::new(r, c), Mark::O),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new(3);
        assert!(!has_winning_line(&board, Mark::X));
        assert!(!has_winning_line(&board, Mark::O));
    }

    #[test]
    fn test_row_win() {
        let board = board_from_rows(&["XXX", "OO.", "..."]);
        assert!(has_winning_line(&board, Mark::X));
        assert!(!has_winning_line(&board, Mark::O));
    }

    #[test]
    fn test_column_win() {
        let board = board_from_rows(&["OX.", "OX.", "O.X"]);
        assert!(has_winning_line(&board, Mark::O));
        assert!(!has_winning_line(&board, Mark::X));
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_from_rows(&["X.O", ".XO", "..X"]);
        assert!(has_winning_line(&board, Mark::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from_rows(&["XXO", "XO.", "O.."]);
        assert!(has_winning_line(&board, Mark::O));
    }

    #[test]
    fn test_almost_full_line_is_not_a_win() {
        let board = board_from_rows(&["XX.", "OO.", "..."]);
        assert!(!has_winning_line(&board, Mark::X));
        assert!(!has_winning_line(&board, Mark::O));
    }

    #[test]
    fn test_full_board_no_winner() {
        // The draw position from the classic fill-order scenario.
        let board = board_from_rows(&["XOX", "XOO", "OXX"]);
        assert!(!has_winning_line(&board, Mark::X));
        assert!(!has_winning_line(&board, Mark::O));
        assert!(board.is_full());
    }

    #[test]
    fn test_larger_board_requires_full_length_line() {
        // Three in a row is not enough on a 5x5 board.
        let mut board = Board::new(5);
        for c in 0..3 {
            board.set(Coord::new(2, c), Mark::X);
        }
        assert!(!has_winning_line(&board, Mark::X));

        for c in 3..5 {
            board.set(Coord::new(2, c), Mark::X);
        }
        assert!(has_winning_line(&board, Mark::X));
    }

    #[test]
    fn test_larger_board_diagonals() {
        let n = 4;
        let mut main = Board::new(n);
        let mut anti = Board::new(n);
        for i in 0..n {
            main.set(Coord::new(i, i), Mark::O);
            anti.set(Coord::new(i, n - 1 - i), Mark::X);
        }
        assert!(has_winning_line(&main, Mark::O));
        assert!(has_winning_line(&anti, Mark::X));
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1);
        assert!(!has_winning_line(&board, Mark::X));
        board.set(Coord::new(0, 0), Mark::X);
        assert!(has_winning_line(&board, Mark::X));
        assert!(!has_winning_line(&board, Mark::O));
    }
}
