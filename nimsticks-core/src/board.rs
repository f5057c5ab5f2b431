//! Board state: fixed rows of sticks with validated range marking

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::moves::Move;

/// Row lengths of the classic board layout
pub const DEFAULT_ROW_LENGTHS: [usize; 4] = [1, 3, 5, 7];

/// Outcome of applying a move to the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStatus {
    Accepted,
    Rejected,
}

/// Out-of-range row or stick index in a board query
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("row {row} out of range (1..={rows})")]
    RowOutOfRange { row: usize, rows: usize },
    #[error("stick {stick} out of range in row {row} (1..={length})")]
    StickOutOfRange {
        row: usize,
        stick: usize,
        length: usize,
    },
}

/// Board for the stick-marking game
///
/// Rows and their lengths are fixed at construction; sticks only ever go
/// from unmarked to marked, and only through [`Board::apply_move`].
/// Row and stick indices are 1-based throughout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Marked flag per stick, one inner vec per row
    rows: Vec<Vec<bool>>,
}

impl Board {
    /// Create a board with the classic row layout, all sticks unmarked
    pub fn new() -> Self {
        Self::with_rows(&DEFAULT_ROW_LENGTHS)
    }

    /// Create a board with the given row lengths, all sticks unmarked
    pub fn with_rows(lengths: &[usize]) -> Self {
        Self {
            rows: lengths.iter().map(|&n| vec![false; n]).collect(),
        }
    }

    /// Number of rows, fixed for the board's lifetime
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Stick count of the given row
    pub fn row_length(&self, row: usize) -> Result<usize, BoardError> {
        self.row_slots(row).map(|slots| slots.len())
    }

    /// Whether a single stick is still unmarked
    pub fn is_unmarked(&self, row: usize, stick: usize) -> Result<bool, BoardError> {
        let slots = self.row_slots(row)?;
        if stick < 1 || stick > slots.len() {
            return Err(BoardError::StickOutOfRange {
                row,
                stick,
                length: slots.len(),
            });
        }
        Ok(!slots[stick - 1])
    }

    /// Total unmarked sticks remaining, summed over all rows
    pub fn unmarked_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&marked| !marked)
            .count()
    }

    /// Validate and apply a move
    ///
    /// Marks every stick in the inclusive range and returns `Accepted`.
    /// When the row or bounds fall outside `1 <= left <= right <= row
    /// length` or any stick in the range is already marked, the board is
    /// left completely untouched and the call returns `Rejected`.
    pub fn apply_move(&mut self, mv: &Move) -> MoveStatus {
        let Ok(length) = self.row_length(mv.row) else {
            return MoveStatus::Rejected;
        };
        if mv.left < 1 || mv.left > mv.right || mv.right > length {
            return MoveStatus::Rejected;
        }
        let slots = &mut self.rows[mv.row - 1];
        if slots[mv.left - 1..mv.right].iter().any(|&marked| marked) {
            return MoveStatus::Rejected;
        }
        for slot in &mut slots[mv.left - 1..mv.right] {
            *slot = true;
        }
        MoveStatus::Accepted
    }

    fn row_slots(&self, row: usize) -> Result<&[bool], BoardError> {
        if row < 1 || row > self.rows.len() {
            return Err(BoardError::RowOutOfRange {
                row,
                rows: self.rows.len(),
            });
        }
        Ok(&self.rows[row - 1])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{}:", i + 1)?;
            for &marked in row {
                write!(f, " {}", if marked { '.' } else { '|' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_layout() {
        let board = Board::new();
        assert_eq!(board.row_count(), 4);
        assert_eq!(board.row_length(1), Ok(1));
        assert_eq!(board.row_length(4), Ok(7));
        assert_eq!(board.unmarked_count(), 16);
    }

    #[test]
    fn test_accepted_move_marks_exact_range() {
        let mut board = Board::with_rows(&[5]);
        assert_eq!(board.apply_move(&Move::new(1, 2, 4)), MoveStatus::Accepted);
        assert_eq!(board.unmarked_count(), 2);
        assert_eq!(board.is_unmarked(1, 1), Ok(true));
        assert_eq!(board.is_unmarked(1, 2), Ok(false));
        assert_eq!(board.is_unmarked(1, 4), Ok(false));
        assert_eq!(board.is_unmarked(1, 5), Ok(true));
    }

    #[test]
    fn test_count_decreases_by_move_width() {
        let mut board = Board::new();
        for mv in [Move::new(4, 2, 5), Move::new(2, 1, 1), Move::new(3, 3, 5)] {
            let before = board.unmarked_count();
            assert_eq!(board.apply_move(&mv), MoveStatus::Accepted);
            assert_eq!(board.unmarked_count(), before - (mv.right - mv.left + 1));
        }
    }

    #[test]
    fn test_rejects_bad_bounds() {
        let mut board = Board::with_rows(&[3]);
        assert_eq!(board.apply_move(&Move::new(0, 1, 1)), MoveStatus::Rejected);
        assert_eq!(board.apply_move(&Move::new(2, 1, 1)), MoveStatus::Rejected);
        assert_eq!(board.apply_move(&Move::new(1, 0, 1)), MoveStatus::Rejected);
        assert_eq!(board.apply_move(&Move::new(1, 2, 1)), MoveStatus::Rejected);
        assert_eq!(board.apply_move(&Move::new(1, 1, 4)), MoveStatus::Rejected);
        assert_eq!(board.unmarked_count(), 3);
    }

    #[test]
    fn test_rejected_overlap_is_a_no_op() {
        let mut board = Board::with_rows(&[5]);
        assert_eq!(board.apply_move(&Move::new(1, 1, 3)), MoveStatus::Accepted);

        let snapshot = board.clone();
        let overlap = Move::new(1, 3, 5);
        assert_eq!(board.apply_move(&overlap), MoveStatus::Rejected);
        assert_eq!(board, snapshot);

        // Rejection is idempotent: same illegal move, same untouched state.
        assert_eq!(board.apply_move(&overlap), MoveStatus::Rejected);
        assert_eq!(board, snapshot);
        assert_eq!(board.is_unmarked(1, 4), Ok(true));
        assert_eq!(board.is_unmarked(1, 5), Ok(true));
    }

    #[test]
    fn test_queries_fail_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.row_length(0),
            Err(BoardError::RowOutOfRange { row: 0, rows: 4 })
        );
        assert_eq!(
            board.row_length(5),
            Err(BoardError::RowOutOfRange { row: 5, rows: 4 })
        );
        assert_eq!(
            board.is_unmarked(1, 2),
            Err(BoardError::StickOutOfRange {
                row: 1,
                stick: 2,
                length: 1
            })
        );
    }

    #[test]
    fn test_display_renders_marks() {
        let mut board = Board::with_rows(&[1, 3]);
        board.apply_move(&Move::new(2, 2, 2));
        assert_eq!(board.to_string(), "1: |\n2: | . |\n");
    }
}
