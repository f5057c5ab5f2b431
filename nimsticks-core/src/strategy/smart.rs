//! Smart strategy: parity play on the total stick count

use super::stick_is_unmarked;
use crate::board::Board;
use crate::moves::Move;

/// Parity strategy
///
/// Looks only at the total number of unmarked sticks: even totals and the
/// one- and three-stick endgames take a single stick, other odd totals
/// take a pair of adjacent sticks. All scans run lowest row first, lowest
/// stick first, so the strategy is reproducible for a given board state.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmartStrategy;

const THREE_STICKS: usize = 3;

impl SmartStrategy {
    pub fn produce(&self, board: &Board) -> Move {
        let sticks = board.unmarked_count();
        if sticks % 2 == 0 || sticks == 1 || sticks == THREE_STICKS {
            return self.single_stick(board);
        }
        self.adjacent_pair(board)
            // No two sticks stand together; a single stick is still legal.
            .unwrap_or_else(|| self.single_stick(board))
    }

    /// First unmarked stick on the board
    fn single_stick(&self, board: &Board) -> Move {
        for row in 1..=board.row_count() {
            let length = board.row_length(row).unwrap_or(0);
            for stick in 1..=length {
                if stick_is_unmarked(board, row, stick) {
                    return Move::new(row, stick, stick);
                }
            }
        }
        // Empty board; rejected downstream like any other illegal move.
        Move::new(0, 0, 0)
    }

    /// First pair of adjacent unmarked sticks within one row
    fn adjacent_pair(&self, board: &Board) -> Option<Move> {
        for row in 1..=board.row_count() {
            let length = board.row_length(row).unwrap_or(0);
            for stick in 1..length {
                if stick_is_unmarked(board, row, stick) && stick_is_unmarked(board, row, stick + 1)
                {
                    return Some(Move::new(row, stick, stick + 1));
                }
            }
        }
        None
    }
}
