//! Random strategy

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use super::{row_is_empty, stick_is_unmarked};
use crate::board::Board;
use crate::moves::Move;

/// Uniformly random move generator
///
/// Picks a nonempty row and an unmarked left and right bound inside it.
/// Walking the interior of the candidate range pushes the left bound past
/// any marked gap, so the returned range is always contiguous and fully
/// unmarked.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Produce a move whose whole range is unmarked on the given board
    ///
    /// The board must have at least one unmarked stick.
    pub fn produce(&mut self, board: &Board) -> Move {
        let row = self.pick_row(board);
        let length = board.row_length(row).unwrap_or(0);

        let mut left = self.rng.gen_range(1..=length);
        while !stick_is_unmarked(board, row, left) {
            left = self.rng.gen_range(1..=length);
        }

        let mut right = self.rng.gen_range(left..=length);
        while !stick_is_unmarked(board, row, right) {
            right = self.rng.gen_range(left..=length);
        }

        // A marked stick inside the candidate range splits it; move the
        // left bound past the gap and keep walking, so the last gap seen
        // leaves nothing marked between the final bounds.
        for stick in left + 1..right {
            if !stick_is_unmarked(board, row, stick) {
                left = self.pick_after_gap(board, row, stick, right);
            }
        }

        Move::new(row, left, right)
    }

    /// Uniformly random nonempty row
    fn pick_row(&mut self, board: &Board) -> usize {
        let rows = board.row_count();
        let mut row = self.rng.gen_range(1..=rows);
        while row_is_empty(board, row) {
            row = self.rng.gen_range(1..=rows);
        }
        row
    }

    /// Uniformly random unmarked stick in `(gap, right]` of the row
    fn pick_after_gap(&mut self, board: &Board, row: usize, gap: usize, right: usize) -> usize {
        let candidates: Vec<usize> = (gap + 1..=right)
            .filter(|&stick| stick_is_unmarked(board, row, stick))
            .collect();
        // `right` itself is unmarked, so the window is never empty.
        candidates[self.rng.gen_range(0..candidates.len())]
    }
}
