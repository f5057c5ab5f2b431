//! Move value type

use std::fmt;

use serde::{Deserialize, Serialize};

/// A proposed move: mark the inclusive stick range `left..=right` of `row`
///
/// Indices are 1-based. Construction performs no validation; legality is
/// decided by [`Board::apply_move`](crate::board::Board::apply_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub left: usize,
    pub right: usize,
}

impl Move {
    pub const fn new(row: usize, left: usize, right: usize) -> Self {
        Self { row, left, right }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.row, self.left, self.right)
    }
}
