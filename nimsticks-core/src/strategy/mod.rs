//! Move-producing strategies
//!
//! Four interchangeable variants: uniformly random, nim-sum heuristic,
//! parity ("smart") and a human proxy driven by an injected input
//! provider. Each variant reads the board's current marking state and
//! proposes a move; the board decides legality and the caller re-asks the
//! same strategy on rejection.

pub mod heuristic;
pub mod human;
pub mod random;
pub mod smart;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::moves::Move;

pub use heuristic::HeuristicStrategy;
pub use human::{HumanCommand, HumanStrategy, InputProvider};
pub use random::RandomStrategy;
pub use smart::SmartStrategy;

/// Strategy variant tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Random,
    Heuristic,
    Smart,
    Human,
}

impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "Random",
            StrategyKind::Heuristic => "Heuristic",
            StrategyKind::Smart => "Smart",
            StrategyKind::Human => "Human",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized strategy tag
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown strategy type `{0}` (expected random, heuristic, smart or human, or 1-4)")]
pub struct UnknownStrategyError(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategyError;

    /// Parse a strategy name or its legacy integer tag
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "random" => Ok(StrategyKind::Random),
            "2" | "heuristic" => Ok(StrategyKind::Heuristic),
            "3" | "smart" => Ok(StrategyKind::Smart),
            "4" | "human" => Ok(StrategyKind::Human),
            _ => Err(UnknownStrategyError(s.to_string())),
        }
    }
}

/// A move-producing strategy attached to a player
///
/// Closed over the four known variants; an unknown tag never gets this
/// far because [`StrategyKind`] construction is fallible.
pub enum Strategy {
    Random(RandomStrategy),
    Heuristic(HeuristicStrategy),
    Smart(SmartStrategy),
    Human(HumanStrategy),
}

impl Strategy {
    /// Entropy-seeded random player
    pub fn random() -> Self {
        Strategy::Random(RandomStrategy::new())
    }

    /// Random player with a fixed seed, for reproducible competitions
    pub fn random_seeded(seed: u64) -> Self {
        Strategy::Random(RandomStrategy::with_seed(seed))
    }

    pub fn heuristic() -> Self {
        Strategy::Heuristic(HeuristicStrategy)
    }

    pub fn smart() -> Self {
        Strategy::Smart(SmartStrategy)
    }

    /// Human proxy reading moves from the given provider
    pub fn human(provider: Box<dyn InputProvider>) -> Self {
        Strategy::Human(HumanStrategy::new(provider))
    }

    /// The variant tag
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Random(_) => StrategyKind::Random,
            Strategy::Heuristic(_) => StrategyKind::Heuristic,
            Strategy::Smart(_) => StrategyKind::Smart,
            Strategy::Human(_) => StrategyKind::Human,
        }
    }

    /// Produce the next move for the current board state
    pub fn produce(&mut self, board: &Board) -> Move {
        match self {
            Strategy::Random(s) => s.produce(board),
            Strategy::Heuristic(s) => s.produce(board),
            Strategy::Smart(s) => s.produce(board),
            Strategy::Human(s) => s.produce(board),
        }
    }
}

/// Out-of-range probes read as marked, so scans can run off a row end
pub(crate) fn stick_is_unmarked(board: &Board, row: usize, stick: usize) -> bool {
    board.is_unmarked(row, stick).unwrap_or(false)
}

/// Whether a row has no unmarked sticks left
pub(crate) fn row_is_empty(board: &Board, row: usize) -> bool {
    let length = board.row_length(row).unwrap_or(0);
    (1..=length).all(|stick| !stick_is_unmarked(board, row, stick))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_tags() {
        assert_eq!("random".parse(), Ok(StrategyKind::Random));
        assert_eq!("HEURISTIC".parse(), Ok(StrategyKind::Heuristic));
        assert_eq!("1".parse(), Ok(StrategyKind::Random));
        assert_eq!("2".parse(), Ok(StrategyKind::Heuristic));
        assert_eq!("3".parse(), Ok(StrategyKind::Smart));
        assert_eq!("4".parse(), Ok(StrategyKind::Human));
    }

    #[test]
    fn test_parse_rejects_unknown_tags() {
        assert_eq!(
            "5".parse::<StrategyKind>(),
            Err(UnknownStrategyError("5".to_string()))
        );
        assert!("clever".parse::<StrategyKind>().is_err());
        assert!("".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_kind_matches_constructor() {
        assert_eq!(Strategy::random_seeded(7).kind(), StrategyKind::Random);
        assert_eq!(Strategy::heuristic().kind(), StrategyKind::Heuristic);
        assert_eq!(Strategy::smart().kind(), StrategyKind::Smart);
    }

    #[test]
    fn test_row_scan_helpers() {
        let mut board = Board::with_rows(&[2]);
        assert!(!row_is_empty(&board, 1));
        assert!(stick_is_unmarked(&board, 1, 2));
        // Off the end of the row and off the board both read as marked.
        assert!(!stick_is_unmarked(&board, 1, 3));
        assert!(!stick_is_unmarked(&board, 2, 1));

        board.apply_move(&crate::moves::Move::new(1, 1, 2));
        assert!(row_is_empty(&board, 1));
    }
}
