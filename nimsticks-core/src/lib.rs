//! NIMSTICKS Core - Game engine and strategies
//!
//! This crate provides the core logic for the stick-marking Nim variant:
//! - Board state with validated, all-or-nothing range marking
//! - Move value type (row + inclusive stick range)
//! - Move-producing strategies (random, heuristic, smart, human proxy)

pub mod board;
pub mod moves;
pub mod strategy;

// Re-exports for convenient access
pub use board::{Board, BoardError, MoveStatus, DEFAULT_ROW_LENGTHS};
pub use moves::Move;
pub use strategy::{
    HeuristicStrategy, HumanCommand, HumanStrategy, InputProvider, RandomStrategy, SmartStrategy,
    Strategy, StrategyKind, UnknownStrategyError,
};
