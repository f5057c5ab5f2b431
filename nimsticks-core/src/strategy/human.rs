//! Human proxy strategy
//!
//! Move construction is delegated to an injected input provider; the
//! proxy never validates anything, the board does that uniformly.

use crate::board::Board;
use crate::moves::Move;

/// What the user asked for when prompted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumanCommand {
    /// Render the board before deciding
    ShowBoard,
    /// Mark the inclusive range `left..=right` of `row`
    Mark {
        row: usize,
        left: usize,
        right: usize,
    },
}

/// Blocking source of human input
///
/// Both operations block the calling thread until the user responds;
/// there is no timeout or cancellation.
pub trait InputProvider {
    /// Render the board to the user
    fn request_display(&mut self, board: &Board);

    /// Block until the user picks a command
    fn request_move(&mut self) -> HumanCommand;
}

/// Strategy that forwards whatever triple the input provider supplies
pub struct HumanStrategy {
    provider: Box<dyn InputProvider>,
}

impl HumanStrategy {
    pub fn new(provider: Box<dyn InputProvider>) -> Self {
        Self { provider }
    }

    /// Loop until the provider supplies a move, rendering the board on
    /// request along the way
    pub fn produce(&mut self, board: &Board) -> Move {
        loop {
            match self.provider.request_move() {
                HumanCommand::ShowBoard => self.provider.request_display(board),
                HumanCommand::Mark { row, left, right } => return Move::new(row, left, right),
            }
        }
    }
}
