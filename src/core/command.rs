//! Move commands and the move history.
//!
//! A `MoveCommand` is produced for every roll that moves a piece and lives
//! only until that move finishes. A `MoveRecord` is what remains of it in
//! the game history once the position has been committed.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::dice::DieFace;

/// One piece movement in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommand {
    /// Player whose piece moves.
    pub player: PlayerId,

    /// Roll that produced this move.
    pub roll: DieFace,

    /// Square the piece leaves.
    pub from: u32,

    /// Square the piece ends on. `0` sends it back off the board.
    pub target: u32,

    /// True for the follow-up leg taken from a jump square.
    pub is_jump: bool,
}

impl MoveCommand {
    /// Create a regular move.
    #[must_use]
    pub fn new(player: PlayerId, roll: DieFace, from: u32, target: u32) -> Self {
        Self {
            player,
            roll,
            from,
            target,
            is_jump: false,
        }
    }

    /// The jump leg that continues this move from its target to `destination`.
    #[must_use]
    pub fn jump_to(self, destination: u32) -> Self {
        Self {
            from: self.target,
            target: destination,
            is_jump: true,
            ..self
        }
    }
}

/// A committed move in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub roll: DieFace,
    pub from: u32,
    pub to: u32,
    /// Turn number the move was made in.
    pub turn: u32,
    pub is_jump: bool,
}

impl MoveRecord {
    /// Record a finished command.
    #[must_use]
    pub fn from_command(command: &MoveCommand, turn: u32) -> Self {
        Self {
            player: command.player,
            roll: command.roll,
            from: command.from,
            to: command.target,
            turn,
            is_jump: command.is_jump,
        }
    }
}
