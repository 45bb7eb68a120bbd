//! Error types.
//!
//! - `SetupError`: the sequencer cannot be built. Fatal, nothing runs.
//! - `MoveError`: a single roll or move failed. Recovered locally; the
//!   sequencer keeps running.
//! - `SnapshotError`: a `GameState` snapshot could not be encoded or decoded.

use thiserror::Error;

use super::player::PlayerId;
use super::state::Phase;

/// Errors raised while building a `TurnSequencer`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SetupError {
    /// A required collaborator (dice or board) was never supplied.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// Custom rules disagree with the configured winning square.
    #[error("rules expect winning square {rules}, config says {config}")]
    RulesMismatch { config: u32, rules: u32 },

    /// A resumed snapshot does not fit this configuration.
    #[error("snapshot does not match configuration: {0}")]
    SnapshotMismatch(&'static str),

    /// Registered pieces do not match the configured player count.
    #[error("expected {expected} player pieces, found {found}")]
    PieceCountMismatch { expected: usize, found: usize },

    #[error("player count must be at least 1")]
    ZeroPlayers,

    #[error("player count {0} exceeds the supported maximum of 255")]
    TooManyPlayers(usize),

    #[error("winning square must be at least 1")]
    ZeroWinningSquare,

    #[error("move speed must be finite and positive, got {0}")]
    InvalidMoveSpeed(f32),

    /// The board cannot reach the winning square.
    #[error("board has {squares} squares but the winning square is {winning_square}")]
    BoardTooSmall { squares: u32, winning_square: u32 },

    #[error("invalid jump square {from} -> {to}")]
    InvalidJump { from: u32, to: u32 },
}

/// Errors raised while processing a roll or moving a piece.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The dice reported something other than `"1"`..=`"6"`.
    #[error("invalid dice face {face:?}")]
    InvalidRollFace { face: String },

    /// The board has no anchor for the target square.
    #[error("invalid target square {square} (board has {square_count} squares)")]
    InvalidTargetSquare { square: u32, square_count: u32 },

    /// A move target past the winning square.
    #[error("target square {square} is past the winning square {winning_square}")]
    BeyondWinningSquare { square: u32, winning_square: u32 },

    #[error("no roll expected while {0}")]
    RollNotExpected(Phase),

    #[error("{0} is not in this game")]
    UnknownPlayer(PlayerId),

    /// A move for someone other than the player whose turn it is.
    #[error("it is not {0}'s turn")]
    NotCurrentPlayer(PlayerId),

    #[error("the game is over")]
    GameOver,
}

impl MoveError {
    /// Returns true if the same player simply rolls again.
    #[must_use]
    pub fn is_retry(&self) -> bool {
        matches!(self, MoveError::InvalidRollFace { .. })
    }
}

/// Errors raised by snapshot encoding.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}
