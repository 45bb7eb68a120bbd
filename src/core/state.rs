//! Game state: phase, turn order, board positions and history.
//!
//! ## Phase
//!
//! Macro-state of the current turn. Exactly one is active:
//! `WaitingForRoll -> ProcessingMove -> MovingPiece -> {WaitingForRoll | GameOver}`.
//!
//! ## GameState
//!
//! Everything needed to resume a game: phase, whose turn it is, every
//! player's square and the move history. Owned exclusively by the
//! `TurnSequencer`; everyone else reads it through `&GameState`.
//!
//! Uses `im` for the history so snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::command::MoveRecord;
use super::error::SnapshotError;
use super::player::{PlayerId, PlayerMap};

/// Macro-state of a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the dice to land.
    #[default]
    WaitingForRoll,
    /// A landed roll is being interpreted.
    ProcessingMove,
    /// A piece is animating towards its target.
    MovingPiece,
    /// Someone reached the winning square. Terminal.
    GameOver,
}

impl Phase {
    /// Returns true once the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::WaitingForRoll => "waiting for roll",
            Phase::ProcessingMove => "processing move",
            Phase::MovingPiece => "moving piece",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Square value for a piece that has not entered the board.
pub const OFF_BOARD: u32 = 0;

/// Complete turn state of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    phase: Phase,
    current_player: PlayerId,
    positions: PlayerMap<u32>,
    winning_square: u32,
    /// Turn number (starts at 1, bumped whenever the turn passes).
    turn_number: u32,
    winner: Option<PlayerId>,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Fresh game: player 0 to roll, everyone off the board.
    #[must_use]
    pub fn new(player_count: usize, winning_square: u32) -> Self {
        Self {
            phase: Phase::WaitingForRoll,
            current_player: PlayerId::new(0),
            positions: PlayerMap::with_value(player_count, OFF_BOARD),
            winning_square,
            turn_number: 1,
            winner: None,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player whose turn it is. After the game ends this is the winner.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.positions.player_count()
    }

    /// Square of `player`'s piece (`0` = off the board).
    #[must_use]
    pub fn position(&self, player: PlayerId) -> u32 {
        self.positions[player]
    }

    #[must_use]
    pub fn positions(&self) -> &PlayerMap<u32> {
        &self.positions
    }

    #[must_use]
    pub fn winning_square(&self) -> u32 {
        self.winning_square
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Committed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Mutation (sequencer only) ===

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        debug_assert!(!self.phase.is_terminal() || phase.is_terminal());
        self.phase = phase;
    }

    pub(crate) fn commit_position(&mut self, record: MoveRecord) {
        debug_assert!(record.to <= self.winning_square);
        self.positions[record.player] = record.to;
        self.history.push_back(record);
    }

    /// Hand the turn to the next seat.
    pub(crate) fn pass_turn(&mut self) -> PlayerId {
        self.current_player = self.current_player.next(self.player_count());
        self.turn_number += 1;
        self.current_player
    }

    pub(crate) fn declare_winner(&mut self, player: PlayerId) {
        self.winner = Some(player);
        self.current_player = player;
        self.phase = Phase::GameOver;
    }

    // === Snapshots ===

    /// Encode as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
