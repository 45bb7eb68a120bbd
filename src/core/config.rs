//! Sequencer configuration.
//!
//! Hosts build a `SequencerConfig` once (from defaults, builder methods or a
//! deserialized settings blob) and hand it to `TurnSequencer::builder`.
//! Everything is validated once at build time; nothing is re-checked per roll.

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::player::MAX_PLAYERS;

/// Default number of players.
pub const DEFAULT_PLAYER_COUNT: usize = 2;

/// Default winning square (a 12 x 10 board).
pub const DEFAULT_WINNING_SQUARE: u32 = 120;

/// Default piece speed in world units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 3.0;

/// Moves shorter than this snap instead of animating.
pub const DEFAULT_SNAP_EPSILON: f32 = 0.01;

/// Complete sequencer configuration.
///
/// Missing fields deserialize to their defaults:
///
/// ```
/// use rust_dicerace::core::SequencerConfig;
///
/// let config: SequencerConfig = serde_json::from_str(r#"{"player_count": 4}"#).unwrap();
/// assert_eq!(config.player_count, 4);
/// assert_eq!(config.winning_square, 120);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Square a piece must land on exactly to win.
    pub winning_square: u32,

    /// Piece speed in world units per second.
    pub move_speed: f32,

    /// Distance under which a move snaps without animating.
    pub snap_epsilon: f32,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            winning_square: DEFAULT_WINNING_SQUARE,
            move_speed: DEFAULT_MOVE_SPEED,
            snap_epsilon: DEFAULT_SNAP_EPSILON,
        }
    }
}

impl SequencerConfig {
    /// Default configuration for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the winning square.
    #[must_use]
    pub fn with_winning_square(mut self, square: u32) -> Self {
        self.winning_square = square;
        self
    }

    /// Set the piece speed.
    #[must_use]
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Set the snap distance.
    #[must_use]
    pub fn with_snap_epsilon(mut self, epsilon: f32) -> Self {
        self.snap_epsilon = epsilon;
        self
    }

    /// Check the values that do not depend on collaborators.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.player_count == 0 {
            return Err(SetupError::ZeroPlayers);
        }
        if self.player_count > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers(self.player_count));
        }
        if self.winning_square == 0 {
            return Err(SetupError::ZeroWinningSquare);
        }
        if !self.move_speed.is_finite() || self.move_speed <= 0.0 {
            return Err(SetupError::InvalidMoveSpeed(self.move_speed));
        }
        Ok(())
    }
}
