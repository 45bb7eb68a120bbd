//! Core types: players, points, configuration, RNG, state, errors.
//!
//! Nothing in here knows about dice physics or board layout; those arrive
//! through the `dice` and `board` collaborator traits.

pub mod player;
pub mod point;
pub mod config;
pub mod rng;
pub mod command;
pub mod state;
pub mod error;

pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use point::Point3;
pub use config::SequencerConfig;
pub use rng::{GameRng, GameRngState};
pub use command::{MoveCommand, MoveRecord};
pub use state::{GameState, Phase, OFF_BOARD};
pub use error::{MoveError, SetupError, SnapshotError};
