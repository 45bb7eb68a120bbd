//! # rust-dicerace
//!
//! Turn and movement sequencing for dice-driven board race games.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No engine lifecycle. The host owns the frame loop
//!    and calls `TurnSequencer::tick(delta)`.
//!
//! 2. **Collaborators as Traits**: Dice, board geometry and presentation
//!    are supplied at construction (`DiceSource`, `BoardGeometry`,
//!    `PresentationSink`), never discovered.
//!
//! 3. **Explicit Ownership**: One sequencer owns one game's state. Readers
//!    get `&GameState`; only the sequencer mutates it.
//!
//! ## Rules
//!
//! - Pieces start off the board and enter on square 1 with a 1 or a 6.
//! - Pieces advance by the roll; overshooting the winning square bounces
//!   back by the excess.
//! - Landing exactly on the winning square wins.
//! - A 6 lets the same player roll again.
//! - Optional jump squares move a piece on after it lands.
//!
//! ## Modules
//!
//! - `core`: Players, points, configuration, RNG, state, errors
//! - `board`: Board geometry collaborator
//! - `dice`: Dice collaborator, die faces, simulated and scripted dice
//! - `rules`: Movement rules (entry, advance, bounce-back, jumps)
//! - `sequencer`: The turn state machine, move animation, events, hints
//! - `games`: Headless race wiring everything together

pub mod core;
pub mod board;
pub mod dice;
pub mod rules;
pub mod sequencer;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState, GameState, MoveCommand, MoveError, MoveRecord, Phase, PlayerId,
    PlayerMap, Point3, SequencerConfig, SetupError, SnapshotError,
};

pub use crate::board::{AnchorBoard, BoardGeometry};

pub use crate::dice::{DiceSource, DieFace, ResetMode, ScriptedDice, SimulatedDice};

pub use crate::rules::{movement_target, MoveOutcome, MovementRules, StandardRules};

pub use crate::sequencer::{
    AnimationStatus, Events, MoveAnimation, NullSink, PresentationSink, PresentationTrigger,
    RecordingSink, SequencerEvent, TurnIndicator, TurnSequencer, TurnSequencerBuilder,
};

pub use crate::games::race::{RaceGame, RaceGameBuilder};
