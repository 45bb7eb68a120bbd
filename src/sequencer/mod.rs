//! The turn sequencer and everything it drives.
//!
//! ## Overview
//!
//! - `TurnSequencer`: the state machine. Owns turn order, positions and the
//!   single in-flight move.
//! - `TurnSequencerBuilder`: validated construction from config and
//!   collaborators.
//! - `MoveAnimation`: frame-driven interpolation of one piece.
//! - `SequencerEvent`: what happened during a tick.
//! - `PresentationSink`: write-only hints for animators and turn banners.
//!
//! ## Usage
//!
//! ```rust
//! use rust_dicerace::board::AnchorBoard;
//! use rust_dicerace::core::{Phase, PlayerId, Point3, SequencerConfig};
//! use rust_dicerace::dice::ScriptedDice;
//! use rust_dicerace::sequencer::TurnSequencer;
//!
//! let config = SequencerConfig::new(2).with_winning_square(12);
//! let mut sequencer = TurnSequencer::builder(config)
//!     .dice(ScriptedDice::new(["6"]))
//!     .board(AnchorBoard::line(12, 1.0))
//!     .pieces([Point3::new(-1.0, 0.0, 0.0), Point3::new(-1.0, 0.0, 1.0)])
//!     .build()
//!     .unwrap();
//!
//! sequencer.dice_mut().roll();
//! for _ in 0..200 {
//!     sequencer.tick(1.0 / 60.0);
//! }
//!
//! // A 6 enters the board and keeps the turn.
//! assert_eq!(sequencer.phase(), Phase::WaitingForRoll);
//! assert_eq!(sequencer.position(PlayerId::new(0)), 1);
//! assert_eq!(sequencer.current_player(), PlayerId::new(0));
//! ```

mod animation;
mod builder;
mod event;
mod presentation;
mod turn;

pub use animation::{AnimationStatus, MoveAnimation};
pub use builder::TurnSequencerBuilder;
pub use event::{Events, SequencerEvent};
pub use presentation::{
    Hint, NullSink, PresentationSink, PresentationTrigger, RecordingSink, TurnIndicator, IDLE,
    WALKING,
};
pub use turn::TurnSequencer;
