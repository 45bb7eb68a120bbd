//! Movement rules for the race.
//!
//! `MovementRules` is the seam between "what a roll means" and the turn
//! sequencer that applies it. `StandardRules` covers entry, advance,
//! bounce-back and jump squares.

pub mod engine;

pub use engine::{movement_target, MoveOutcome, MovementRules, StandardRules};
