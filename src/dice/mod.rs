//! Dice collaborators.
//!
//! The sequencer never simulates dice itself. It polls a `DiceSource`
//! for a landed face and re-arms it once the roll has been used. Two
//! sources ship with the crate:
//!
//! - `SimulatedDice`: seeded fair die for headless play
//! - `ScriptedDice`: fixed list of raw faces, for replays and tests

mod face;
mod scripted;
mod simulated;
mod source;

pub use face::DieFace;
pub use scripted::ScriptedDice;
pub use simulated::SimulatedDice;
pub use source::{DiceSource, ResetMode};
