//! Headless dice race.
//!
//! Wires the sequencer to a seeded die, a serpentine board and a recording
//! presentation sink so a whole game can run without a host engine:
//! - Every player starts off the board and needs a 1 or a 6 to enter
//! - Pieces advance by the roll and bounce back from the winning square
//! - A 6 rolls again; first to land exactly on the winning square wins
//!
//! Useful for replays, balance checks of jump layouts, and tests.

mod game;

pub use game::{RaceGame, RaceGameBuilder, RaceSequencer};
