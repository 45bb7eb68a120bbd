//! Ready-made games built on the sequencer.

pub mod race;
