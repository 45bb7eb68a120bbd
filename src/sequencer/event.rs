//! Events emitted by the sequencer.
//!
//! Events are how presentation layers learn what happened during a tick
//! without inspecting state diffs. They are informational only: the state
//! is already updated when an event is emitted.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{MoveError, PlayerId};
use crate::dice::DieFace;

/// Something the sequencer did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SequencerEvent {
    /// A landed roll was accepted for `player`.
    RollAccepted { player: PlayerId, roll: DieFace },

    /// The dice reported an unreadable face; `player` rolls again.
    RollRejected { player: PlayerId, face: String },

    /// `player` is off the board and `roll` does not let them enter.
    EntryDenied { player: PlayerId, roll: DieFace },

    /// A piece started moving.
    MoveStarted { player: PlayerId, from: u32, to: u32 },

    /// An in-flight move was cut short by a new one.
    MoveCancelled { player: PlayerId, to: u32 },

    /// A move could not be animated; the piece stays on `square`.
    MoveAborted { player: PlayerId, square: u32, target: u32 },

    /// A piece finished moving and its square was committed.
    MoveCompleted { player: PlayerId, square: u32 },

    /// A piece landed on a jump square and continues to `to`.
    Jump { player: PlayerId, from: u32, to: u32 },

    /// The roll was a 6: `player` keeps the turn.
    ExtraRoll { player: PlayerId },

    /// The turn passed to `player`.
    TurnPassed { player: PlayerId },

    /// `player` reached the winning square.
    GameWon { player: PlayerId },
}

/// Events emitted during one tick. Most ticks emit none or a couple.
pub type Events = SmallVec<[SequencerEvent; 4]>;

impl SequencerEvent {
    /// Rejection event for a failed roll, if the error is roll-related.
    #[must_use]
    pub fn from_roll_error(player: PlayerId, error: &MoveError) -> Option<Self> {
        match error {
            MoveError::InvalidRollFace { face } => Some(SequencerEvent::RollRejected {
                player,
                face: face.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_roll_error() {
        let p = PlayerId::new(0);
        let err = MoveError::InvalidRollFace { face: "9".into() };

        assert_eq!(
            SequencerEvent::from_roll_error(p, &err),
            Some(SequencerEvent::RollRejected {
                player: p,
                face: "9".into()
            })
        );
        assert_eq!(SequencerEvent::from_roll_error(p, &MoveError::GameOver), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = SequencerEvent::MoveStarted {
            player: PlayerId::new(1),
            from: 3,
            to: 7,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: SequencerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
