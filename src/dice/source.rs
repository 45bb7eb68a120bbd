//! The dice collaborator contract.

use serde::{Deserialize, Serialize};

/// How much of the dice to reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ResetMode {
    /// First-time setup: capture the resting origin and clear all flags.
    Full = 0,
    /// Between rolls: return to the origin and clear the result flags.
    Reposition = 1,
}

impl TryFrom<u8> for ResetMode {
    type Error = u8;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(ResetMode::Full),
            1 => Ok(ResetMode::Reposition),
            other => Err(other),
        }
    }
}

/// Something that produces die rolls: a physics die, a network peer, a
/// script.
///
/// The sequencer only ever reads the landed flag and the face, and re-arms
/// the dice after each roll it has consumed.
pub trait DiceSource {
    /// True once a roll has come to rest and `face_value` is readable.
    fn is_landed(&self) -> bool;

    /// Face of the landed roll: `""` while rolling, `"1"`..`"6"` once landed.
    ///
    /// Raw text on purpose: misbehaving sources are validated by the
    /// sequencer, not trusted.
    fn face_value(&self) -> &str;

    /// Re-initialize. Must clear the landed flag and the face.
    fn initialize(&mut self, mode: ResetMode);

    /// Re-arm for the next roll.
    fn reset(&mut self) {
        self.initialize(ResetMode::Reposition);
    }
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn is_landed(&self) -> bool {
        (**self).is_landed()
    }

    fn face_value(&self) -> &str {
        (**self).face_value()
    }

    fn initialize(&mut self, mode: ResetMode) {
        (**self).initialize(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_mode_from_u8() {
        assert_eq!(ResetMode::try_from(0), Ok(ResetMode::Full));
        assert_eq!(ResetMode::try_from(1), Ok(ResetMode::Reposition));
        assert_eq!(ResetMode::try_from(2), Err(2));
        assert_eq!(ResetMode::Reposition as u8, 1);
    }

    struct Counter {
        modes: Vec<ResetMode>,
    }

    impl DiceSource for Counter {
        fn is_landed(&self) -> bool {
            false
        }

        fn face_value(&self) -> &str {
            ""
        }

        fn initialize(&mut self, mode: ResetMode) {
            self.modes.push(mode);
        }
    }

    #[test]
    fn test_reset_repositions() {
        let mut dice = Counter { modes: Vec::new() };
        dice.reset();
        dice.initialize(ResetMode::Full);
        assert_eq!(dice.modes, vec![ResetMode::Reposition, ResetMode::Full]);
    }

    #[test]
    fn test_boxed_source_forwards() {
        let mut dice: Box<dyn DiceSource> = Box::new(Counter { modes: Vec::new() });
        dice.reset();
        assert!(!dice.is_landed());
        assert_eq!(dice.face_value(), "");
    }
}
