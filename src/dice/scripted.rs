//! A die that plays back a fixed list of faces.

use std::collections::VecDeque;

use super::source::{DiceSource, ResetMode};

/// Plays back raw face strings in order.
///
/// Faces are not validated, so a script can feed the sequencer the same
/// garbage a broken side detector would (`""`, `"7"`, `"x"`).
///
/// ```
/// use rust_dicerace::dice::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new(["6", "2"]);
/// assert!(dice.roll());
/// assert_eq!(dice.face_value(), "6");
/// dice.reset();
/// assert!(!dice.is_landed());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    script: VecDeque<String>,
    landed: bool,
    face: String,
    resets: usize,
}

impl ScriptedDice {
    pub fn new<I, S>(faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: faces.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queue more faces.
    pub fn push(&mut self, face: impl Into<String>) {
        self.script.push_back(face.into());
    }

    /// Land the next scripted face. Returns false when the script is empty.
    pub fn roll(&mut self) -> bool {
        match self.script.pop_front() {
            Some(face) => {
                self.face = face;
                self.landed = true;
                true
            }
            None => false,
        }
    }

    /// Faces not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// How many times the die has been initialized or reset.
    #[must_use]
    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl DiceSource for ScriptedDice {
    fn is_landed(&self) -> bool {
        self.landed
    }

    fn face_value(&self) -> &str {
        &self.face
    }

    fn initialize(&mut self, _mode: ResetMode) {
        self.landed = false;
        self.face.clear();
        self.resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_back_in_order() {
        let mut dice = ScriptedDice::new(["1", "x", "6"]);

        assert!(dice.roll());
        assert_eq!(dice.face_value(), "1");
        assert!(dice.roll());
        assert_eq!(dice.face_value(), "x");
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn test_empty_script_does_not_land() {
        let mut dice = ScriptedDice::default();
        assert!(!dice.roll());
        assert!(!dice.is_landed());

        dice.push("3");
        assert!(dice.roll());
        assert!(dice.is_landed());
    }

    #[test]
    fn test_reset_clears_and_counts() {
        let mut dice = ScriptedDice::new(["4"]);
        dice.roll();
        dice.reset();

        assert!(!dice.is_landed());
        assert_eq!(dice.face_value(), "");
        assert_eq!(dice.resets(), 1);
    }
}
