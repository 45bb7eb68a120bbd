//! A seeded die for headless hosts.

use tracing::debug;

use super::face::DieFace;
use super::source::{DiceSource, ResetMode};
use crate::core::{GameRng, GameRngState};

/// Fair six-sided die driven by `GameRng`.
///
/// Rolls land immediately. A die that has landed stays landed until it is
/// re-armed with `initialize`/`reset`; rolling it again before that is
/// refused, which mirrors a physical die that has to be picked up first.
#[derive(Clone, Debug)]
pub struct SimulatedDice {
    rng: GameRng,
    armed: bool,
    landed: bool,
    face: String,
    rolls: u64,
}

impl SimulatedDice {
    /// Create an armed die from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create an armed die from an existing RNG stream.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        let mut dice = Self {
            rng,
            armed: false,
            landed: false,
            face: String::new(),
            rolls: 0,
        };
        dice.initialize(ResetMode::Full);
        dice
    }

    /// Throw the die. `None` if it has not been re-armed since the last roll.
    pub fn roll(&mut self) -> Option<DieFace> {
        if !self.armed {
            debug!("dice not armed, ignoring roll");
            return None;
        }

        let face = DieFace::new(self.rng.roll_d6())?;
        self.armed = false;
        self.landed = true;
        self.face = face.to_string();
        self.rolls += 1;
        debug!(face = face.value(), rolls = self.rolls, "dice landed");
        Some(face)
    }

    /// True when the die is ready to be thrown.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Rolls since the last full reset.
    #[must_use]
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// RNG position, for replays.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl DiceSource for SimulatedDice {
    fn is_landed(&self) -> bool {
        self.landed
    }

    fn face_value(&self) -> &str {
        &self.face
    }

    fn initialize(&mut self, mode: ResetMode) {
        if mode == ResetMode::Full {
            self.rolls = 0;
        }
        self.armed = true;
        self.landed = false;
        self.face.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_die_is_armed_and_idle() {
        let dice = SimulatedDice::new(1);
        assert!(dice.is_armed());
        assert!(!dice.is_landed());
        assert_eq!(dice.face_value(), "");
    }

    #[test]
    fn test_roll_lands_with_valid_face() {
        let mut dice = SimulatedDice::new(1);
        let face = dice.roll().unwrap();

        assert!(dice.is_landed());
        assert!(!dice.is_armed());
        assert_eq!(dice.face_value(), face.to_string());
        assert_eq!(DieFace::parse(dice.face_value()).unwrap(), face);
    }

    #[test]
    fn test_cannot_roll_until_rearmed() {
        let mut dice = SimulatedDice::new(1);
        dice.roll().unwrap();
        assert!(dice.roll().is_none());

        dice.reset();
        assert!(!dice.is_landed());
        assert_eq!(dice.face_value(), "");
        assert!(dice.roll().is_some());
        assert_eq!(dice.rolls(), 2);
    }

    #[test]
    fn test_full_reset_clears_roll_count() {
        let mut dice = SimulatedDice::new(1);
        dice.roll();
        dice.initialize(ResetMode::Full);
        assert_eq!(dice.rolls(), 0);
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = SimulatedDice::new(99);
        let mut b = SimulatedDice::new(99);

        for _ in 0..20 {
            assert_eq!(a.roll(), b.roll());
            a.reset();
            b.reset();
        }
        assert_eq!(a.rng_state(), b.rng_state());
    }
}
