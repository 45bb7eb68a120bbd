//! Movement rules.
//!
//! Rules decide where a roll takes a piece; the sequencer decides when.
//! `StandardRules` is the classic race:
//!
//! - A piece off the board (square 0) enters on square 1 with a 1 or a 6.
//! - Otherwise it advances by the roll.
//! - Overshooting the winning square bounces back by the excess.
//! - Landing exactly on the winning square wins.
//! - A 6 grants another roll.
//!
//! Optional jump squares (ladders up, snakes down) move a piece on after it
//! lands.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{SetupError, OFF_BOARD};
use crate::dice::DieFace;

/// Where a roll takes a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Piece was off the board and enters on `target`.
    Enter { target: u32 },
    /// Plain advance.
    Advance { target: u32 },
    /// Overshot: `raw` is where it would have landed, `target` where it
    /// ends up after bouncing back.
    Bounce { raw: u32, target: u32 },
    /// Piece stays off the board; the roll is spent.
    EntryDenied,
}

impl MoveOutcome {
    /// Destination square, `None` when the piece does not move.
    #[must_use]
    pub fn target(self) -> Option<u32> {
        match self {
            MoveOutcome::Enter { target }
            | MoveOutcome::Advance { target }
            | MoveOutcome::Bounce { target, .. } => Some(target),
            MoveOutcome::EntryDenied => None,
        }
    }
}

/// Rules trait.
///
/// Implementations must be pure: the same inputs always give the same
/// outcome. The sequencer calls these between frames and replays rely on it.
pub trait MovementRules {
    /// Square a piece must land on exactly to win.
    fn winning_square(&self) -> u32;

    /// Where `roll` takes a piece currently on `current`.
    fn outcome(&self, current: u32, roll: DieFace) -> MoveOutcome;

    /// Destination of the jump square at `square`, if there is one.
    fn jump_from(&self, _square: u32) -> Option<u32> {
        None
    }

    /// Does this roll let the same player roll again?
    fn grants_extra_roll(&self, roll: DieFace) -> bool {
        roll == DieFace::SIX
    }

    /// Check the rules against a board of `square_count` squares.
    fn validate(&self, square_count: u32) -> Result<(), SetupError> {
        if square_count < self.winning_square() {
            return Err(SetupError::BoardTooSmall {
                squares: square_count,
                winning_square: self.winning_square(),
            });
        }
        Ok(())
    }
}

/// Pure movement target rule.
///
/// Returns `None` when a piece off the board fails to enter.
///
/// ```
/// use rust_dicerace::rules::movement_target;
///
/// assert_eq!(movement_target(0, 6, 120), Some(1));
/// assert_eq!(movement_target(0, 3, 120), None);
/// assert_eq!(movement_target(10, 4, 120), Some(14));
/// assert_eq!(movement_target(4, 5, 6), Some(3));
/// ```
#[must_use]
pub fn movement_target(current: u32, rolled: u8, winning_square: u32) -> Option<u32> {
    let roll = DieFace::new(rolled)?;
    StandardRules::new(winning_square).outcome(current, roll).target()
}

/// The classic race rules with an optional jump table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRules {
    winning_square: u32,
    jumps: FxHashMap<u32, u32>,
}

impl StandardRules {
    #[must_use]
    pub fn new(winning_square: u32) -> Self {
        Self {
            winning_square,
            jumps: FxHashMap::default(),
        }
    }

    /// Add a jump square: landing on `from` continues to `to`.
    #[must_use]
    pub fn with_jump(mut self, from: u32, to: u32) -> Self {
        self.jumps.insert(from, to);
        self
    }

    /// Add several jump squares.
    #[must_use]
    pub fn with_jumps(mut self, jumps: impl IntoIterator<Item = (u32, u32)>) -> Self {
        self.jumps.extend(jumps);
        self
    }

    /// Configured jumps, unordered.
    pub fn jumps(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.jumps.iter().map(|(&from, &to)| (from, to))
    }
}

impl MovementRules for StandardRules {
    fn winning_square(&self) -> u32 {
        self.winning_square
    }

    fn outcome(&self, current: u32, roll: DieFace) -> MoveOutcome {
        if current == OFF_BOARD {
            return match roll.value() {
                1 | 6 => MoveOutcome::Enter { target: 1 },
                _ => MoveOutcome::EntryDenied,
            };
        }

        let raw = current + u32::from(roll.value());
        if raw <= self.winning_square {
            return MoveOutcome::Advance { target: raw };
        }

        let excess = raw - self.winning_square;
        let target = match self.winning_square.checked_sub(excess) {
            Some(target) => target,
            None => {
                // Only reachable on boards shorter than a die roll.
                warn!(
                    raw,
                    winning_square = self.winning_square,
                    "bounce-back below the first square, clamping to off-board"
                );
                OFF_BOARD
            }
        };
        MoveOutcome::Bounce { raw, target }
    }

    fn jump_from(&self, square: u32) -> Option<u32> {
        self.jumps.get(&square).copied()
    }

    fn validate(&self, square_count: u32) -> Result<(), SetupError> {
        if square_count < self.winning_square {
            return Err(SetupError::BoardTooSmall {
                squares: square_count,
                winning_square: self.winning_square,
            });
        }
        for (from, to) in self.jumps() {
            let from_ok = (1..self.winning_square).contains(&from);
            let to_ok = (1..=self.winning_square).contains(&to);
            if !from_ok || !to_ok || from == to {
                return Err(SetupError::InvalidJump { from, to });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(n: u8) -> DieFace {
        DieFace::new(n).unwrap()
    }

    #[test]
    fn test_entry_needs_one_or_six() {
        let rules = StandardRules::new(120);

        assert_eq!(rules.outcome(0, face(1)), MoveOutcome::Enter { target: 1 });
        assert_eq!(rules.outcome(0, face(6)), MoveOutcome::Enter { target: 1 });
        for n in 2..=5 {
            assert_eq!(rules.outcome(0, face(n)), MoveOutcome::EntryDenied);
        }
    }

    #[test]
    fn test_advance() {
        let rules = StandardRules::new(120);
        assert_eq!(rules.outcome(1, face(6)), MoveOutcome::Advance { target: 7 });
        assert_eq!(rules.outcome(114, face(6)), MoveOutcome::Advance { target: 120 });
    }

    #[test]
    fn test_bounce_back() {
        let rules = StandardRules::new(6);
        assert_eq!(rules.outcome(4, face(5)), MoveOutcome::Bounce { raw: 9, target: 3 });
        assert_eq!(rules.outcome(5, face(6)), MoveOutcome::Bounce { raw: 11, target: 1 });
    }

    #[test]
    fn test_bounce_clamps_at_off_board() {
        let rules = StandardRules::new(2);
        // 1 + 6 = 7, excess 5 > 2
        assert_eq!(rules.outcome(1, face(6)), MoveOutcome::Bounce { raw: 7, target: 0 });
    }

    #[test]
    fn test_extra_roll_only_on_six() {
        let rules = StandardRules::new(120);
        assert!(rules.grants_extra_roll(face(6)));
        for n in 1..=5 {
            assert!(!rules.grants_extra_roll(face(n)));
        }
    }

    #[test]
    fn test_jump_lookup() {
        let rules = StandardRules::new(30).with_jump(4, 14).with_jump(17, 7);

        assert_eq!(rules.jump_from(4), Some(14));
        assert_eq!(rules.jump_from(17), Some(7));
        assert_eq!(rules.jump_from(5), None);
        assert_eq!(rules.jumps().count(), 2);
    }

    #[test]
    fn test_validate_board_size() {
        let rules = StandardRules::new(120);
        assert!(rules.validate(120).is_ok());
        assert_eq!(
            rules.validate(100),
            Err(SetupError::BoardTooSmall {
                squares: 100,
                winning_square: 120
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_jumps() {
        for (from, to) in [(0, 5), (30, 5), (5, 31), (5, 0), (5, 5)] {
            let rules = StandardRules::new(30).with_jump(from, to);
            assert_eq!(rules.validate(30), Err(SetupError::InvalidJump { from, to }));
        }
        assert!(StandardRules::new(30).with_jump(29, 30).validate(30).is_ok());
    }

    #[test]
    fn test_movement_target_rejects_invalid_roll() {
        assert_eq!(movement_target(3, 0, 120), None);
        assert_eq!(movement_target(3, 7, 120), None);
    }
}
