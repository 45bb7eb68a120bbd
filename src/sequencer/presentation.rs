//! Presentation hints for animation and UI layers.
//!
//! The sequencer writes hints and never reads them back. Hosts forward them
//! to whatever drives their character animators and turn banners.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Walk speed hint while a piece is moving.
pub const WALKING: f32 = 1.0;

/// Walk speed hint while a piece stands still.
pub const IDLE: f32 = 0.0;

/// One-shot presentation triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresentationTrigger {
    /// The piece was sent backwards by a jump square.
    Hurt,
}

/// What the turn banner should say.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnIndicator {
    Turn(PlayerId),
    RollAgain(PlayerId),
    Winner(PlayerId),
}

impl TurnIndicator {
    #[must_use]
    pub fn player(self) -> PlayerId {
        match self {
            TurnIndicator::Turn(p) | TurnIndicator::RollAgain(p) | TurnIndicator::Winner(p) => p,
        }
    }
}

impl std::fmt::Display for TurnIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnIndicator::Turn(p) => write!(f, "{p}'s Turn"),
            TurnIndicator::RollAgain(p) => write!(f, "{p} rolls again!"),
            TurnIndicator::Winner(p) => write!(f, "{p} Wins!"),
        }
    }
}

/// Write-only target for presentation hints.
pub trait PresentationSink {
    /// Walk speed for `player`'s piece: `WALKING` or `IDLE`.
    fn set_walk_speed(&mut self, player: PlayerId, speed: f32);

    /// Fire a one-shot trigger on `player`'s piece.
    fn trigger(&mut self, _player: PlayerId, _trigger: PresentationTrigger) {}

    /// Turn banner changed.
    fn turn_changed(&mut self, _indicator: TurnIndicator) {}
}

/// Discards every hint.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn set_walk_speed(&mut self, _player: PlayerId, _speed: f32) {}
}

/// A recorded hint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Hint {
    Walk(PlayerId, f32),
    Trigger(PlayerId, PresentationTrigger),
    Turn(TurnIndicator),
}

/// Keeps every hint in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    hints: Vec<Hint>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    /// Latest turn banner, if any.
    #[must_use]
    pub fn last_indicator(&self) -> Option<TurnIndicator> {
        self.hints.iter().rev().find_map(|hint| match hint {
            Hint::Turn(indicator) => Some(*indicator),
            _ => None,
        })
    }

    /// Latest walk speed sent for `player`, `IDLE` if none.
    #[must_use]
    pub fn walk_speed(&self, player: PlayerId) -> f32 {
        self.hints
            .iter()
            .rev()
            .find_map(|hint| match hint {
                Hint::Walk(p, speed) if *p == player => Some(*speed),
                _ => None,
            })
            .unwrap_or(IDLE)
    }

    pub fn clear(&mut self) {
        self.hints.clear();
    }
}

impl PresentationSink for RecordingSink {
    fn set_walk_speed(&mut self, player: PlayerId, speed: f32) {
        self.hints.push(Hint::Walk(player, speed));
    }

    fn trigger(&mut self, player: PlayerId, trigger: PresentationTrigger) {
        self.hints.push(Hint::Trigger(player, trigger));
    }

    fn turn_changed(&mut self, indicator: TurnIndicator) {
        self.hints.push(Hint::Turn(indicator));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_text() {
        let p = PlayerId::new(0);
        assert_eq!(TurnIndicator::Turn(p).to_string(), "Player 1's Turn");
        assert_eq!(TurnIndicator::RollAgain(p).to_string(), "Player 1 rolls again!");
        assert_eq!(TurnIndicator::Winner(PlayerId::new(1)).to_string(), "Player 2 Wins!");
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::new();
        let p = PlayerId::new(1);

        assert_eq!(sink.walk_speed(p), IDLE);
        assert_eq!(sink.last_indicator(), None);

        sink.set_walk_speed(p, WALKING);
        sink.turn_changed(TurnIndicator::Turn(p));
        sink.trigger(p, PresentationTrigger::Hurt);

        assert_eq!(sink.walk_speed(p), WALKING);
        assert_eq!(sink.walk_speed(PlayerId::new(0)), IDLE);
        assert_eq!(sink.last_indicator(), Some(TurnIndicator::Turn(p)));
        assert_eq!(sink.hints().len(), 3);

        sink.clear();
        assert!(sink.hints().is_empty());
    }
}
