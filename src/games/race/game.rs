//! Headless race implementation.

use tracing::info;

use crate::board::AnchorBoard;
use crate::core::{GameRng, Phase, PlayerId, Point3, SequencerConfig, SetupError};
use crate::dice::{DiceSource, SimulatedDice};
use crate::rules::StandardRules;
use crate::sequencer::{Events, RecordingSink, TurnSequencer};

/// Squares per board row.
const COLUMNS: u32 = 12;

/// Distance between neighbouring squares.
const SPACING: f32 = 1.0;

/// The sequencer type a `RaceGame` drives.
pub type RaceSequencer = TurnSequencer<SimulatedDice, AnchorBoard, StandardRules, RecordingSink>;

/// A complete game: simulated dice, serpentine board, recorded hints.
#[derive(Debug)]
pub struct RaceGame {
    sequencer: RaceSequencer,
    ticks: u64,
}

/// Builder for creating a RaceGame.
#[derive(Clone, Debug)]
pub struct RaceGameBuilder {
    player_count: usize,
    winning_square: u32,
    move_speed: f32,
    jumps: Vec<(u32, u32)>,
}

impl Default for RaceGameBuilder {
    fn default() -> Self {
        let config = SequencerConfig::default();
        Self {
            player_count: config.player_count,
            winning_square: config.winning_square,
            move_speed: config.move_speed,
            jumps: Vec::new(),
        }
    }
}

impl RaceGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn winning_square(mut self, square: u32) -> Self {
        self.winning_square = square;
        self
    }

    pub fn move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Add a jump square (ladder when `to > from`, snake otherwise).
    pub fn jump(mut self, from: u32, to: u32) -> Self {
        self.jumps.push((from, to));
        self
    }

    /// Build the game. The same seed replays the same game.
    pub fn build(self, seed: u64) -> Result<RaceGame, SetupError> {
        let config = SequencerConfig::new(self.player_count)
            .with_winning_square(self.winning_square)
            .with_move_speed(self.move_speed);
        config.validate()?;

        let rows = self.winning_square.div_ceil(COLUMNS);
        let board = AnchorBoard::serpentine(COLUMNS, rows, SPACING);

        // Pieces wait in a column beside square 1.
        let homes = PlayerId::all(self.player_count)
            .map(|player| Point3::new(-SPACING, 0.0, player.index() as f32 * SPACING * 0.5));

        let dice = SimulatedDice::with_rng(GameRng::new(seed).for_context("dice"));
        let rules = StandardRules::new(self.winning_square).with_jumps(self.jumps);

        let sequencer = TurnSequencer::builder(config)
            .dice(dice)
            .board(board)
            .pieces(homes)
            .rules(rules)
            .sink(RecordingSink::new())
            .build()?;

        Ok(RaceGame {
            sequencer,
            ticks: 0,
        })
    }
}

impl RaceGame {
    /// One frame: throw the dice if it is waiting to be thrown, then tick.
    pub fn step(&mut self, delta: f32) -> Events {
        if self.sequencer.phase() == Phase::WaitingForRoll && !self.sequencer.dice().is_landed() {
            self.sequencer.dice_mut().roll();
        }
        self.ticks += 1;
        self.sequencer.tick(delta)
    }

    /// Run until someone wins or `max_ticks` frames have passed.
    pub fn play(&mut self, delta: f32, max_ticks: u64) -> Option<PlayerId> {
        for _ in 0..max_ticks {
            if self.is_over() {
                break;
            }
            self.step(delta);
        }

        let winner = self.sequencer.winner();
        if let Some(player) = winner {
            info!(
                player = %player,
                ticks = self.ticks,
                turns = self.sequencer.state().turn_number(),
                "race finished"
            );
        }
        winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.sequencer.phase().is_terminal()
    }

    /// Frames stepped so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn sequencer(&self) -> &RaceSequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut RaceSequencer {
        &mut self.sequencer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::BoardGeometry;

    #[test]
    fn test_board_covers_winning_square() {
        let game = RaceGameBuilder::new().winning_square(100).build(1).unwrap();
        assert_eq!(game.sequencer().state().winning_square(), 100);
        assert!(game.sequencer().board().square_count() >= 100);
    }

    #[test]
    fn test_invalid_setup_is_rejected() {
        assert_eq!(
            RaceGameBuilder::new().player_count(0).build(1).unwrap_err(),
            SetupError::ZeroPlayers
        );
        assert_eq!(
            RaceGameBuilder::new().jump(5, 500).build(1).unwrap_err(),
            SetupError::InvalidJump { from: 5, to: 500 }
        );
    }

    #[test]
    fn test_short_race_finishes() {
        let mut game = RaceGameBuilder::new().winning_square(12).build(3).unwrap();
        let winner = game.play(1.0, 10_000);

        let winner = winner.expect("race should finish");
        assert!(game.is_over());
        assert_eq!(game.sequencer().position(winner), 12);
    }
}
