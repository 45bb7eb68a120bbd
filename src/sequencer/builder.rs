//! Builder for `TurnSequencer`.
//!
//! All setup validation happens in `build`. A sequencer that fails to build
//! never exists, so nothing downstream has to check for a half-configured
//! game.

use tracing::error;

use super::presentation::{NullSink, PresentationSink};
use super::turn::TurnSequencer;
use crate::board::BoardGeometry;
use crate::core::{GameState, Phase, PlayerMap, Point3, SequencerConfig, SetupError, OFF_BOARD};
use crate::dice::DiceSource;
use crate::rules::{MovementRules, StandardRules};

/// Collects collaborators and pieces, then validates them together.
///
/// ```
/// use rust_dicerace::board::AnchorBoard;
/// use rust_dicerace::core::{Point3, SequencerConfig};
/// use rust_dicerace::dice::ScriptedDice;
/// use rust_dicerace::sequencer::TurnSequencer;
///
/// let sequencer = TurnSequencer::builder(SequencerConfig::new(2).with_winning_square(30))
///     .dice(ScriptedDice::new(["6"]))
///     .board(AnchorBoard::serpentine(6, 5, 1.0))
///     .pieces([Point3::new(-1.0, 0.0, 0.0), Point3::new(-1.0, 0.0, 0.5)])
///     .build()
///     .unwrap();
///
/// assert_eq!(sequencer.state().player_count(), 2);
/// ```
pub struct TurnSequencerBuilder<D, B, R = StandardRules, P = NullSink> {
    config: SequencerConfig,
    dice: Option<D>,
    board: Option<B>,
    rules: R,
    sink: P,
    pieces: Vec<Point3>,
    resume: Option<GameState>,
}

impl<D, B> TurnSequencer<D, B>
where
    D: DiceSource,
    B: BoardGeometry,
{
    /// Start building a sequencer with standard rules and no presentation.
    #[must_use]
    pub fn builder(config: SequencerConfig) -> TurnSequencerBuilder<D, B> {
        TurnSequencerBuilder::new(config)
    }
}

impl<D, B> TurnSequencerBuilder<D, B> {
    #[must_use]
    pub fn new(config: SequencerConfig) -> Self {
        let rules = StandardRules::new(config.winning_square);
        Self {
            config,
            dice: None,
            board: None,
            rules,
            sink: NullSink,
            pieces: Vec::new(),
            resume: None,
        }
    }
}

impl<D, B, P> TurnSequencerBuilder<D, B, StandardRules, P> {
    /// Add a jump square to the standard rules.
    #[must_use]
    pub fn jump(mut self, from: u32, to: u32) -> Self {
        self.rules = self.rules.with_jump(from, to);
        self
    }
}

impl<D, B, R, P> TurnSequencerBuilder<D, B, R, P> {
    /// Dice collaborator.
    #[must_use]
    pub fn dice(mut self, dice: D) -> Self {
        self.dice = Some(dice);
        self
    }

    /// Board collaborator.
    #[must_use]
    pub fn board(mut self, board: B) -> Self {
        self.board = Some(board);
        self
    }

    /// Register one piece, resting at `home` while off the board.
    #[must_use]
    pub fn piece(mut self, home: Point3) -> Self {
        self.pieces.push(home);
        self
    }

    /// Register pieces in seat order.
    #[must_use]
    pub fn pieces(mut self, homes: impl IntoIterator<Item = Point3>) -> Self {
        self.pieces.extend(homes);
        self
    }

    /// Continue a saved game instead of starting fresh.
    ///
    /// A snapshot taken mid-move resumes waiting for the same player's roll;
    /// the interrupted roll is lost. Snapshots with an unknown current
    /// player, or a winner that disagrees with the phase, are rejected.
    #[must_use]
    pub fn resume(mut self, state: GameState) -> Self {
        self.resume = Some(state);
        self
    }

    /// Replace the movement rules.
    #[must_use]
    pub fn rules<R2>(self, rules: R2) -> TurnSequencerBuilder<D, B, R2, P> {
        TurnSequencerBuilder {
            config: self.config,
            dice: self.dice,
            board: self.board,
            rules,
            sink: self.sink,
            pieces: self.pieces,
            resume: self.resume,
        }
    }

    /// Send presentation hints to `sink`.
    #[must_use]
    pub fn sink<P2>(self, sink: P2) -> TurnSequencerBuilder<D, B, R, P2> {
        TurnSequencerBuilder {
            config: self.config,
            dice: self.dice,
            board: self.board,
            rules: self.rules,
            sink,
            pieces: self.pieces,
            resume: self.resume,
        }
    }
}

impl<D, B, R, P> TurnSequencerBuilder<D, B, R, P>
where
    D: DiceSource,
    B: BoardGeometry,
    R: MovementRules,
    P: PresentationSink,
{
    /// Validate everything and start the game.
    pub fn build(self) -> Result<TurnSequencer<D, B, R, P>, SetupError> {
        self.try_build().map_err(|err| {
            error!(%err, "turn sequencer setup failed");
            err
        })
    }

    fn try_build(self) -> Result<TurnSequencer<D, B, R, P>, SetupError> {
        let config = self.config;
        config.validate()?;

        let dice = self.dice.ok_or(SetupError::MissingCollaborator("dice"))?;
        let board = self.board.ok_or(SetupError::MissingCollaborator("board"))?;

        let rules = self.rules;
        if rules.winning_square() != config.winning_square {
            return Err(SetupError::RulesMismatch {
                config: config.winning_square,
                rules: rules.winning_square(),
            });
        }
        rules.validate(board.square_count())?;

        let found = self.pieces.len();
        if found != config.player_count {
            return Err(SetupError::PieceCountMismatch {
                expected: config.player_count,
                found,
            });
        }
        let home_points = PlayerMap::from_vec(self.pieces).ok_or(SetupError::PieceCountMismatch {
            expected: config.player_count,
            found,
        })?;

        let state = match self.resume {
            Some(state) => resumed_state(state, &config)?,
            None => GameState::new(config.player_count, config.winning_square),
        };

        // Pieces already on the board start on their square's anchor.
        let piece_points = PlayerMap::new(config.player_count, |player| {
            match state.position(player) {
                OFF_BOARD => home_points[player],
                square => board.position_of(square).unwrap_or(home_points[player]),
            }
        });

        Ok(TurnSequencer::assemble(
            config,
            dice,
            board,
            rules,
            self.sink,
            state,
            home_points,
            piece_points,
        ))
    }
}

fn resumed_state(mut state: GameState, config: &SequencerConfig) -> Result<GameState, SetupError> {
    if state.player_count() != config.player_count {
        return Err(SetupError::SnapshotMismatch("player count"));
    }
    if state.winning_square() != config.winning_square {
        return Err(SetupError::SnapshotMismatch("winning square"));
    }
    if state
        .positions()
        .as_slice()
        .iter()
        .any(|&square| square > config.winning_square)
    {
        return Err(SetupError::SnapshotMismatch("position beyond winning square"));
    }
    if state.current_player().index() >= config.player_count {
        return Err(SetupError::SnapshotMismatch("current player"));
    }

    // A winner exists exactly when the game is over, and sits on the winning square.
    match state.winner() {
        Some(winner) => {
            if !state.phase().is_terminal()
                || winner.index() >= config.player_count
                || state.position(winner) != config.winning_square
            {
                return Err(SetupError::SnapshotMismatch("winner"));
            }
        }
        None => {
            if state.phase().is_terminal() {
                return Err(SetupError::SnapshotMismatch("winner"));
            }
            if state
                .positions()
                .as_slice()
                .contains(&config.winning_square)
            {
                return Err(SetupError::SnapshotMismatch("winner"));
            }
        }
    }

    if matches!(state.phase(), Phase::ProcessingMove | Phase::MovingPiece) {
        state.set_phase(Phase::WaitingForRoll);
    }
    Ok(state)
}

impl<D, B, R, P> std::fmt::Debug for TurnSequencerBuilder<D, B, R, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnSequencerBuilder")
            .field("config", &self.config)
            .field("has_dice", &self.dice.is_some())
            .field("has_board", &self.board.is_some())
            .field("pieces", &self.pieces.len())
            .finish_non_exhaustive()
    }
}
