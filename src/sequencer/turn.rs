//! The turn sequencer.
//!
//! ## State machine
//!
//! ```text
//! WaitingForRoll --landed--> ProcessingMove --valid--> MovingPiece --done--> WaitingForRoll
//!       ^                        |   |                      |
//!       +------invalid face------+   +--entry denied--+     +--winning square--> GameOver
//!       +---------------------------------------------+
//! ```
//!
//! The host calls `tick(delta)` once per frame. Everything else happens in
//! response: polling the dice, interpreting the roll, sliding the piece,
//! committing the square, passing the turn.

use tracing::{debug, error, info, warn};

use super::animation::{AnimationStatus, MoveAnimation};
use super::event::{Events, SequencerEvent};
use super::presentation::{PresentationSink, PresentationTrigger, TurnIndicator, IDLE, WALKING};
use crate::board::BoardGeometry;
use crate::core::{
    GameState, MoveCommand, MoveError, MoveRecord, Phase, PlayerId, PlayerMap, Point3,
    SequencerConfig, OFF_BOARD,
};
use crate::dice::{DiceSource, DieFace, ResetMode};
use crate::rules::{MoveOutcome, MovementRules, StandardRules};

use super::presentation::NullSink;

/// The move currently being animated.
#[derive(Clone, Debug)]
struct ActiveMove {
    command: MoveCommand,
    animation: MoveAnimation,
}

/// Turn and movement state machine.
///
/// Owns the game state exclusively. Collaborators are supplied at build time
/// (see `TurnSequencerBuilder`) and only ever used from `&mut self` calls, so
/// no two moves can interleave.
pub struct TurnSequencer<D, B, R = StandardRules, P = NullSink> {
    config: SequencerConfig,
    dice: D,
    board: B,
    rules: R,
    sink: P,
    state: GameState,
    /// Where each piece rests while off the board.
    home_points: PlayerMap<Point3>,
    /// Current world point of each piece.
    piece_points: PlayerMap<Point3>,
    active: Option<ActiveMove>,
    /// Set once a landing has been taken, cleared when the dice is re-armed.
    roll_consumed: bool,
    events: Events,
}

impl<D, B, R, P> TurnSequencer<D, B, R, P>
where
    D: DiceSource,
    B: BoardGeometry,
    R: MovementRules,
    P: PresentationSink,
{
    /// Assemble a validated sequencer. Called by the builder only.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn assemble(
        config: SequencerConfig,
        mut dice: D,
        board: B,
        rules: R,
        mut sink: P,
        state: GameState,
        home_points: PlayerMap<Point3>,
        piece_points: PlayerMap<Point3>,
    ) -> Self {
        dice.initialize(ResetMode::Full);
        let current = state.current_player();
        let indicator = match state.winner() {
            Some(winner) => TurnIndicator::Winner(winner),
            None => TurnIndicator::Turn(current),
        };
        sink.turn_changed(indicator);

        info!(
            players = state.player_count(),
            winning_square = state.winning_square(),
            player = %current,
            "game initialized, waiting for roll"
        );

        Self {
            config,
            dice,
            board,
            rules,
            sink,
            state,
            home_points,
            piece_points,
            active: None,
            roll_consumed: false,
            events: Events::new(),
        }
    }

    // === Host loop ===

    /// Advance one frame.
    ///
    /// Polls the dice while waiting for a roll and advances the active move
    /// while a piece is moving. Returns everything that happened since the
    /// last drain.
    pub fn tick(&mut self, delta: f32) -> Events {
        match self.state.phase() {
            Phase::WaitingForRoll => {
                self.poll_dice_result();
            }
            Phase::MovingPiece => {
                self.advance_move(delta);
            }
            Phase::ProcessingMove | Phase::GameOver => {}
        }
        self.take_events()
    }

    /// Drain pending events.
    pub fn take_events(&mut self) -> Events {
        std::mem::take(&mut self.events)
    }

    // === Operations ===

    /// Take a landed roll, at most once per landing.
    ///
    /// Returns true when a landing was processed. Does nothing unless the
    /// sequencer is waiting for a roll and the dice has landed.
    pub fn poll_dice_result(&mut self) -> bool {
        if self.state.phase() != Phase::WaitingForRoll
            || self.roll_consumed
            || !self.dice.is_landed()
        {
            return false;
        }

        self.roll_consumed = true;
        self.state.set_phase(Phase::ProcessingMove);
        let face = self.dice.face_value().to_owned();
        // Failures are logged and recovered inside.
        let _ = self.interpret_roll(&face);
        true
    }

    /// Interpret a raw dice face for the current player.
    ///
    /// An unreadable face resets the dice and leaves the same player to roll
    /// again. A valid face starts the move, or ends the turn if the piece
    /// cannot enter the board.
    pub fn interpret_roll(&mut self, face: &str) -> Result<DieFace, MoveError> {
        match self.state.phase() {
            Phase::GameOver => return Err(MoveError::GameOver),
            Phase::MovingPiece => return Err(MoveError::RollNotExpected(Phase::MovingPiece)),
            Phase::WaitingForRoll | Phase::ProcessingMove => {}
        }

        self.roll_consumed = true;
        self.state.set_phase(Phase::ProcessingMove);
        let player = self.state.current_player();

        let roll = match DieFace::parse(face) {
            Ok(roll) => roll,
            Err(err) => {
                warn!(player = %player, face, "invalid dice face, resetting dice");
                self.events
                    .extend(SequencerEvent::from_roll_error(player, &err));
                self.reset_dice();
                self.roll_consumed = false;
                self.state.set_phase(Phase::WaitingForRoll);
                return Err(err);
            }
        };

        info!(player = %player, roll = roll.value(), "rolled");
        self.events
            .push(SequencerEvent::RollAccepted { player, roll });

        let from = self.state.position(player);
        let outcome = self.rules.outcome(from, roll);
        match outcome {
            MoveOutcome::EntryDenied => {
                info!(player = %player, roll = roll.value(), "needs a 1 or a 6 to start");
                self.events
                    .push(SequencerEvent::EntryDenied { player, roll });
                self.end_turn(roll);
            }
            MoveOutcome::Enter { target } => {
                info!(player = %player, "enters the board");
                let _ = self.animate_move(MoveCommand::new(player, roll, from, target));
            }
            MoveOutcome::Advance { target } => {
                let _ = self.animate_move(MoveCommand::new(player, roll, from, target));
            }
            MoveOutcome::Bounce { raw, target } => {
                info!(player = %player, raw, target, "overshot, bouncing back");
                let _ = self.animate_move(MoveCommand::new(player, roll, from, target));
            }
        }

        Ok(roll)
    }

    /// Start animating `command`.
    ///
    /// A move already in flight is cancelled first. If the target square has
    /// no anchor the move is aborted: the piece keeps its committed square
    /// and the turn ends as if no progress was made.
    ///
    /// Rejected outside `ProcessingMove`/`MovingPiece` and for anyone but the
    /// current player.
    pub fn animate_move(&mut self, command: MoveCommand) -> Result<(), MoveError> {
        self.check_move(&command)?;

        if let Some(previous) = self.active.take() {
            let cancelled = previous.command;
            warn!(
                player = %cancelled.player,
                target = cancelled.target,
                "stopping an in-flight move to start a new one"
            );
            self.sink.set_walk_speed(cancelled.player, IDLE);
            self.events.push(SequencerEvent::MoveCancelled {
                player: cancelled.player,
                to: cancelled.target,
            });
        }

        self.state.set_phase(Phase::MovingPiece);
        let player = command.player;

        let end = match self.target_point(player, command.target) {
            Ok(point) => point,
            Err(err) => {
                error!(player = %player, target = command.target, %err, "cannot move piece, aborting move");
                self.sink.set_walk_speed(player, IDLE);
                self.events.push(SequencerEvent::MoveAborted {
                    player,
                    square: self.state.position(player),
                    target: command.target,
                });
                self.end_turn(command.roll);
                return Err(err);
            }
        };

        let animation = MoveAnimation::new(
            self.piece_points[player],
            end,
            self.config.move_speed,
            self.config.snap_epsilon,
        );
        debug!(
            player = %player,
            target = command.target,
            duration = animation.duration(),
            "move started"
        );

        self.sink.set_walk_speed(player, WALKING);
        self.events.push(SequencerEvent::MoveStarted {
            player,
            from: command.from,
            to: command.target,
        });
        self.active = Some(ActiveMove { command, animation });
        Ok(())
    }

    /// Advance the active move by `delta` seconds.
    ///
    /// Returns `None` when no piece is moving. On completion the move is
    /// committed through `complete_move`.
    pub fn advance_move(&mut self, delta: f32) -> Option<AnimationStatus> {
        let active = self.active.as_mut()?;
        let status = active.animation.advance(delta);
        let player = active.command.player;
        self.piece_points[player] = status.point();

        if status.is_completed() {
            self.sink.set_walk_speed(player, IDLE);
            if let Some(finished) = self.active.take() {
                let _ = self.complete_move(finished.command);
            }
        }
        Some(status)
    }

    /// Commit a finished move.
    ///
    /// Records the square, ends the game on the winning square, follows a
    /// jump square, or ends the turn. Same guards as `animate_move`.
    pub fn complete_move(&mut self, command: MoveCommand) -> Result<(), MoveError> {
        self.check_move(&command)?;
        let winning_square = self.rules.winning_square();
        if command.target > winning_square {
            return Err(MoveError::BeyondWinningSquare {
                square: command.target,
                winning_square,
            });
        }

        let player = command.player;
        if let Some(stale) = self.active.take() {
            warn!(player = %stale.command.player, "completing a move while another is animating");
            self.sink.set_walk_speed(stale.command.player, IDLE);
        }
        if let Ok(point) = self.target_point(player, command.target) {
            self.piece_points[player] = point;
        }
        self.state
            .commit_position(MoveRecord::from_command(&command, self.state.turn_number()));
        info!(player = %player, square = command.target, "moved");
        self.events.push(SequencerEvent::MoveCompleted {
            player,
            square: command.target,
        });

        if command.target == winning_square {
            info!(player = %player, "wins");
            self.state.declare_winner(player);
            self.reset_dice();
            self.events.push(SequencerEvent::GameWon { player });
            self.sink.turn_changed(TurnIndicator::Winner(player));
            return Ok(());
        }

        if !command.is_jump {
            if let Some(destination) = self.rules.jump_from(command.target) {
                info!(player = %player, from = command.target, to = destination, "jump square");
                self.events.push(SequencerEvent::Jump {
                    player,
                    from: command.target,
                    to: destination,
                });
                if destination < command.target {
                    self.sink.trigger(player, PresentationTrigger::Hurt);
                }
                return self.animate_move(command.jump_to(destination));
            }
        }

        self.end_turn(command.roll);
        Ok(())
    }

    /// Re-arm the dice and hand out the next roll.
    ///
    /// A 6 keeps the turn with the same player; anything else passes it on.
    fn end_turn(&mut self, roll: DieFace) {
        self.reset_dice();
        if self.state.phase().is_terminal() {
            return;
        }

        self.roll_consumed = false;
        self.state.set_phase(Phase::WaitingForRoll);

        let player = self.state.current_player();
        if self.rules.grants_extra_roll(roll) {
            info!(player = %player, "rolled a 6, roll again");
            self.events.push(SequencerEvent::ExtraRoll { player });
            self.sink.turn_changed(TurnIndicator::RollAgain(player));
        } else {
            let next = self.state.pass_turn();
            info!(player = %next, turn = self.state.turn_number(), "turn passed");
            self.events.push(SequencerEvent::TurnPassed { player: next });
            self.sink.turn_changed(TurnIndicator::Turn(next));
        }
    }

    fn reset_dice(&mut self) {
        debug!("re-arming dice");
        self.dice.reset();
    }

    /// Moves only happen mid-turn, and only for the player whose turn it is.
    fn check_move(&self, command: &MoveCommand) -> Result<(), MoveError> {
        match self.state.phase() {
            Phase::GameOver => return Err(MoveError::GameOver),
            Phase::WaitingForRoll => {
                return Err(MoveError::RollNotExpected(Phase::WaitingForRoll))
            }
            Phase::ProcessingMove | Phase::MovingPiece => {}
        }

        let player = command.player;
        if player.index() >= self.state.player_count() {
            return Err(MoveError::UnknownPlayer(player));
        }
        if player != self.state.current_player() {
            return Err(MoveError::NotCurrentPlayer(player));
        }
        Ok(())
    }

    /// World point of `square` for `player`'s piece. Off the board is the
    /// piece's home point.
    fn target_point(&self, player: PlayerId, square: u32) -> Result<Point3, MoveError> {
        if square == OFF_BOARD {
            return Ok(self.home_points[player]);
        }
        self.board
            .position_of(square)
            .ok_or(MoveError::InvalidTargetSquare {
                square,
                square_count: self.board.square_count(),
            })
    }
}

impl<D, B, R, P> TurnSequencer<D, B, R, P> {
    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Copy of the current state, e.g. for `GameState::to_bytes`.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    /// Committed square of `player`.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> u32 {
        self.state.position(player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// Current world point of `player`'s piece, mid-animation included.
    #[must_use]
    pub fn piece_point(&self, player: PlayerId) -> Point3 {
        self.piece_points[player]
    }

    #[must_use]
    pub fn home_point(&self, player: PlayerId) -> Point3 {
        self.home_points[player]
    }

    /// True while a piece is animating.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.active.is_some()
    }

    /// The move being animated, if any.
    #[must_use]
    pub fn active_move(&self) -> Option<&MoveCommand> {
        self.active.as_ref().map(|active| &active.command)
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Mutable dice access, so the host can throw it.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut P {
        &mut self.sink
    }
}

impl<D, B, R, P> std::fmt::Debug for TurnSequencer<D, B, R, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnSequencer")
            .field("phase", &self.state.phase())
            .field("current_player", &self.state.current_player())
            .field("positions", &self.state.positions())
            .field("active", &self.active.as_ref().map(|a| a.command))
            .finish_non_exhaustive()
    }
}
