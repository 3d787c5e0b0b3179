//! Turn orchestration between a human move source and automated selectors.

use crate::action::Move;
use crate::selector::{ConstraintSelector, MoveSelector};
use crate::state::{GameState, GameStatus, Outcome};
use crate::Player;
use tracing::{debug, info, instrument, warn};

/// Who supplies moves for one player.
#[derive(Debug)]
pub enum Seat {
    /// Moves arrive from outside through [`GameController::submit`].
    Human,
    /// Moves are chosen by a selector through [`GameController::step_automated`].
    Automated(Box<dyn MoveSelector>),
}

impl Seat {
    /// Seat played by the constraint-based opponent.
    pub fn constraint() -> Self {
        Seat::Automated(Box::new(ConstraintSelector::new()))
    }

    /// Returns true for automated seats.
    pub fn is_automated(&self) -> bool {
        matches!(self, Seat::Automated(_))
    }
}

/// Controller state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Waiting for the given player's move source.
    AwaitingMove(Player),
    /// The game is over; no more moves are accepted.
    Terminal(Outcome),
}

/// Result of one controller step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A move was applied.
    Applied {
        /// The move.
        mov: Move,
        /// Who played it.
        player: Player,
    },
    /// Nothing happened: wrong seat, illegal move, or the game is over.
    Ignored,
    /// The automated selector had no move; the game is now a draw.
    Exhausted,
}

/// Owns the game and alternates between the two seats.
#[derive(Debug)]
pub struct GameController {
    state: GameState,
    seat_x: Seat,
    seat_o: Seat,
    phase: ControllerState,
}

impl GameController {
    /// Creates a controller with the given seats and a fresh game.
    #[instrument(skip_all, fields(x_automated = seat_x.is_automated(), o_automated = seat_o.is_automated()))]
    pub fn new(seat_x: Seat, seat_o: Seat) -> Self {
        let state = GameState::new();
        let phase = ControllerState::AwaitingMove(state.to_move());
        info!("controller ready");
        Self {
            state,
            seat_x,
            seat_o,
            phase,
        }
    }

    /// Human against the constraint selector playing `automated`.
    pub fn human_vs_automated(automated: Player) -> Self {
        match automated {
            Player::X => Self::new(Seat::constraint(), Seat::Human),
            Player::O => Self::new(Seat::Human, Seat::constraint()),
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current controller state.
    pub fn phase(&self) -> ControllerState {
        self.phase
    }

    /// Returns true once the game is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, ControllerState::Terminal(_))
    }

    /// Status of the game as the controller sees it.
    ///
    /// Matches [`GameState::status`] except after a selector ran out of
    /// moves, which ends the game as a draw.
    pub fn status(&self) -> GameStatus {
        match self.phase {
            ControllerState::Terminal(outcome) => outcome.into(),
            ControllerState::AwaitingMove(_) => self.state.status(),
        }
    }

    /// Returns the seat for `player`.
    pub fn seat(&self, player: Player) -> &Seat {
        match player {
            Player::X => &self.seat_x,
            Player::O => &self.seat_o,
        }
    }

    /// The player whose move source is awaited, if the game is running.
    pub fn awaiting(&self) -> Option<Player> {
        match self.phase {
            ControllerState::AwaitingMove(player) => Some(player),
            ControllerState::Terminal(_) => None,
        }
    }

    /// Returns true if an automated seat is to move.
    pub fn is_automated_turn(&self) -> bool {
        self.awaiting()
            .is_some_and(|player| self.seat(player).is_automated())
    }

    /// Returns true if a human seat is to move.
    pub fn is_human_turn(&self) -> bool {
        self.awaiting()
            .is_some_and(|player| !self.seat(player).is_automated())
    }

    /// Offers a move from the human move source.
    ///
    /// Illegal moves, moves on an automated turn, and moves after the game
    /// ended are ignored; the source may simply try again.
    #[instrument(skip(self))]
    pub fn submit(&mut self, mov: Move) -> StepOutcome {
        if !self.is_human_turn() {
            debug!("not a human turn");
            return StepOutcome::Ignored;
        }
        self.play(mov)
    }

    /// Lets the automated seat to move pick and play its move.
    #[instrument(skip(self))]
    pub fn step_automated(&mut self) -> StepOutcome {
        let Some(player) = self.awaiting() else {
            return StepOutcome::Ignored;
        };
        let Seat::Automated(selector) = self.seat(player) else {
            debug!("not an automated turn");
            return StepOutcome::Ignored;
        };

        let candidates = self.state.legal_moves();
        match selector.select(self.state.board(), &candidates, player) {
            Some(mov) => {
                debug!(selector = selector.name(), %mov, "automated choice");
                let outcome = self.play(mov);
                if outcome == StepOutcome::Ignored {
                    warn!(%mov, "selector chose an illegal move");
                }
                outcome
            }
            None => {
                info!("automated seat has no move, declaring a draw");
                self.phase = ControllerState::Terminal(Outcome::Draw);
                StepOutcome::Exhausted
            }
        }
    }

    fn play(&mut self, mov: Move) -> StepOutcome {
        let player = self.state.to_move();
        match self.state.apply_move(mov, player) {
            Ok(()) => {
                self.refresh_phase();
                StepOutcome::Applied { mov, player }
            }
            Err(reason) => {
                debug!(%reason, "move ignored");
                StepOutcome::Ignored
            }
        }
    }

    fn refresh_phase(&mut self) {
        self.phase = match self.state.outcome() {
            Some(outcome) => {
                info!(%outcome, "game over");
                ControllerState::Terminal(outcome)
            }
            None => ControllerState::AwaitingMove(self.state.to_move()),
        };
    }

    /// Starts a fresh game with the same seats.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = GameState::new();
        self.refresh_phase();
    }
}
