//! Game orchestration between the human seat and the automated opponent.

use crate::config::GameConfig;
use std::fmt;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};
use uttt_core::{
    ConstraintSelector, ControllerState, FirstLegalSelector, GameController, GameState, MetaBoard,
    Move, MoveSelector, Outcome, Player, Seat, StepOutcome,
};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The automated seat started its turn.
    AutomatedThinking(Player),
    /// Move was made.
    MoveMade {
        /// Who played.
        player: Player,
        /// The move.
        mov: Move,
    },
    /// Game ended.
    GameOver {
        /// Final result.
        outcome: Outcome,
    },
    /// A fresh game began.
    Restarted,
}

/// Drives a [`GameController`] from a polling UI loop.
///
/// The automated seat waits `ai_delay` after its turn starts before it
/// commits, so the human can follow the game.
#[derive(Debug)]
pub struct Orchestrator {
    controller: GameController,
    ai_delay: Duration,
    thinking_since: Option<Instant>,
    event_tx: mpsc::Sender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        controller: GameController,
        ai_delay: Duration,
        event_tx: mpsc::Sender<GameEvent>,
    ) -> Self {
        Self {
            controller,
            ai_delay,
            thinking_since: None,
            event_tx,
        }
    }

    /// Human against the constraint selector, seated as configured.
    #[instrument(skip_all, fields(automated = %config.automated_player()))]
    pub fn from_config(config: &GameConfig, event_tx: mpsc::Sender<GameEvent>) -> Self {
        info!("Starting human vs automated game");
        let controller = GameController::human_vs_automated(*config.automated_player());
        Self::new(controller, config.ai_delay(), event_tx)
    }

    /// Returns the controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        self.controller.state()
    }

    /// Offers a move from the human.
    ///
    /// Returns true if it was applied; illegal moves are dropped.
    pub fn submit_human(&mut self, mov: Move) -> bool {
        let outcome = self.controller.submit(mov);
        self.report(outcome)
    }

    /// Advances the automated seat. Call on every frame.
    ///
    /// Returns true if the automated seat moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(player) = self
            .controller
            .awaiting()
            .filter(|_| self.controller.is_automated_turn())
        else {
            self.thinking_since = None;
            return false;
        };

        let since = match self.thinking_since {
            Some(since) => since,
            None => {
                self.thinking_since = Some(now);
                self.emit(GameEvent::AutomatedThinking(player));
                now
            }
        };
        if now.saturating_duration_since(since) < self.ai_delay {
            return false;
        }

        self.thinking_since = None;
        let outcome = self.controller.step_automated();
        self.report(outcome)
    }

    /// Restarts the game with the same seats.
    pub fn restart(&mut self) {
        self.controller.restart();
        self.thinking_since = None;
        self.emit(GameEvent::Restarted);
    }

    fn report(&self, outcome: StepOutcome) -> bool {
        match outcome {
            StepOutcome::Applied { mov, player } => {
                self.emit(GameEvent::MoveMade { player, mov });
                if let ControllerState::Terminal(outcome) = self.controller.phase() {
                    self.emit(GameEvent::GameOver { outcome });
                }
                true
            }
            StepOutcome::Exhausted => {
                self.emit(GameEvent::GameOver {
                    outcome: Outcome::Draw,
                });
                false
            }
            StepOutcome::Ignored => false,
        }
    }

    fn emit(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("UI receiver dropped");
        }
    }
}

/// Strategy seated against the constraint selector in headless play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Opponent {
    /// Another constraint selector.
    #[default]
    Constraint,
    /// Always plays the first legal move.
    FirstLegal,
}

impl Opponent {
    /// Builds the selector for this opponent.
    pub fn selector(self) -> Box<dyn MoveSelector> {
        match self {
            Opponent::Constraint => Box::new(ConstraintSelector::new()),
            Opponent::FirstLegal => Box::new(FirstLegalSelector),
        }
    }
}

/// Result of one headless game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessGame {
    /// Final result.
    pub outcome: Outcome,
    /// Number of moves played.
    pub moves: usize,
    /// Final board.
    pub board: MetaBoard,
}

/// Tally of headless results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Summary {
    /// Counts one result.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total games counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.total(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays one game with `opponent` as X against the constraint selector as O.
#[instrument]
pub fn run_headless(opponent: Opponent) -> HeadlessGame {
    let mut controller = GameController::new(Seat::Automated(opponent.selector()), Seat::constraint());
    let mut moves = 0;

    let outcome = loop {
        match controller.phase() {
            ControllerState::Terminal(outcome) => break outcome,
            ControllerState::AwaitingMove(_) => {
                if let StepOutcome::Applied { .. } = controller.step_automated() {
                    moves += 1;
                }
            }
        }
    };

    info!(%outcome, moves, "Headless game finished");
    HeadlessGame {
        outcome,
        moves,
        board: controller.state().board().clone(),
    }
}

/// Plays `games` headless games and tallies the results.
#[instrument]
pub fn run_series(opponent: Opponent, games: u32) -> (Vec<HeadlessGame>, Summary) {
    let mut summary = Summary::default();
    let results: Vec<_> = (0..games)
        .map(|_| {
            let game = run_headless(opponent);
            summary.record(game.outcome);
            game
        })
        .collect();
    (results, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uttt_core::Position;

    fn setup(delay_ms: u64) -> (Orchestrator, mpsc::Receiver<GameEvent>) {
        let (tx, rx) = mpsc::channel();
        let config = GameConfig::default().with_ai_delay_ms(delay_ms);
        (Orchestrator::from_config(&config, tx), rx)
    }

    #[test]
    fn test_automated_waits_for_delay() {
        let (mut orch, rx) = setup(500);
        let start = Instant::now();
        assert!(orch.submit_human(Move::new(Position::Center, Position::Center)));

        assert!(!orch.tick(start));
        assert!(!orch.tick(start + Duration::from_millis(499)));
        assert!(orch.tick(start + Duration::from_millis(500)));

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], GameEvent::AutomatedThinking(Player::O));
        assert!(matches!(
            events[2],
            GameEvent::MoveMade {
                player: Player::O,
                ..
            }
        ));
    }

    #[test]
    fn test_tick_idle_on_human_turn() {
        let (mut orch, rx) = setup(0);
        assert!(!orch.tick(Instant::now()));
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_illegal_human_move_emits_nothing() {
        let (mut orch, rx) = setup(0);
        let opening = Move::new(Position::Center, Position::TopLeft);
        orch.submit_human(opening);
        assert!(orch.tick(Instant::now()));
        rx.try_iter().for_each(drop);

        assert!(!orch.submit_human(opening));
        assert_eq!(rx.try_iter().count(), 0);
        assert_eq!(orch.state().to_move(), Player::X);
    }

    #[derive(Debug)]
    struct Stuck;

    impl MoveSelector for Stuck {
        fn select(&self, _: &MetaBoard, _: &[Move], _: Player) -> Option<Move> {
            None
        }

        fn name(&self) -> &str {
            "stuck"
        }
    }

    #[test]
    fn test_selector_without_move_reports_draw() {
        let (tx, rx) = mpsc::channel();
        let controller = GameController::new(Seat::Automated(Box::new(Stuck)), Seat::Human);
        let mut orch = Orchestrator::new(controller, Duration::ZERO, tx);

        assert!(!orch.tick(Instant::now()));
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                GameEvent::AutomatedThinking(Player::X),
                GameEvent::GameOver {
                    outcome: Outcome::Draw
                },
            ]
        );
        assert_eq!(orch.controller().status(), uttt_core::GameStatus::Draw);

        assert!(!orch.tick(Instant::now()));
        assert!(!orch.submit_human(Move::new(Position::Center, Position::Center)));
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = Summary::default();
        summary.record(Outcome::Winner(Player::O));
        summary.record(Outcome::Draw);
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.to_string(), "2 games: X won 0, O won 1, 1 drawn");
    }
}
