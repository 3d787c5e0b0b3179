//! Application state and logic.

use crate::config::GameConfig;
use crate::orchestrator::{GameEvent, Orchestrator};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::mpsc;
use std::time::Instant;
use tracing::debug;
use uttt_core::{GameState, GameStatus, Move, Position};

use super::input;

/// Main application state.
#[derive(Debug)]
pub struct App {
    orchestrator: Orchestrator,
    event_rx: mpsc::Receiver<GameEvent>,
    cursor: Move,
    last_move: Option<Move>,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &GameConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self::with_orchestrator(Orchestrator::from_config(config, event_tx), event_rx)
    }

    /// Creates an application around an orchestrator and its event stream.
    pub fn with_orchestrator(
        orchestrator: Orchestrator,
        event_rx: mpsc::Receiver<GameEvent>,
    ) -> Self {
        Self {
            orchestrator,
            event_rx,
            cursor: Move::new(Position::Center, Position::Center),
            last_move: None,
            status_message: "Your move.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn state(&self) -> &GameState {
        self.orchestrator.state()
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.orchestrator.controller().is_terminal()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Move {
        self.cursor
    }

    /// Most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// One-line summary of whose turn it is or how the game ended.
    pub fn status_line(&self) -> String {
        match self.orchestrator.controller().status() {
            GameStatus::InProgress {
                to_move,
                active_target,
            } => {
                let target = active_target.map_or_else(|| "any".to_string(), |t| t.to_string());
                format!("Turn: {} | Next board: {}", to_move, target)
            }
            GameStatus::Won(player) => format!("Winner: {}!", player),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
    }

    /// Handles a mouse event; `board` is where the board was drawn.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, board: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (Some(dx), Some(dy)) = (
            mouse.column.checked_sub(board.x),
            mouse.row.checked_sub(board.y),
        ) else {
            return;
        };
        if let Some(mov) = input::cell_at(dx, dy) {
            self.cursor = mov;
            self.place(mov);
        }
    }

    /// Advances the automated seat and applies pending events.
    pub fn tick(&mut self, now: Instant) {
        self.orchestrator.tick(now);
        self.drain_events();
    }

    fn place(&mut self, mov: Move) {
        if !self.orchestrator.submit_human(mov) {
            debug!(%mov, "Move not accepted");
        }
        self.drain_events();
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::AutomatedThinking(player) => {
                self.status_message = format!("{} is thinking...", player);
            }
            GameEvent::MoveMade { player, mov } => {
                self.last_move = Some(mov);
                self.status_message = format!("{} played {}", player, mov);
                if let Some(target) = self.state().board().active_target() {
                    self.cursor = Move::new(target, self.cursor.cell);
                }
            }
            GameEvent::GameOver { outcome } => {
                self.status_message = format!("{}. Press 'r' to restart or 'q' to quit.", outcome);
            }
            GameEvent::Restarted => {
                self.last_move = None;
                self.status_message = "Game restarted.".to_string();
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.orchestrator.restart();
        self.drain_events();
    }
}
