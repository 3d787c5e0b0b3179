//! Terminal UI for ultimate tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// Frame interval of the UI loop.
const FRAME: Duration = Duration::from_millis(33);

/// Runs the TUI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let area: Rect = terminal.draw(|f| ui::draw(f, app))?.area;
        let board = ui::board_rect(area);

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, board),
                _ => {}
            }
        }
        if app.should_quit() {
            return Ok(());
        }
        app.tick(Instant::now());
    }
}
