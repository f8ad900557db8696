//! TUI runner — terminal lifecycle and the main loop.
//!
//! Creates the terminal, owns the tick/render intervals, runs the TEA
//! loop. The intervals live in this scope only: created on entry,
//! dropped on exit, so repeated runs never stack timers.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::time::interval;

use crate::board::Board;
use crate::clock::SystemClock;
use crate::config::BoardConfig;

use super::app::TuiApp;
use super::event::TuiMessage;
use super::layout;

/// Run the TUI main loop. Blocks until quit.
pub async fn run_tui(config: &BoardConfig) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let board = Board::new(Box::new(SystemClock), config);
    let mut app = TuiApp::new(board);

    let mut tick_interval = interval(Duration::from_millis(1000)); // 1Hz clock refresh
    let mut render_interval = interval(Duration::from_millis(33)); // ~30fps

    loop {
        tokio::select! {
            _ = tick_interval.tick() => {
                app.update(TuiMessage::Tick);
            }
            _ = render_interval.tick() => {
                terminal.draw(|f| layout::draw(f, &app))?;
            }
            // Poll crossterm events (non-blocking via tokio::task::spawn_blocking)
            result = tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            }) => {
                if let Ok(Some(Event::Key(key))) = result {
                    app.update(TuiMessage::Input(key));
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
