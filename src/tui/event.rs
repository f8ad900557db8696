//! TUI event loop messages.
//!
//! The runner multiplexes three sources into one update stream:
//! - crossterm keyboard events
//! - a 1 Hz tick (resample the clock, refresh board rows)
//! - a render interval (draw a frame)

use crossterm::event::KeyEvent;

/// Messages that drive the TUI update loop.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// Tick: resample the clock and refresh the zone rows.
    Tick,
    /// Render: draw a frame.
    Render,
    /// Quit the TUI.
    Quit,
}
