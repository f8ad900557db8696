//! Timeboard — terminal world clock and timezone converter.
//!
//! A live, once-per-second view of a watch list of timezones, plus a
//! converter pane that re-renders an entered time of day in a target
//! zone. The core lives in `board`; `tui` is the ratatui view over it.

pub mod board;
pub mod clock;
pub mod config;
pub mod tui;
