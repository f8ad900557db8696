//! Ratatui presentation layer for the board.
//!
//! ## Architecture (TEA)
//!
//! Model (`TuiApp`) + Update (message handler) + View (render).
//! Immediate mode, no retained widget state. The app holds the board
//! and lightweight display rows refreshed on each tick; the view reads
//! state only and never computes times itself.

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod runner;
