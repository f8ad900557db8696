//! TuiApp — the TEA model.
//!
//! All state lives here. Update receives TuiMessages, mutates state.
//! View reads state to produce ratatui widgets. No side effects in
//! view. Zone rows are refreshed on tick, not per frame — the board is
//! only resampled once a second.

use crate::board::{registry, Board, ZoneRow};

use super::event::TuiMessage;
use super::input;

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The watch list (navigate, remove).
    Zones,
    /// The add picker (choose a curated zone, confirm).
    Picker,
    /// The converter (time input, source/target cycling).
    Converter,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Zones => Focus::Picker,
            Focus::Picker => Focus::Converter,
            Focus::Converter => Focus::Zones,
        }
    }
}

/// The main TUI application state (TEA model).
pub struct TuiApp {
    /// The board: watch list + converter state.
    pub board: Board,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Which pane has focus.
    pub focus: Focus,
    /// Selected row in the watch list.
    pub selected_zone: usize,
    /// Selected entry in the add picker (index into the curated table).
    pub picker_index: usize,
    /// Watch-list rows as of the last tick.
    pub zone_rows: Vec<ZoneRow>,
}

impl TuiApp {
    /// Wrap a board, with rows rendered for the first frame.
    pub fn new(board: Board) -> Self {
        let mut app = Self {
            board,
            should_quit: false,
            focus: Focus::Zones,
            selected_zone: 0,
            picker_index: 0,
            zone_rows: Vec::new(),
        };
        app.refresh();
        app
    }

    /// Handle one message (TEA update).
    pub fn update(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Input(key) => input::handle_key(self, key),
            TuiMessage::Tick => self.refresh(),
            TuiMessage::Render => {}
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Resample the clock and re-render the watch-list rows.
    pub fn refresh(&mut self) {
        self.zone_rows = self.board.zone_rows();
        // Keep the selection on a real row after removals.
        if self.selected_zone >= self.zone_rows.len() {
            self.selected_zone = self.zone_rows.len().saturating_sub(1);
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_zone + 1 < self.zone_rows.len() {
            self.selected_zone += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_zone = self.selected_zone.saturating_sub(1);
    }

    pub fn picker_next(&mut self) {
        self.picker_index = (self.picker_index + 1) % registry::entries().len();
    }

    pub fn picker_prev(&mut self) {
        let len = registry::entries().len();
        self.picker_index = (self.picker_index + len - 1) % len;
    }

    /// Add the picked curated zone to the watch list (duplicate: no-op).
    pub fn add_picked(&mut self) {
        let entry = &registry::entries()[self.picker_index];
        self.board.add_zone(entry.id);
        self.refresh();
    }

    /// Remove the selected watch-list row, if any.
    pub fn remove_selected(&mut self) {
        if let Some(row) = self.zone_rows.get(self.selected_zone) {
            let id = row.id.clone();
            self.board.remove_zone(&id);
            self.refresh();
        }
    }

    /// Step the converter source through the curated table.
    pub fn cycle_source(&mut self, step: isize) {
        let next = cycled(self.board.source(), step);
        self.board.set_source(next);
    }

    /// Step the converter target through the curated table.
    pub fn cycle_target(&mut self, step: isize) {
        let next = cycled(self.board.target(), step);
        self.board.set_target(next);
    }

    /// Append a character to the time input (eager recompute).
    pub fn push_time_char(&mut self, c: char) {
        let mut input = self.board.time_input().to_string();
        if input.len() >= 5 {
            return;
        }
        input.push(c);
        self.board.set_time_input(input);
    }

    /// Delete the last character of the time input (eager recompute).
    pub fn pop_time_char(&mut self) {
        let mut input = self.board.time_input().to_string();
        input.pop();
        self.board.set_time_input(input);
    }
}

/// Next curated id, `step` entries away from `current` (wrapping).
/// An id outside the table restarts from the top of the table.
fn cycled(current: &str, step: isize) -> String {
    let entries = registry::entries();
    let len = entries.len() as isize;
    let pos = entries
        .iter()
        .position(|e| e.id == current)
        .map(|p| p as isize)
        .unwrap_or(0);
    entries[(pos + step).rem_euclid(len) as usize].id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Conversion;
    use crate::clock::FixedClock;
    use crate::config::BoardConfig;
    use chrono::{Local, TimeZone};
    use crossterm::event::{KeyCode, KeyEvent};

    fn test_app() -> TuiApp {
        let instant = Local.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        let board = Board::new(Box::new(FixedClock(instant)), &BoardConfig::default());
        TuiApp::new(board)
    }

    #[test]
    fn quit_on_message() {
        let mut app = test_app();
        app.update(TuiMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = test_app();
        assert_eq!(app.focus, Focus::Zones);
        app.update(TuiMessage::Input(KeyEvent::from(KeyCode::Tab)));
        assert_eq!(app.focus, Focus::Picker);
        app.update(TuiMessage::Input(KeyEvent::from(KeyCode::Tab)));
        assert_eq!(app.focus, Focus::Converter);
        app.update(TuiMessage::Input(KeyEvent::from(KeyCode::Tab)));
        assert_eq!(app.focus, Focus::Zones);
    }

    #[test]
    fn tick_renders_one_row_per_zone() {
        let mut app = test_app();
        app.update(TuiMessage::Tick);
        assert_eq!(app.zone_rows.len(), 8);
        assert_eq!(app.zone_rows[0].label, "Iran (Tehran)");
    }

    #[test]
    fn add_picked_appends_and_is_idempotent() {
        let mut app = test_app();
        // Entry 4 is Tokyo, not in the seed.
        app.picker_index = 4;
        app.add_picked();
        assert_eq!(app.zone_rows.len(), 9);
        assert_eq!(app.zone_rows[8].id, "Asia/Tokyo");
        app.add_picked();
        assert_eq!(app.zone_rows.len(), 9);
    }

    #[test]
    fn remove_selected_drops_the_row_and_clamps() {
        let mut app = test_app();
        app.selected_zone = 7;
        app.remove_selected();
        assert_eq!(app.zone_rows.len(), 7);
        assert_eq!(app.selected_zone, 6);
        assert!(!app.board.watchlist().contains("America/New_York"));
    }

    #[test]
    fn picker_wraps_both_ways() {
        let mut app = test_app();
        app.picker_prev();
        assert_eq!(app.picker_index, registry::entries().len() - 1);
        app.picker_next();
        assert_eq!(app.picker_index, 0);
    }

    #[test]
    fn typing_a_time_drives_the_conversion() {
        let mut app = test_app();
        for c in "14:30".chars() {
            app.push_time_char(c);
        }
        assert_eq!(app.board.time_input(), "14:30");
        assert!(matches!(app.board.conversion(), Conversion::Time(_)));

        // "14:3" still parses; "14:" does not; empty input is Empty.
        app.pop_time_char();
        assert!(matches!(app.board.conversion(), Conversion::Time(_)));
        app.pop_time_char();
        assert!(matches!(app.board.conversion(), Conversion::Invalid(_)));
        for _ in 0..3 {
            app.pop_time_char();
        }
        assert_eq!(*app.board.conversion(), Conversion::Empty);
    }

    #[test]
    fn time_input_is_capped_at_five_chars() {
        let mut app = test_app();
        for c in "12:345678".chars() {
            app.push_time_char(c);
        }
        assert_eq!(app.board.time_input(), "12:34");
    }

    #[test]
    fn cycling_source_and_target_walks_the_table() {
        let mut app = test_app();
        assert_eq!(app.board.source(), "America/New_York");
        app.cycle_source(1);
        assert_eq!(app.board.source(), "America/Los_Angeles");
        app.cycle_source(-1);
        assert_eq!(app.board.source(), "America/New_York");
        app.cycle_source(-1);
        assert_eq!(app.board.source(), "Asia/Dubai");

        assert_eq!(app.board.target(), "Europe/London");
        app.cycle_target(1);
        assert_eq!(app.board.target(), "Europe/Berlin");
    }
}
