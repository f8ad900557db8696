//! Key binding dispatch for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{Focus, TuiApp};

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    // Time entry wins over global character bindings while the
    // converter has focus.
    if app.focus == Focus::Converter {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == ':' => {
                app.push_time_char(c);
                return;
            }
            KeyCode::Backspace => {
                app.pop_time_char();
                return;
            }
            KeyCode::Char('[') => {
                app.cycle_target(-1);
                return;
            }
            KeyCode::Char(']') => {
                app.cycle_target(1);
                return;
            }
            KeyCode::Char('{') => {
                app.cycle_source(-1);
                return;
            }
            KeyCode::Char('}') => {
                app.cycle_source(1);
                return;
            }
            _ => {}
        }
    }

    // Global bindings
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        _ => {}
    }

    // Pane-specific bindings
    match app.focus {
        Focus::Zones => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.move_down(),
            KeyCode::Char('k') | KeyCode::Up => app.move_up(),
            KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
            _ => {}
        },
        Focus::Picker => match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Right => app.picker_next(),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::Left => app.picker_prev(),
            KeyCode::Enter => app.add_picked(),
            _ => {}
        },
        Focus::Converter => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::clock::FixedClock;
    use crate::config::BoardConfig;
    use chrono::{Local, TimeZone};

    fn test_app() -> TuiApp {
        let instant = Local.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        let board = Board::new(Box::new(FixedClock(instant)), &BoardConfig::default());
        TuiApp::new(board)
    }

    #[test]
    fn q_quits_from_any_focus() {
        let mut app = test_app();
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = test_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key(&mut app, key);
        assert!(app.should_quit);
    }

    #[test]
    fn digits_reach_the_time_input_in_converter_focus() {
        let mut app = test_app();
        app.focus = Focus::Converter;
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('9')));
        assert_eq!(app.board.time_input(), "9");
        // 'd' is not a time character and not a removal in this pane.
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('d')));
        assert_eq!(app.board.time_input(), "9");
        assert_eq!(app.zone_rows.len(), 8);
    }

    #[test]
    fn d_removes_in_zones_focus() {
        let mut app = test_app();
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('d')));
        assert_eq!(app.zone_rows.len(), 7);
        assert_eq!(app.zone_rows[0].id, "Africa/Johannesburg");
    }

    #[test]
    fn enter_in_picker_adds_the_picked_zone() {
        let mut app = test_app();
        app.focus = Focus::Picker;
        // Walk to Tokyo (entry 4) and confirm.
        for _ in 0..4 {
            handle_key(&mut app, KeyEvent::from(KeyCode::Down));
        }
        handle_key(&mut app, KeyEvent::from(KeyCode::Enter));
        assert!(app.board.watchlist().contains("Asia/Tokyo"));
    }
}
