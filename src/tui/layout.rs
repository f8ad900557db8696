//! Board layout — watch list, add picker, converter, status bar.
//!
//! ```text
//! ┌─[ World Clock ]─────────────────────────────────┐
//! │ Iran (Tehran)      Asia/Tehran      4:12:09 PM  │
//! │ ...                                             │
//! ├─[ Add ]─────────────────────────────────────────┤
//! │ ◂ Japan (Tokyo)  Asia/Tokyo ▸          Enter    │
//! ├─[ Converter ]───────────────────────────────────┤
//! │ From / Time / To / Converted                    │
//! ├─────────────────────────────────────────────────┤
//! │ Tab focus  j/k move  d remove  q quit           │
//! └─────────────────────────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::board::{registry, Conversion};

use super::app::{Focus, TuiApp};

/// Draw the full TUI layout.
pub fn draw(f: &mut Frame, app: &TuiApp) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(6),    // watch list
            Constraint::Length(3), // add picker
            Constraint::Length(7), // converter
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    draw_title(f, outer[0]);
    draw_zones(f, app, outer[1]);
    draw_picker(f, app, outer[2]);
    draw_converter(f, app, outer[3]);
    draw_status(f, app, outer[4]);
}

/// Bordered pane with a focus-dependent border color.
fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border)
}

fn draw_title(f: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        " timeboard — world clock & converter",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(line), area);
}

fn draw_zones(f: &mut Frame, app: &TuiApp, area: Rect) {
    let focused = app.focus == Focus::Zones;
    let items: Vec<ListItem> = app
        .zone_rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let marker = if focused && i == app.selected_zone {
                "▸ "
            } else {
                "  "
            };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("{:<30}", row.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<34}", row.id), Style::default().fg(Color::DarkGray)),
                Span::styled(row.time.clone(), Style::default().fg(Color::Green)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(pane_block("World Clock", focused));
    f.render_widget(list, area);
}

fn draw_picker(f: &mut Frame, app: &TuiApp, area: Rect) {
    let focused = app.focus == Focus::Picker;
    let entry = &registry::entries()[app.picker_index];
    let line = Line::from(vec![
        Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
        Span::styled(entry.label, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", entry.id), Style::default().fg(Color::DarkGray)),
        Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
        Span::styled("    Enter: add", Style::default().fg(Color::DarkGray)),
    ]);
    let para = Paragraph::new(line).block(pane_block("Add Timezone", focused));
    f.render_widget(para, area);
}

fn draw_converter(f: &mut Frame, app: &TuiApp, area: Rect) {
    let focused = app.focus == Focus::Converter;
    let board = &app.board;

    let (result_text, result_style) = match board.conversion() {
        Conversion::Empty => (
            "Select a time to convert".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Conversion::Time(s) => (
            s.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Conversion::Invalid(msg) => (msg.clone(), Style::default().fg(Color::Red)),
    };

    let time_display = if focused {
        format!("{}_", board.time_input())
    } else {
        board.time_input().to_string()
    };

    let label = |s: &'static str| Span::styled(s, Style::default().fg(Color::DarkGray));
    let lines = vec![
        Line::from(vec![
            label("From:      "),
            Span::raw(registry::lookup_label(board.source()).to_string()),
            Span::styled(format!("  ({})", board.source()), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            label("Time (24h): "),
            Span::styled(time_display, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            label("To:        "),
            Span::raw(registry::lookup_label(board.target()).to_string()),
            Span::styled(format!("  ({})", board.target()), Style::default().fg(Color::DarkGray)),
        ]),
        Line::default(),
        Line::from(vec![label("Converted: "), Span::styled(result_text, result_style)]),
    ];

    let para = Paragraph::new(lines).block(pane_block("Converter", focused));
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, app: &TuiApp, area: Rect) {
    let hints = match app.focus {
        Focus::Zones => " Tab: focus   j/k: move   d: remove   q: quit",
        Focus::Picker => " Tab: focus   j/k: pick   Enter: add   q: quit",
        Focus::Converter => " Tab: focus   type HH:MM   {/}: source   [/]: target   Esc: quit",
    };
    let para = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(para, area);
}
