//! Layout components (main area, status bar)

use crate::app::App;
use crate::platform::{ADD_SHORTCUT, REMOVE_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the main content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let hint = Style::default().fg(Color::Gray);

    let count = app.state.form.values().len();
    let mut spans = vec![
        Span::styled(format!(" {count} "), Style::default().fg(Color::Green)),
        Span::styled("Tab", key),
        Span::styled(":next ", hint),
        Span::styled(ADD_SHORTCUT, key),
        Span::styled(":add ", hint),
        Span::styled(REMOVE_SHORTCUT, key),
        Span::styled(":remove ", hint),
        Span::styled(SUBMIT_SHORTCUT, key),
        Span::styled(":submit ", hint),
        Span::styled("Esc", key),
        Span::styled(":quit", hint),
    ];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
