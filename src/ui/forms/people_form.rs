//! People form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldPath, Focus, PeopleForm, PersonEntry, PersonField};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Rows taken by one person block (borders + one row of inputs)
const PERSON_HEIGHT: u16 = BUTTON_HEIGHT + 2;

/// Label of the submit button
const SUBMIT_LABEL: &str = "Add People!";

/// Draw the people form: one block per person, then Add Person and Submit
pub fn draw_people_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let block = Block::default()
        .title(" People ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // People
            Constraint::Length(BUTTON_HEIGHT), // Add / Submit
        ])
        .split(inner);

    let entries = form.values().entries();
    let capacity = (chunks[0].height / PERSON_HEIGHT).max(1) as usize;
    let anchor = match form.focus() {
        Focus::AddPerson | Focus::Submit => entries.len().saturating_sub(1),
        _ => form.focused_index().unwrap_or(0),
    };
    let range = visible_range(entries.len(), anchor, capacity);

    if form.values().is_empty() {
        let empty = Paragraph::new("No people. Add one below.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, chunks[0]);
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                range
                    .clone()
                    .map(|_| Constraint::Length(PERSON_HEIGHT))
                    .chain(std::iter::once(Constraint::Min(0))),
            )
            .split(chunks[0]);
        for (row, index) in range.enumerate() {
            draw_person(frame, rows[row], form, index, &entries[index]);
        }
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Min(0),
        ])
        .split(chunks[1]);
    render_action_button(
        frame,
        buttons[0],
        "Add Person",
        form.focus() == Focus::AddPerson,
        Color::Blue,
    );
    render_action_button(
        frame,
        buttons[1],
        SUBMIT_LABEL,
        form.focus() == Focus::Submit,
        Color::Green,
    );
}

/// Draw one person block titled with its 1-based ordinal
fn draw_person(frame: &mut Frame, area: Rect, form: &PeopleForm, index: usize, entry: &PersonEntry) {
    let focus = form.focus();
    let owns_focus = focus.person() == Some(entry.id);
    let block = Block::default()
        .title(format!(" Person #{} ", index + 1))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if owns_focus {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(12),    // First Name
            Constraint::Min(12),    // Last Name
            Constraint::Length(10), // Age
            Constraint::Length(10), // Remove
        ])
        .split(inner);

    for (cell, field) in cells.iter().zip(PersonField::ALL) {
        let Ok(value) = form.display_text(FieldPath::new(index, field)) else {
            continue;
        };
        draw_field(
            frame,
            *cell,
            field.label(),
            &value,
            focus == Focus::Field(entry.id, field),
        );
    }
    render_action_button(
        frame,
        cells[3],
        "Remove",
        focus == Focus::Remove(entry.id),
        Color::Red,
    );
}

/// Window of at most `capacity` entries that contains `anchor`
fn visible_range(len: usize, anchor: usize, capacity: usize) -> Range<usize> {
    if len <= capacity {
        return 0..len;
    }
    let anchor = anchor.min(len - 1);
    let start = (anchor + 1).saturating_sub(capacity);
    start..start + capacity
}
