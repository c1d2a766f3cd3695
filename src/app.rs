//! Application state and core logic

use crate::config::FormConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::sink::SubmitSink;
use crate::state::{AppState, Focus, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where submissions go
    sink: Box<dyn SubmitSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from the user configuration
    pub fn new(config: &FormConfig) -> Self {
        let state = AppState::new(config.template(), config.starting_people());
        Self::with_sink(state, config.sink())
    }

    pub fn with_sink(state: AppState, sink: Box<dyn SubmitSink>) -> Self {
        Self {
            state,
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Description of the submit sink for the status bar
    pub fn sink_description(&self) -> String {
        self.sink.describe()
    }

    fn is_shortcut(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(SHORTCUT_MODIFIER)
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Char('s') if Self::is_shortcut(&key) => self.submit().await,
            KeyCode::Char('n') if Self::is_shortcut(&key) => self.add_person(),
            KeyCode::Char('d') if Self::is_shortcut(&key) => self.remove_focused(),
            KeyCode::Enter => match self.state.form.focus() {
                Focus::Field(..) => self.state.form.next_field(),
                Focus::Remove(id) => {
                    if let Err(err) = self.state.form.remove_by_id(id) {
                        self.state.push_error(err.to_string());
                    }
                }
                Focus::AddPerson => self.add_person(),
                Focus::Submit => self.submit().await,
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_char(c)
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    fn add_person(&mut self) {
        self.state.form.add_person();
        self.state.status_message = Some(format!(
            "Person #{} added",
            self.state.form.values().len()
        ));
    }

    fn remove_focused(&mut self) {
        match self.state.form.remove_focused() {
            Some(Ok(_)) => self.state.status_message = Some("Person removed".to_string()),
            Some(Err(err)) => self.state.push_error(err.to_string()),
            None => {}
        }
    }

    /// Hand the current values to the sink
    pub async fn submit(&mut self) {
        match self.state.form.submit(self.sink.as_ref()).await {
            Ok(submission) => {
                self.state.submit_count += 1;
                let count = submission.people.len();
                let noun = if count == 1 { "person" } else { "people" };
                self.state.status_message = Some(format!(
                    "Submitted {count} {noun} to {}",
                    self.sink.describe()
                ));
            }
            Err(err) => self.state.push_error(format!("Submit failed: {err}")),
        }
    }
}
