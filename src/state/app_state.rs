//! Application state definitions

use super::forms::{PeopleForm, Person};
use std::collections::VecDeque;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The people form being edited
    pub form: PeopleForm,
    /// Errors waiting to be shown, oldest first
    pub errors: VecDeque<String>,
    /// Last status message for the status bar
    pub status_message: Option<String>,
    /// Number of submissions handed to the sink
    pub submit_count: usize,
}

impl AppState {
    pub fn new(template: Person, starting: Vec<Person>) -> Self {
        Self {
            form: PeopleForm::new(template, starting),
            errors: VecDeque::new(),
            status_message: None,
            submit_count: 0,
        }
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "form error");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Person::default(), Vec::new())
    }
}
