//! Configuration handling for the form

use crate::sink::{FileSink, LogSink, SubmitSink};
use crate::state::Person;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Template for new entries
    pub default_person: Option<Person>,
    /// People the form opens with
    pub starting_people: Option<Vec<Person>>,
    /// Append submissions to this JSON-lines file instead of the log
    pub submit_log: Option<PathBuf>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "people-form", "people-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: FormConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Template for new entries
    pub fn template(&self) -> Person {
        self.default_person.clone().unwrap_or_default()
    }

    /// People the form opens with (empty means one copy of the template)
    pub fn starting_people(&self) -> Vec<Person> {
        self.starting_people.clone().unwrap_or_default()
    }

    /// Build the configured submit sink
    pub fn sink(&self) -> Box<dyn SubmitSink> {
        match &self.submit_log {
            Some(path) => Box::new(FileSink::new(path)),
            None => Box::new(LogSink),
        }
    }
}
