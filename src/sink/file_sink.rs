//! Sink that appends submissions to a JSON-lines file

use super::traits::{SinkError, SubmitSink};
use crate::state::Submission;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// One line of the submission log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub submitted_at: DateTime<Utc>,
    pub values: Submission,
}

/// Appends one JSON line per submission
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SubmitSink for FileSink {
    async fn submit(&self, submission: &Submission) -> Result<(), SinkError> {
        let record = SubmissionRecord {
            submitted_at: Utc::now(),
            values: submission.clone(),
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(path = %self.path.display(), "appended submission");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
