//! Sink that writes submissions to the log

use super::traits::{SinkError, SubmitSink};
use crate::state::Submission;
use async_trait::async_trait;

/// Emits each submission as a `tracing` event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    /// JSON line logged for a submission
    fn render(submission: &Submission) -> Result<String, SinkError> {
        Ok(serde_json::to_string(submission)?)
    }
}

#[async_trait]
impl SubmitSink for LogSink {
    async fn submit(&self, submission: &Submission) -> Result<(), SinkError> {
        let values = Self::render(submission)?;
        tracing::info!(target: "people_form::submit", %values, "form submitted");
        Ok(())
    }

    fn describe(&self) -> String {
        "log".to_string()
    }
}
