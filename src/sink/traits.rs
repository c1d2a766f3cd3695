//! Trait abstraction for submit sinks to enable mocking in tests

use crate::state::Submission;
use async_trait::async_trait;

/// Errors raised while handing a submission off
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write submission: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize submission: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Receiver of submitted form values
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitSink: Send + Sync {
    /// Take the submitted values as they are
    async fn submit(&self, submission: &Submission) -> Result<(), SinkError>;

    /// Short human-readable description for the status bar
    fn describe(&self) -> String;
}
