//! Submit sinks receiving the submitted people

mod file_sink;
mod log_sink;
mod traits;

pub use file_sink::FileSink;
pub use log_sink::LogSink;
pub use traits::{SinkError, SubmitSink};

#[cfg(test)]
pub use traits::MockSubmitSink;
