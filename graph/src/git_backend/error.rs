use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised while querying commit history
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git command failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("`{command}` produced output that is not valid UTF-8")]
    InvalidUtf8 {
        command: String,
        #[source]
        source: FromUtf8Error,
    },
}

impl HistoryError {
    /// The command line that failed, for diagnostics
    pub fn command(&self) -> &str {
        match self {
            HistoryError::Spawn { command, .. }
            | HistoryError::CommandFailed { command, .. }
            | HistoryError::InvalidUtf8 { command, .. } => command,
        }
    }
}
