//! Error types for running git commands.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while executing a command.
#[derive(Debug, Error)]
pub enum CmdError {
    /// The program could not be started.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on or reading from the child process failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The process did not finish within the configured timeout.
    #[error("'{command}' timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    /// The process exited unsuccessfully.
    #[error("'{command}' failed ({}): {output}", exit_label(.status))]
    Failed {
        command: String,
        /// Exit code, `None` when terminated by a signal.
        status: Option<i32>,
        /// Combined stdout and stderr.
        output: String,
    },
}

fn exit_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Convenience alias for results with [`CmdError`].
pub type Result<T> = std::result::Result<T, CmdError>;
