//! Process-backed executor.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;
use wait_timeout::ChildExt;

use crate::error::{CmdError, Result};
use crate::types::Executor;

/// Runs commands as child processes and captures their output.
///
/// Output is stdout followed by stderr. A non-zero exit status is reported
/// as [`CmdError::Failed`] carrying that output.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    timeout: Option<Duration>,
    current_dir: Option<PathBuf>,
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kills the child and fails with [`CmdError::Timeout`] after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Runs commands in `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl Executor for ProcessExecutor {
    fn execute(&self, program: &str, args: &[String]) -> Result<String> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|source| CmdError::Spawn {
            program: program.to_string(),
            source,
        })?;

        // Drain both pipes while waiting so a full pipe buffer cannot block
        // the child.
        let stdout_thread = child.stdout.take().map(drain);
        let stderr_thread = child.stderr.take().map(drain);

        let status = match self.timeout {
            Some(timeout) => match child.wait_timeout(timeout)? {
                Some(status) => status,
                None => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(CmdError::Timeout {
                        command: command_line(program, args),
                        timeout,
                    });
                }
            },
            None => child.wait()?,
        };

        let mut output = collect(stdout_thread);
        output.push_str(&collect(stderr_thread));
        debug!(program, code = ?status.code(), bytes = output.len(), "Command finished");

        if status.success() {
            Ok(output)
        } else {
            Err(CmdError::Failed {
                command: command_line(program, args),
                status: status.code(),
                output,
            })
        }
    }
}

fn drain(mut pipe: impl Read + Send + 'static) -> JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Err(err) = pipe.read_to_end(&mut buf) {
            debug!(error = %err, "Failed to read child output");
        }
        buf
    })
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    let buf = handle
        .and_then(|thread| thread.join().ok())
        .unwrap_or_default();
    String::from_utf8_lossy(&buf).into_owned()
}

fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
