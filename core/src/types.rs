//! Command-options accumulator.

use tracing::info;

use crate::error::Result;
use crate::exec::ProcessExecutor;

/// A deferred modification of a [`Cmd`], usually appending option tokens.
pub type CmdOption = Box<dyn FnOnce(&mut Cmd) + Send>;

/// Runs a program with an argument list and returns its output.
pub trait Executor: Send + Sync {
    fn execute(&self, program: &str, args: &[String]) -> Result<String>;
}

/// A command line under construction.
///
/// `options` holds every argument after the program, in the order the
/// options were applied (the subcommand name comes first).
pub struct Cmd {
    /// Program to run.
    pub base: String,
    /// Log the command line before running it.
    pub debug: bool,
    pub options: Vec<String>,
    executor: Box<dyn Executor>,
}

impl Cmd {
    /// Creates an empty command for `base` using a [`ProcessExecutor`].
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            debug: false,
            options: Vec::new(),
            executor: Box::new(ProcessExecutor::default()),
        }
    }

    /// Appends one option token.
    pub fn add_option(&mut self, option: impl Into<String>) {
        self.options.push(option.into());
    }

    /// Appends a flag followed by its value as two separate tokens.
    pub fn add_option_pair(&mut self, flag: impl Into<String>, value: impl Into<String>) {
        self.options.push(flag.into());
        self.options.push(value.into());
    }

    /// Appends several option tokens.
    pub fn add_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extend(options.into_iter().map(Into::into));
    }

    /// Applies options in order.
    pub fn apply_options(&mut self, options: impl IntoIterator<Item = CmdOption>) {
        for option in options {
            option(self);
        }
    }

    /// Replaces the executor used by [`exec`](Self::exec).
    pub fn set_executor(&mut self, executor: impl Executor + 'static) {
        self.executor = Box::new(executor);
    }

    /// Returns the command line as a single space-separated string.
    pub fn command_line(&self) -> String {
        std::iter::once(self.base.as_str())
            .chain(self.options.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the command through its executor.
    pub fn exec(&self) -> Result<String> {
        if self.debug {
            info!(command = %self.command_line(), "Executing");
        }
        self.executor.execute(&self.base, &self.options)
    }
}

impl std::fmt::Debug for Cmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cmd")
            .field("base", &self.base)
            .field("debug", &self.debug)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
