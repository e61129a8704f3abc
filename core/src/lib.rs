//! Fluent option builders for the `git` command line.
//!
//! Each git subcommand has a module of option functions (generated from a
//! flag description table by `gitopts-generator`) that return [`CmdOption`]
//! closures. The [`git`] entry points collect those options into a [`Cmd`]
//! and hand the argument list to an [`Executor`].
//!
//! # Example
//!
//! ```no_run
//! use gitopts_core::{add, git, merge};
//!
//! git::add([add::all(), add::path_spec(["src/"])])?;
//! git::merge([merge::no_ff(), merge::log(""), merge::commits(["feature"])])?;
//! # Ok::<(), gitopts_core::CmdError>(())
//! ```
//!
//! Options can also be applied to a [`Cmd`] directly to inspect the
//! resulting argument list:
//!
//! ```
//! use gitopts_core::{Cmd, merge};
//!
//! let mut cmd = Cmd::new("git");
//! cmd.add_option("merge");
//! cmd.apply_options([merge::strategy("ours"), merge::message("Merge feature")]);
//! assert_eq!(cmd.options, ["merge", "--strategy=ours", "-m", "Merge feature"]);
//! ```

mod error;
mod exec;
mod types;

pub mod add;
pub mod git;
pub mod merge;
pub mod push;

pub use error::{CmdError, Result};
pub use exec::ProcessExecutor;
pub use types::{Cmd, CmdOption, Executor};
