//! Entry points running `git` subcommands.
//!
//! Every function builds a [`Cmd`] for `git`, appends the subcommand name,
//! applies the options in order and executes the result.

use crate::error::Result;
use crate::types::{Cmd, CmdOption, Executor};

/// Program name used for every command.
pub const GIT: &str = "git";

/// Runs `git add`.
pub fn add(options: impl IntoIterator<Item = CmdOption>) -> Result<String> {
    raw("add", options)
}

/// Runs `git merge`.
pub fn merge(options: impl IntoIterator<Item = CmdOption>) -> Result<String> {
    raw("merge", options)
}

/// Runs `git push`.
pub fn push(options: impl IntoIterator<Item = CmdOption>) -> Result<String> {
    raw("push", options)
}

/// Runs an arbitrary git subcommand.
pub fn raw(subcommand: &str, options: impl IntoIterator<Item = CmdOption>) -> Result<String> {
    prepare(subcommand, options).exec()
}

/// Builds the [`Cmd`] for a subcommand without running it.
pub fn prepare(subcommand: &str, options: impl IntoIterator<Item = CmdOption>) -> Cmd {
    let mut cmd = Cmd::new(GIT);
    cmd.add_option(subcommand);
    cmd.apply_options(options);
    cmd
}

/// Logs the command line before it runs.
pub fn debug() -> CmdOption {
    Box::new(|cmd: &mut Cmd| cmd.debug = true)
}

/// Runs the command through `executor`.
pub fn with_executor(executor: impl Executor + 'static) -> CmdOption {
    Box::new(move |cmd: &mut Cmd| cmd.set_executor(executor))
}

/// Applies `options` only when `apply` is true.
pub fn cond(apply: bool, options: impl IntoIterator<Item = CmdOption>) -> CmdOption {
    let options: Vec<CmdOption> = options.into_iter().collect();
    Box::new(move |cmd: &mut Cmd| {
        if apply {
            cmd.apply_options(options);
        }
    })
}

/// An option that does nothing.
pub fn no_op() -> CmdOption {
    Box::new(|_: &mut Cmd| {})
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{add, merge, push};

    #[derive(Clone, Default)]
    struct RecordingExecutor {
        calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    }

    impl RecordingExecutor {
        fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Executor for RecordingExecutor {
        fn execute(&self, program: &str, args: &[String]) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec()));
            Ok("recorded".to_string())
        }
    }

    #[test]
    fn test_add_runs_with_options() {
        let recorder = RecordingExecutor::default();
        let output = add([
            with_executor(recorder.clone()),
            add::all(),
            add::dry_run(),
            add::path_spec(["README.md", "src/"]),
        ])
        .unwrap();

        assert_eq!(output, "recorded");
        let calls = recorder.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "git");
        assert_eq!(
            calls[0].1,
            ["add", "--all", "--dry-run", "--", "README.md", "src/"]
        );
    }

    #[test]
    fn test_merge_value_shapes() {
        let cmd = prepare(
            "merge",
            [
                merge::strategy("recursive"),
                merge::strategy_option("theirs"),
                merge::log(""),
                merge::gpg_sign("ABCD1234"),
                merge::message("Merge branch 'feature'"),
                merge::r#continue(),
                merge::commits(["feature"]),
            ],
        );
        assert_eq!(
            cmd.options,
            [
                "merge",
                "--strategy=recursive",
                "--strategy-option=theirs",
                "--log",
                "--gpg-sign=ABCD1234",
                "-m",
                "Merge branch 'feature'",
                "--continue",
                "feature",
            ]
        );
    }

    #[test]
    fn test_push_options() {
        let cmd = prepare(
            "push",
            [
                push::signed("if-asked"),
                push::force_with_lease(""),
                push::force_with_lease("main"),
                push::set_upstream(),
                push::remote("origin"),
                push::ref_spec("main:main"),
            ],
        );
        assert_eq!(
            cmd.options,
            [
                "push",
                "--signed=if-asked",
                "--force-with-lease",
                "--force-with-lease=main",
                "--set-upstream",
                "origin",
                "main:main",
            ]
        );
    }

    #[test]
    fn test_cond_and_no_op() {
        let cmd = prepare(
            "add",
            [
                cond(true, [add::force()]),
                cond(false, [add::verbose(), add::patch()]),
                no_op(),
            ],
        );
        assert_eq!(cmd.options, ["add", "--force"]);
    }

    #[test]
    fn test_debug_sets_flag() {
        let cmd = prepare("status", [debug()]);
        assert!(cmd.debug);
        assert_eq!(cmd.command_line(), "git status");
    }

    #[test]
    fn test_raw_subcommand() {
        let recorder = RecordingExecutor::default();
        let list: CmdOption = Box::new(|cmd: &mut Cmd| cmd.add_option("list"));
        raw("stash", [with_executor(recorder.clone()), list]).unwrap();
        assert_eq!(recorder.calls()[0].1, ["stash", "list"]);
    }
}
