// CODE GENERATED AUTOMATICALLY
// THIS FILE MUST NOT BE EDITED BY HAND

#![allow(rustdoc::broken_intra_doc_links, rustdoc::invalid_html_tags)]

use crate::{Cmd, CmdOption};

/// `abort` Abort the current conflict resolution process, and try to reconstruct the pre-merge state.
/// --abort
pub fn abort() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--abort");
    })
}

/// `allow_unrelated_histories` By default, git merge command refuses to merge histories that do not share a common ancestor.
/// This option can be used to override this safety when merging histories of two projects that started their lives independently.
/// --allow-unrelated-histories
pub fn allow_unrelated_histories() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--allow-unrelated-histories");
    })
}

/// `cleanup` This option determines how the merge message will be cleaned up before committing.
/// --cleanup=<mode>
pub fn cleanup(mode: impl Into<String>) -> CmdOption {
    let mode = mode.into();
    Box::new(move |cmd: &mut Cmd| {
        cmd.add_option(format!("--cleanup={mode}"));
    })
}

/// `commit` Perform the merge and commit the result.
/// This option can be used to override --no-commit.
/// --commit
pub fn commit() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--commit");
    })
}

/// `r#continue` After a git merge stops due to conflicts you can conclude the merge by running git merge --continue.
/// --continue
pub fn r#continue() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--continue");
    })
}

/// `edit` Invoke an editor before committing successful mechanical merge to further edit the auto-generated merge message, so that the user can explain and justify the merge.
/// --edit, -e
pub fn edit() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--edit");
    })
}

/// `ff` When the merge resolves as a fast-forward, only update the branch pointer, without creating a merge commit.
/// This is the default behavior.
/// --ff
pub fn ff() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--ff");
    })
}

/// `ff_only` Refuse to merge and exit with a non-zero status unless the current HEAD is already up to date or the merge can be resolved as a fast-forward.
/// --ff-only
pub fn ff_only() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--ff-only");
    })
}

/// `gpg_sign` GPG-sign the resulting merge commit.
/// The keyid argument is optional and defaults to the committer identity.
/// -S[<keyid>], --gpg-sign[=<keyid>]
pub fn gpg_sign(keyid: impl Into<String>) -> CmdOption {
    let keyid = keyid.into();
    Box::new(move |cmd: &mut Cmd| {
        if keyid.is_empty() {
            cmd.add_option("--gpg-sign");
        } else {
            cmd.add_option(format!("--gpg-sign={keyid}"));
        }
    })
}

/// `log` In addition to branch names, populate the log message with one-line descriptions from at most <n> actual commits that are being merged.
/// --log[=<n>], --no-log
pub fn log(n: impl Into<String>) -> CmdOption {
    let n = n.into();
    Box::new(move |cmd: &mut Cmd| {
        if n.is_empty() {
            cmd.add_option("--log");
        } else {
            cmd.add_option(format!("--log={n}"));
        }
    })
}

/// `message` Set the commit message to be used for the merge commit (in case one is created).
/// -m <msg>
pub fn message(msg: impl Into<String>) -> CmdOption {
    let msg = msg.into();
    Box::new(move |cmd: &mut Cmd| {
        cmd.add_option_pair("-m", msg);
    })
}

/// `no_commit` Perform the merge and stop just before creating a merge commit, to give the user a chance to inspect and further tweak the merge result before committing.
/// --no-commit
pub fn no_commit() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--no-commit");
    })
}

/// `no_edit` Accept the auto-generated message without invoking an editor.
/// --no-edit
pub fn no_edit() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--no-edit");
    })
}

/// `no_ff` Create a merge commit even when the merge resolves as a fast-forward.
/// --no-ff
pub fn no_ff() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--no-ff");
    })
}

/// `no_log` Do not list one-line descriptions from the actual commits being merged.
/// --no-log
pub fn no_log() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--no-log");
    })
}

/// `quiet` Operate quietly.
/// Implies --no-progress.
/// -q, --quiet
pub fn quiet() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--quiet");
    })
}

/// `squash` Produce the working tree and index state as if a real merge happened, but do not actually make a commit, move the HEAD, or record $GIT_DIR/MERGE_HEAD.
/// --squash, --no-squash
pub fn squash() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--squash");
    })
}

/// `stat` Show a diffstat at the end of the merge.
/// --stat, -n, --no-stat
pub fn stat() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--stat");
    })
}

/// `strategy` Use the given merge strategy; can be supplied more than once to specify them in the order they should be tried.
/// -s <strategy>, --strategy=<strategy>
pub fn strategy(value: impl Into<String>) -> CmdOption {
    let value = value.into();
    Box::new(move |cmd: &mut Cmd| {
        cmd.add_option(format!("--strategy={value}"));
    })
}

/// `strategy_option` Pass merge strategy specific option through to the merge strategy.
/// -X <option>, --strategy-option=<option>
pub fn strategy_option(option: impl Into<String>) -> CmdOption {
    let option = option.into();
    Box::new(move |cmd: &mut Cmd| {
        cmd.add_option(format!("--strategy-option={option}"));
    })
}

/// `verbose` Be verbose.
/// -v, --verbose
pub fn verbose() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--verbose");
    })
}

/// `verify_signatures` Verify that the tip commit of the side branch being merged is signed with a valid key.
/// --verify-signatures, --no-verify-signatures
pub fn verify_signatures() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--verify-signatures");
    })
}
