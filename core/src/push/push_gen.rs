// CODE GENERATED AUTOMATICALLY
// THIS FILE MUST NOT BE EDITED BY HAND

#![allow(rustdoc::broken_intra_doc_links, rustdoc::invalid_html_tags)]

use crate::{Cmd, CmdOption};

/// `all` Push all branches (i.e. refs under refs/heads/); cannot be used with other <refspec>.
/// --all
pub fn all() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--all");
    })
}

/// `atomic` Use an atomic transaction on the remote side if available.
/// Either all refs are updated, or on error, no refs are updated.
/// --[no-]atomic
pub fn atomic() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--atomic");
    })
}

/// `delete` All listed refs are deleted from the remote repository.
/// -d, --delete
pub fn delete() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--delete");
    })
}

/// `dry_run` Do everything except actually send the updates.
/// -n, --dry-run
pub fn dry_run() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--dry-run");
    })
}

/// `follow_tags` Push all the refs that would be pushed without this option, and also push annotated tags in refs/tags that are missing from the remote but are pointing at commit-ish that are reachable from the refs being pushed.
/// --follow-tags
pub fn follow_tags() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--follow-tags");
    })
}

/// `force` Usually, the command refuses to update a remote ref that is not an ancestor of the local ref used to overwrite it.
/// This flag disables these checks, and can cause the remote repository to lose commits; use it with care.
/// -f, --force
pub fn force() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--force");
    })
}

/// `force_with_lease` Usually, "git push" refuses to update a remote ref that is not an ancestor of the local ref used to overwrite it.
/// This option overrides this restriction if the current value of the remote ref is the expected value.
/// --[no-]force-with-lease, --force-with-lease=<refname>, --force-with-lease=<refname>:<expect>
pub fn force_with_lease(refname: impl Into<String>) -> CmdOption {
    let refname = refname.into();
    Box::new(move |cmd: &mut Cmd| {
        if refname.is_empty() {
            cmd.add_option("--force-with-lease");
        } else {
            cmd.add_option(format!("--force-with-lease={refname}"));
        }
    })
}

/// `ipv4` Use IPv4 addresses only, ignoring IPv6 addresses.
/// -4, --ipv4
pub fn ipv4() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--ipv4");
    })
}

/// `ipv6` Use IPv6 addresses only, ignoring IPv4 addresses.
/// -6, --ipv6
pub fn ipv6() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--ipv6");
    })
}

/// `mirror` Instead of naming each ref to push, specifies that all refs under refs/ be mirrored to the remote repository.
/// --mirror
pub fn mirror() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--mirror");
    })
}

/// `no_recurse_submodules` Do not push submodules.
/// --no-recurse-submodules
pub fn no_recurse_submodules() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--no-recurse-submodules");
    })
}

/// `no_thin` These options are passed to git send-pack.
/// --[no-]thin
pub fn no_thin() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--no-thin");
    })
}

/// `no_verify` Toggle the pre-push hook.
/// --[no-]verify
pub fn no_verify() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--no-verify");
    })
}

/// `porcelain` Produce machine-readable output.
/// --porcelain
pub fn porcelain() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--porcelain");
    })
}

/// `progress` Progress status is reported on the standard error stream by default when it is attached to a terminal, unless -q is specified.
/// --progress
pub fn progress() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--progress");
    })
}

/// `prune` Remove remote branches that don't have a local counterpart.
/// --prune
pub fn prune() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--prune");
    })
}

/// `push_option` Transmit the given string to the server, which passes them to the pre-receive as well as the post-receive hook.
/// -o <option>, --push-option=<option>
pub fn push_option(option: impl Into<String>) -> CmdOption {
    let option = option.into();
    Box::new(move |cmd: &mut Cmd| {
        cmd.add_option(format!("--push-option={option}"));
    })
}

/// `quiet` Suppress all output, including the listing of updated refs, unless an error occurs.
/// -q, --quiet
pub fn quiet() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--quiet");
    })
}

/// `receive_pack` Path to the git-receive-pack program on the remote end.
/// --receive-pack=<git-receive-pack>, --exec=<git-receive-pack>
pub fn receive_pack(git_receive_pack: impl Into<String>) -> CmdOption {
    let git_receive_pack = git_receive_pack.into();
    Box::new(move |cmd: &mut Cmd| {
        cmd.add_option(format!("--receive-pack={git_receive_pack}"));
    })
}

/// `repo` This option is equivalent to the <repository> argument.
/// --repo=<repository>
pub fn repo(repository: impl Into<String>) -> CmdOption {
    let repository = repository.into();
    Box::new(move |cmd: &mut Cmd| {
        cmd.add_option(format!("--repo={repository}"));
    })
}

/// `set_upstream` For every branch that is up to date or successfully pushed, add upstream (tracking) reference, used by argument-less git pull and other commands.
/// -u, --set-upstream
pub fn set_upstream() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--set-upstream");
    })
}

/// `signed` GPG-sign the push request to update refs on the receiving side, to allow it to be checked by the hooks and/or be logged.
/// --[no-]signed, --signed=(true|false|if-asked)
pub fn signed(value: impl Into<String>) -> CmdOption {
    let value = value.into();
    Box::new(move |cmd: &mut Cmd| {
        cmd.add_option(format!("--signed={value}"));
    })
}

/// `tags` All refs under refs/tags are pushed, in addition to refspecs explicitly listed on the command line.
/// --tags
pub fn tags() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--tags");
    })
}

/// `thin` These options are passed to git send-pack.
/// --[no-]thin
pub fn thin() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--thin");
    })
}

/// `verbose` Run verbosely.
/// -v, --verbose
pub fn verbose() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--verbose");
    })
}

/// `verify` Toggle the pre-push hook.
/// --[no-]verify
pub fn verify() -> CmdOption {
    Box::new(|cmd: &mut Cmd| {
        cmd.add_option("--verify");
    })
}
