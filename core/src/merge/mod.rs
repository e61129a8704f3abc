//! Options for `git merge`.

mod merge_gen;

pub use merge_gen::*;

use crate::{Cmd, CmdOption};

/// Appends the commits to merge into the current branch.
pub fn commits<I, S>(refs: I) -> CmdOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let refs: Vec<String> = refs.into_iter().map(Into::into).collect();
    Box::new(move |cmd: &mut Cmd| cmd.add_options(refs))
}
