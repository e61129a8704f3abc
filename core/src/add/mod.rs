//! Options for `git add`.

mod add_gen;

pub use add_gen::*;

use crate::{Cmd, CmdOption};

/// Appends `--` followed by the pathspecs to add.
pub fn path_spec<I, S>(paths: I) -> CmdOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let paths: Vec<String> = paths.into_iter().map(Into::into).collect();
    Box::new(move |cmd: &mut Cmd| {
        cmd.add_option("--");
        cmd.add_options(paths);
    })
}
