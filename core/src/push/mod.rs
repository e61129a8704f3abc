//! Options for `git push`.

mod push_gen;

pub use push_gen::*;

use crate::{Cmd, CmdOption};

/// Appends the destination remote (name or URL).
pub fn remote(name: impl Into<String>) -> CmdOption {
    let name = name.into();
    Box::new(move |cmd: &mut Cmd| cmd.add_option(name))
}

/// Appends a refspec (`<src>:<dst>`).
pub fn ref_spec(spec: impl Into<String>) -> CmdOption {
    let spec = spec.into();
    Box::new(move |cmd: &mut Cmd| cmd.add_option(spec))
}
