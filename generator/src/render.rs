//! Rust source rendering for classified commands.
//!
//! Every flag becomes a `pub fn` returning a `CmdOption` closure; the body
//! depends only on the flag's [`FlagShape`]. Output is a pure function of the
//! input so regenerating an unchanged table yields an empty diff.

use std::fmt;

use crate::classify::{ClassifiedCommand, ClassifiedFlag};
use crate::naming::{CLOSURE_PARAM, function_ident, parameter_ident};
use crate::shape::FlagShape;

/// Marker lines opening every generated unit.
pub const GENERATED_HEADER: &str =
    "// CODE GENERATED AUTOMATICALLY\n// THIS FILE MUST NOT BE EDITED BY HAND\n";

/// Rendering settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Path of the module exporting `Cmd` and `CmdOption`.
    pub runtime_path: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            runtime_path: "crate".to_string(),
        }
    }
}

/// Renders the complete generated unit for one command.
pub fn render_unit(command: &ClassifiedCommand, options: &RenderOptions) -> String {
    UnitSource { command, options }.to_string()
}

/// Returns the Rust function name emitted for `flag`.
pub fn function_name(flag: &ClassifiedFlag) -> String {
    function_ident(&flag.method)
}

/// Returns the Rust parameter name emitted for `flag`, if it takes a value.
pub fn parameter_name(flag: &ClassifiedFlag) -> Option<String> {
    flag.argument.as_deref().map(parameter_ident)
}

struct UnitSource<'a> {
    command: &'a ClassifiedCommand,
    options: &'a RenderOptions,
}

impl fmt::Display for UnitSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(GENERATED_HEADER)?;
        f.write_str("\n#![allow(rustdoc::broken_intra_doc_links, rustdoc::invalid_html_tags)]\n")?;
        if !self.command.flags.is_empty() {
            writeln!(f, "\nuse {}::{{Cmd, CmdOption}};", self.options.runtime_path)?;
        }
        for flag in &self.command.flags {
            f.write_str("\n")?;
            write_flag(f, flag)?;
        }
        Ok(())
    }
}

fn write_flag(f: &mut fmt::Formatter<'_>, flag: &ClassifiedFlag) -> fmt::Result {
    let name = function_name(flag);
    write_doc(f, flag, &name)?;

    let token = &flag.token;
    let Some(param) = parameter_name(flag).filter(|_| flag.shape.takes_value()) else {
        writeln!(f, "pub fn {name}() -> CmdOption {{")?;
        writeln!(f, "    Box::new(|{CLOSURE_PARAM}: &mut Cmd| {{")?;
        writeln!(f, "        {CLOSURE_PARAM}.add_option(\"{token}\");")?;
        return f.write_str("    })\n}\n");
    };

    writeln!(f, "pub fn {name}({param}: impl Into<String>) -> CmdOption {{")?;
    writeln!(f, "    let {param} = {param}.into();")?;
    writeln!(f, "    Box::new(move |{CLOSURE_PARAM}: &mut Cmd| {{")?;
    match flag.shape {
        FlagShape::RequiredNamed | FlagShape::RequiredUnnamed => {
            writeln!(f, "        {CLOSURE_PARAM}.add_option({});", joined_value(token, &param))?;
        }
        FlagShape::OptionalNamed | FlagShape::OptionalUnnamed => {
            writeln!(f, "        if {param}.is_empty() {{")?;
            writeln!(f, "            {CLOSURE_PARAM}.add_option(\"{token}\");")?;
            f.write_str("        } else {\n")?;
            writeln!(f, "            {CLOSURE_PARAM}.add_option({});", joined_value(token, &param))?;
            f.write_str("        }\n")?;
        }
        FlagShape::Positional => {
            writeln!(f, "        {CLOSURE_PARAM}.add_option_pair(\"{token}\", {param});")?;
        }
        FlagShape::Bare => unreachable!("bare flags take no value"),
    }
    f.write_str("    })\n}\n")
}

/// `format!` call joining token and value with `=`. Raw identifiers cannot
/// be captured inline.
fn joined_value(token: &str, param: &str) -> String {
    if param.starts_with("r#") {
        format!("format!(\"{token}={{}}\", {param})")
    } else {
        format!("format!(\"{token}={{{param}}}\")")
    }
}

fn write_doc(f: &mut fmt::Formatter<'_>, flag: &ClassifiedFlag, name: &str) -> fmt::Result {
    match flag.comments.split_first() {
        Some((first, rest)) => {
            writeln!(f, "/// `{name}` {}", doc_text(first))?;
            for line in rest {
                if line.is_empty() {
                    f.write_str("///\n")?;
                } else {
                    writeln!(f, "/// {}", doc_text(line))?;
                }
            }
        }
        None => writeln!(f, "/// `{name}`")?,
    }
    if !flag.label.is_empty() {
        writeln!(f, "/// {}", doc_text(&flag.label))?;
    }
    Ok(())
}

/// Keeps description text from opening a doctest block.
fn doc_text(line: &str) -> String {
    match line.strip_prefix("```") {
        Some(rest) => format!("\\`\\`\\`{rest}"),
        None => line.to_string(),
    }
}
