//! Command-level classification.
//!
//! Turns one [`CommandDescription`] into the ordered list of flags the
//! renderer emits, plus the entries that had to be left out.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{CommandDescription, FlagDescription};
use crate::naming::{
    GENERIC_ARGUMENT, argument_name, function_ident, is_valid_ident, method_name, parameter_ident,
};
use crate::shape::{FlagShape, classify_flag};

/// A flag ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedFlag {
    pub shape: FlagShape,
    /// UpperCamelCase method name (`DryRun`).
    pub method: String,
    /// lowerCamelCase argument name; `None` for bare flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
    /// Literal switch to emit (`--dry-run`).
    pub token: String,
    /// Description split into lines.
    pub comments: Vec<String>,
    /// Argument label (`-n, --dry-run`).
    pub label: String,
}

impl ClassifiedFlag {
    /// Classifies one flag record. Returns `None` when the syntax matches no
    /// known shape.
    pub fn from_description(desc: &FlagDescription) -> Option<Self> {
        let parsed = classify_flag(&desc.argument)?;
        let method = method_name(&parsed.name, desc.method_override());
        let argument = match parsed.shape {
            FlagShape::Bare => None,
            FlagShape::OptionalUnnamed | FlagShape::RequiredUnnamed => {
                Some(GENERIC_ARGUMENT.to_string())
            }
            _ => Some(argument_name(&method, parsed.placeholder.as_deref())),
        };

        Some(Self {
            shape: parsed.shape,
            method,
            argument,
            token: parsed.token,
            comments: description_lines(&desc.description),
            label: desc.arguments.trim().to_string(),
        })
    }

    /// Returns `true` if the emitted function and parameter names are valid
    /// Rust identifiers.
    pub fn has_valid_idents(&self) -> bool {
        is_valid_ident(&function_ident(&self.method))
            && self
                .argument
                .as_deref()
                .is_none_or(|argument| is_valid_ident(&parameter_ident(argument)))
    }
}

/// Why a flag record was left out of a generated unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The syntax matches none of the six shapes.
    UnrecognizedSyntax,
    /// Another flag of the same command already emits this function name.
    DuplicateMethod,
    /// The derived function or parameter name is not a Rust identifier.
    InvalidIdentifier,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedSyntax => write!(f, "unrecognized_syntax"),
            Self::DuplicateMethod => write!(f, "duplicate_method"),
            Self::InvalidIdentifier => write!(f, "invalid_identifier"),
        }
    }
}

/// A flag record left out of a generated unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFlag {
    pub argument: String,
    pub reason: SkipReason,
}

/// All flags of one subcommand, sorted by method name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCommand {
    pub name: String,
    pub flags: Vec<ClassifiedFlag>,
    pub skipped: Vec<SkippedFlag>,
}

/// Classifies every flag of `desc` and sorts the result by method name.
///
/// Unrecognized flags are logged and skipped; the remaining flags are still
/// returned.
pub fn classify_command(desc: &CommandDescription) -> ClassifiedCommand {
    let mut flags = Vec::with_capacity(desc.options.len());
    let mut skipped = Vec::new();

    for option in &desc.options {
        match ClassifiedFlag::from_description(option) {
            Some(flag) if flag.has_valid_idents() => flags.push(flag),
            Some(flag) => {
                warn!(command = %desc.command_name, argument = %option.argument, method = %flag.method, "Flag does not yield a Rust identifier, skipping");
                skipped.push(SkippedFlag {
                    argument: option.argument.clone(),
                    reason: SkipReason::InvalidIdentifier,
                });
            }
            None => {
                warn!(command = %desc.command_name, argument = %option.argument, "Unrecognized flag syntax, skipping");
                skipped.push(SkippedFlag {
                    argument: option.argument.clone(),
                    reason: SkipReason::UnrecognizedSyntax,
                });
            }
        }
    }

    flags.sort_by(|a, b| a.method.cmp(&b.method));

    let mut seen = HashSet::new();
    flags.retain(|flag| {
        if seen.insert(function_ident(&flag.method)) {
            return true;
        }
        warn!(command = %desc.command_name, method = %flag.method, token = %flag.token, "Duplicate method name, skipping");
        skipped.push(SkippedFlag {
            argument: flag.token.clone(),
            reason: SkipReason::DuplicateMethod,
        });
        false
    });

    ClassifiedCommand {
        name: desc.command_name.trim().to_string(),
        flags,
        skipped,
    }
}

/// Splits a description into trimmed lines without leading or trailing
/// blank lines.
fn description_lines(description: &str) -> Vec<String> {
    let lines: Vec<&str> = description.lines().map(str::trim).collect();
    let start = lines.iter().position(|line| !line.is_empty());
    let end = lines.iter().rposition(|line| !line.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end]
            .iter()
            .map(|line| (*line).to_string())
            .collect(),
        _ => Vec::new(),
    }
}
