//! Description table model.
//!
//! The table is a JSON array with one record per git subcommand:
//!
//! ```json
//! [
//!   {
//!     "command_name": "add",
//!     "enabled": true,
//!     "options": [
//!       {
//!         "argument": "--dry-run",
//!         "arguments": "-n, --dry-run",
//!         "description": "Don't actually add the file(s)."
//!       }
//!     ]
//!   }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};

/// One subcommand record from the description table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescription {
    /// Subcommand name (e.g. `add`, `cherry-pick`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command_name: String,
    /// Disabled records produce no output.
    #[serde(default)]
    pub enabled: bool,
    /// Flag records in table order.
    #[serde(default)]
    pub options: Vec<FlagDescription>,
}

impl CommandDescription {
    /// Returns `true` when this record should produce a generated unit.
    pub fn is_generated(&self) -> bool {
        self.enabled && !self.command_name.trim().is_empty()
    }
}

/// One flag record of a subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagDescription {
    /// Explicit method name, overriding the one derived from the flag token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    /// Raw flag syntax, e.g. `--log[=<n>]`.
    pub argument: String,
    /// Free-text label, rendered as the last doc line (e.g. `-n, --dry-run`).
    #[serde(default)]
    pub arguments: String,
    /// Newline-delimited description, rendered as the leading doc lines.
    #[serde(default)]
    pub description: String,
}

impl FlagDescription {
    /// Creates a flag record with only the raw syntax set.
    pub fn new(argument: &str) -> Self {
        Self {
            argument: argument.to_string(),
            ..Self::default()
        }
    }

    /// Sets the method name override.
    pub fn with_method_name(mut self, name: &str) -> Self {
        self.method_name = Some(name.to_string());
        self
    }

    /// Sets the argument label.
    pub fn with_arguments(mut self, label: &str) -> Self {
        self.arguments = label.to_string();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Returns the non-empty method name override, if any.
    pub fn method_override(&self) -> Option<&str> {
        self.method_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Parses a description table from JSON text.
pub fn parse_descriptions(raw: &str) -> serde_json::Result<Vec<CommandDescription>> {
    serde_json::from_str(raw)
}

/// Reads and parses the description table at `path`.
///
/// # Errors
///
/// Returns [`GenerateError::Io`] if the file cannot be read and
/// [`GenerateError::Json`] if it is not a valid table.
pub fn load_descriptions(path: impl AsRef<Path>) -> Result<Vec<CommandDescription>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|err| GenerateError::io(path, err))?;
    parse_descriptions(&raw).map_err(|source| GenerateError::Json {
        path: path.to_path_buf(),
        source,
    })
}
