//! Generator configuration.
//!
//! Loaded from a YAML file (typically `gitopts-gen.yml` next to the
//! description table). Relative paths are resolved against the directory of
//! the configuration file.
//!
//! # Example YAML
//!
//! ```yaml
//! descriptions: descriptions.json
//! output_dir: ../core/src
//! runtime_path: crate
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};
use crate::render::RenderOptions;

/// Settings for one generation run.
///
/// # Examples
///
/// ```
/// use gitopts_generator::GeneratorConfig;
///
/// let config: GeneratorConfig = serde_yaml::from_str("output_dir: core/src").unwrap();
/// assert_eq!(config.output_dir.to_str(), Some("core/src"));
/// assert_eq!(config.runtime_path, "crate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Path of the JSON description table.
    pub descriptions: PathBuf,
    /// Directory under which `<module>/<module>_gen.rs` files are written.
    pub output_dir: PathBuf,
    /// Module path the generated code imports `Cmd` and `CmdOption` from.
    pub runtime_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            descriptions: PathBuf::from("descriptions.json"),
            output_dir: PathBuf::from("."),
            runtime_path: "crate".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Io`] if the file cannot be read, or
    /// [`GenerateError::Yaml`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|err| GenerateError::io(path, err))?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        match path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            Some(dir) => Ok(config.relative_to(dir)),
            None => Ok(config),
        }
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Io`] if the file cannot be written, or
    /// [`GenerateError::Yaml`] if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|err| GenerateError::io(path, err))?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Resolves relative paths against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.descriptions.is_relative() {
            self.descriptions = base.join(&self.descriptions);
        }
        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
        self
    }

    /// Returns the rendering settings for this configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            runtime_path: self.runtime_path.clone(),
        }
    }
}
