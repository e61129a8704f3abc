//! Generation run over a whole description table.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::classify::{SkippedFlag, classify_command};
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::model::CommandDescription;
use crate::render::{RenderOptions, render_unit};
use crate::report::{CommandReport, GenerationReport};

/// Rust module name for a git subcommand (`cherry-pick` → `cherry_pick`).
pub fn module_name(command: &str) -> String {
    command.trim().replace('-', "_")
}

/// Output path of the generated unit for `command`.
///
/// ```
/// use std::path::Path;
/// use gitopts_generator::unit_path;
///
/// assert_eq!(
///     unit_path(Path::new("core/src"), "cherry-pick"),
///     Path::new("core/src/cherry_pick/cherry_pick_gen.rs"),
/// );
/// ```
pub fn unit_path(output_dir: &Path, command: &str) -> PathBuf {
    let module = module_name(command);
    output_dir.join(&module).join(format!("{module}_gen.rs"))
}

/// Rendered source for one subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub command: String,
    pub path: PathBuf,
    pub contents: String,
    /// Number of rendered option functions.
    pub flag_count: usize,
    pub skipped: Vec<SkippedFlag>,
}

/// Classifies and renders description tables.
#[derive(Debug, Clone)]
pub struct Generator {
    output_dir: PathBuf,
    render: RenderOptions,
}

impl Generator {
    /// Creates a generator writing under `output_dir` with default rendering.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            render: RenderOptions::default(),
        }
    }

    /// Creates a generator from a loaded configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            render: config.render_options(),
        }
    }

    /// Overrides the rendering settings.
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    /// Renders one unit per enabled, named command, in table order.
    ///
    /// A command whose module name was already generated is left out and
    /// listed in [`Generation::duplicate_commands`].
    pub fn generate(&self, table: &[CommandDescription]) -> Generation {
        let mut generation = Generation::default();
        let mut modules = HashSet::new();

        for desc in table {
            if !desc.is_generated() {
                debug!(command = %desc.command_name, enabled = desc.enabled, "Skipping command");
                continue;
            }
            let module = module_name(&desc.command_name);
            if !modules.insert(module.clone()) {
                warn!(command = %desc.command_name, module = %module, "Duplicate command module, skipping");
                generation.duplicate_commands.push(desc.command_name.trim().to_string());
                continue;
            }

            let classified = classify_command(desc);
            generation.units.push(GeneratedUnit {
                path: unit_path(&self.output_dir, &classified.name),
                contents: render_unit(&classified, &self.render),
                flag_count: classified.flags.len(),
                command: classified.name,
                skipped: classified.skipped,
            });
        }
        generation
    }
}

/// Result of rendering a description table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    pub units: Vec<GeneratedUnit>,
    /// Commands left out because an earlier record maps to the same module.
    pub duplicate_commands: Vec<String>,
}

impl Generation {
    /// Writes every unit, creating parent directories as needed.
    ///
    /// Returns the written paths in unit order.
    ///
    /// # Errors
    ///
    /// Stops at the first failure with [`GenerateError::Io`].
    pub fn write(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.units.len());
        for unit in &self.units {
            if let Some(parent) = unit.path.parent() {
                std::fs::create_dir_all(parent).map_err(|err| GenerateError::io(parent, err))?;
            }
            std::fs::write(&unit.path, &unit.contents)
                .map_err(|err| GenerateError::io(&unit.path, err))?;
            debug!(path = %unit.path.display(), flags = unit.flag_count, "Wrote generated unit");
            written.push(unit.path.clone());
        }
        Ok(written)
    }

    /// Returns the paths whose on-disk contents differ from the rendered
    /// unit, including missing files.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Io`] for read failures other than a missing
    /// file.
    pub fn check(&self) -> Result<Vec<PathBuf>> {
        let mut stale = Vec::new();
        for unit in &self.units {
            match std::fs::read_to_string(&unit.path) {
                Ok(existing) if existing == unit.contents => {}
                Ok(_) => stale.push(unit.path.clone()),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    stale.push(unit.path.clone());
                }
                Err(err) => return Err(GenerateError::io(&unit.path, err)),
            }
        }
        Ok(stale)
    }

    /// Summarizes the run.
    pub fn report(&self) -> GenerationReport {
        GenerationReport {
            commands: self
                .units
                .iter()
                .map(|unit| CommandReport {
                    command: unit.command.clone(),
                    path: unit.path.display().to_string(),
                    flags: unit.flag_count,
                    skipped: unit.skipped.clone(),
                })
                .collect(),
            duplicate_commands: self.duplicate_commands.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FlagDescription;

    fn table() -> Vec<CommandDescription> {
        vec![
            CommandDescription {
                command_name: "add".to_string(),
                enabled: true,
                options: vec![
                    FlagDescription::new("--verbose"),
                    FlagDescription::new("--chmod=(+|-)x"),
                    FlagDescription::new("--all"),
                ],
            },
            CommandDescription {
                command_name: "commit".to_string(),
                enabled: false,
                options: vec![FlagDescription::new("--amend")],
            },
            CommandDescription {
                command_name: String::new(),
                enabled: true,
                options: vec![FlagDescription::new("--orphan")],
            },
        ]
    }

    #[test]
    fn test_module_name_and_path() {
        assert_eq!(module_name("cherry-pick"), "cherry_pick");
        assert_eq!(
            unit_path(Path::new("out"), "add"),
            PathBuf::from("out/add/add_gen.rs")
        );
    }

    #[test]
    fn test_only_enabled_named_commands_generate() {
        let generation = Generator::new("out").generate(&table());
        assert_eq!(generation.units.len(), 1);
        let unit = &generation.units[0];
        assert_eq!(unit.command, "add");
        assert_eq!(unit.flag_count, 2);
        assert_eq!(unit.skipped.len(), 1);
        let all = unit.contents.find("pub fn all()").expect("all rendered");
        let verbose = unit.contents.find("pub fn verbose()").expect("verbose rendered");
        assert!(all < verbose);
        assert!(!unit.contents.contains("chmod"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = Generator::new("out");
        assert_eq!(generator.generate(&table()), generator.generate(&table()));
    }

    #[test]
    fn test_write_then_check_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let generation = Generator::new(dir.path()).generate(&table());

        assert_eq!(generation.check().unwrap(), vec![dir.path().join("add/add_gen.rs")]);

        let written = generation.write().unwrap();
        assert_eq!(written, vec![dir.path().join("add/add_gen.rs")]);
        assert!(generation.check().unwrap().is_empty());
        assert!(!dir.path().join("commit").exists());

        std::fs::write(&written[0], "// edited by hand\n").unwrap();
        assert_eq!(generation.check().unwrap(), written);
    }

    #[test]
    fn test_write_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let generation = Generator::new(&blocker).generate(&table());
        assert!(matches!(generation.write(), Err(GenerateError::Io { .. })));
    }

    #[test]
    fn test_report_summarizes_units() {
        let report = Generator::new("out").generate(&table()).report();
        assert_eq!(report.commands.len(), 1);
        assert_eq!(report.commands[0].flags, 2);
        assert_eq!(report.skipped_count(), 1);
    }

    #[test]
    fn test_duplicate_module_is_reported_not_overwritten() {
        let mut table = table();
        table.push(CommandDescription {
            command_name: "cherry-pick".to_string(),
            enabled: true,
            options: vec![FlagDescription::new("--edit")],
        });
        table.push(CommandDescription {
            command_name: "cherry_pick".to_string(),
            enabled: true,
            options: vec![FlagDescription::new("--abort")],
        });
        let first = table[0].clone();
        table.push(first);

        let generation = Generator::new("out").generate(&table);
        let commands: Vec<&str> = generation.units.iter().map(|u| u.command.as_str()).collect();
        assert_eq!(commands, vec!["add", "cherry-pick"]);
        assert!(generation.units[1].contents.contains("pub fn edit()"));
        assert_eq!(generation.duplicate_commands, vec!["cherry_pick", "add"]);

        let report = generation.report();
        assert_eq!(report.duplicate_commands, vec!["cherry_pick", "add"]);
    }
}
