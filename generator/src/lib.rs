//! Offline generator for git option builder modules.
//!
//! Reads a JSON table describing the documented flags of each git
//! subcommand, classifies every flag's syntax into one of six shapes, and
//! renders one Rust module per enabled subcommand. The generated functions
//! return `CmdOption` closures consumed by `gitopts-core`.
//!
//! # Pipeline
//!
//! 1. [`load_descriptions`] reads the table.
//! 2. [`classify_flag`] recognizes the shape of each flag syntax; unknown
//!    syntax is logged and skipped.
//! 3. [`classify_command`] derives method and argument names and sorts the
//!    flags by method name.
//! 4. [`render_unit`] produces the module source.
//! 5. [`Generator`] ties the steps together and [`Generation`] writes or
//!    checks the output files.
//!
//! # Example
//!
//! ```
//! use gitopts_generator::{CommandDescription, FlagDescription, Generator};
//!
//! let table = vec![CommandDescription {
//!     command_name: "merge".to_string(),
//!     enabled: true,
//!     options: vec![
//!         FlagDescription::new("--strategy=<strategy>"),
//!         FlagDescription::new("--log[=<n>]"),
//!         FlagDescription::new("--no-ff"),
//!     ],
//! }];
//!
//! let generation = Generator::new("core/src").generate(&table);
//! let unit = &generation.units[0];
//! assert!(unit.path.ends_with("merge/merge_gen.rs"));
//! assert!(unit.contents.contains("pub fn log(n: impl Into<String>) -> CmdOption"));
//! assert!(unit.contents.contains("pub fn no_ff() -> CmdOption"));
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod generate;
pub mod model;
pub mod naming;
pub mod render;
pub mod report;
pub mod shape;

pub use classify::{ClassifiedCommand, ClassifiedFlag, SkipReason, SkippedFlag, classify_command};
pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use generate::{GeneratedUnit, Generation, Generator, module_name, unit_path};
pub use model::{CommandDescription, FlagDescription, load_descriptions, parse_descriptions};
pub use render::{GENERATED_HEADER, RenderOptions, render_unit};
pub use report::{CommandReport, GenerationReport, ReportFormat, format_report};
pub use shape::{FlagShape, ParsedFlag, classify_flag};
