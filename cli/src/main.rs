use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gitopts_generator::{
    ClassifiedFlag, FlagDescription, Generation, Generator, GeneratorConfig, ReportFormat,
    classify_flag, format_report, load_descriptions,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gitopts-gen")]
#[command(about = "Generate git option builder modules from flag descriptions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render and write one module per enabled subcommand.
    Generate(GenerateArgs),
    /// Fail when the generated modules on disk are out of date.
    Check(CheckArgs),
    /// Show how flag syntax is classified.
    Classify(ClassifyArgs),
}

#[derive(Debug, Args)]
struct TableArgs {
    /// YAML generator configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Description table (overrides the config file).
    #[arg(long)]
    descriptions: Option<PathBuf>,
    /// Output directory (overrides the config file).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Module path generated code imports `Cmd` and `CmdOption` from.
    #[arg(long)]
    runtime_path: Option<String>,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[command(flatten)]
    table: TableArgs,
    /// Print a generation report to stdout in this format.
    #[arg(long)]
    report: Option<ReportFormat>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    #[command(flatten)]
    table: TableArgs,
}

#[derive(Debug, Args)]
struct ClassifyArgs {
    /// Flag syntax to classify (e.g. `-- --log[=<n>]`).
    #[arg(required = true, allow_hyphen_values = true)]
    syntax: Vec<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Check(args) => run_check(args),
        Command::Classify(args) => run_classify(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let generation = build_generation(&args.table)?;
    let written = generation.write().map_err(|err| err.to_string())?;

    let report = generation.report();
    match args.report {
        Some(format) => print!("{}", format_report(&report, format)?),
        None => {
            for path in &written {
                println!("{}", path.display());
            }
        }
    }

    let skipped = report.skipped_count();
    if skipped > 0 {
        eprintln!("{skipped} flag(s) skipped.");
    }
    if !report.duplicate_commands.is_empty() {
        eprintln!(
            "{} duplicate command(s) skipped: {}.",
            report.duplicate_commands.len(),
            report.duplicate_commands.join(", ")
        );
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let generation = build_generation(&args.table)?;
    let stale = generation.check().map_err(|err| err.to_string())?;

    if stale.is_empty() {
        println!("{} generated file(s) up to date.", generation.units.len());
        return Ok(());
    }
    for path in &stale {
        println!("{}", path.display());
    }
    Err(format!(
        "{} generated file(s) out of date; run `gitopts-gen generate`",
        stale.len()
    ))
}

fn run_classify(args: ClassifyArgs) -> Result<(), String> {
    let mut unrecognized = 0usize;
    let entries: Vec<serde_json::Value> = args
        .syntax
        .iter()
        .map(|syntax| match classify_flag(syntax) {
            Some(parsed) => {
                let classified = ClassifiedFlag::from_description(&FlagDescription::new(syntax));
                serde_json::json!({
                    "syntax": syntax,
                    "shape": parsed.shape,
                    "token": parsed.token,
                    "placeholder": parsed.placeholder,
                    "method": classified.as_ref().map(|flag| flag.method.clone()),
                    "argument": classified.and_then(|flag| flag.argument),
                })
            }
            None => {
                unrecognized += 1;
                serde_json::json!({ "syntax": syntax, "shape": null })
            }
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries)
        .map_err(|e| format!("Failed to serialize output: {e}"))?;
    println!("{json}");

    if unrecognized > 0 {
        return Err(format!("{unrecognized} flag syntax(es) not recognized"));
    }
    Ok(())
}

fn build_generation(args: &TableArgs) -> Result<Generation, String> {
    let config = resolve_config(args)?;
    debug!(?config, "Resolved generator configuration");
    let table = load_descriptions(&config.descriptions).map_err(|err| err.to_string())?;
    Ok(Generator::from_config(&config).generate(&table))
}

fn resolve_config(args: &TableArgs) -> Result<GeneratorConfig, String> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path).map_err(|err| err.to_string())?,
        None => GeneratorConfig::default(),
    };
    if let Some(descriptions) = &args.descriptions {
        config.descriptions = descriptions.clone();
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if let Some(runtime_path) = &args.runtime_path {
        config.runtime_path = runtime_path.clone();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_args() -> TableArgs {
        TableArgs {
            config: None,
            descriptions: None,
            output: None,
            runtime_path: None,
        }
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config = resolve_config(&table_args()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_resolve_config_flag_overrides() {
        let args = TableArgs {
            descriptions: Some(PathBuf::from("table.json")),
            output: Some(PathBuf::from("out")),
            runtime_path: Some("gitopts_core".to_string()),
            ..table_args()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.descriptions, PathBuf::from("table.json"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.runtime_path, "gitopts_core");
    }

    #[test]
    fn test_resolve_config_missing_file() {
        let args = TableArgs {
            config: Some(PathBuf::from("/nonexistent/gitopts-gen.yml")),
            ..table_args()
        };
        let err = resolve_config(&args).unwrap_err();
        assert!(err.contains("gitopts-gen.yml"));
    }

    #[test]
    fn test_cli_parses_classify_with_separator() {
        let cli = Cli::try_parse_from(["gitopts-gen", "classify", "--", "--log[=<n>]", "-n <number>"])
            .unwrap();
        match cli.command {
            Command::Classify(args) => assert_eq!(args.syntax, ["--log[=<n>]", "-n <number>"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
