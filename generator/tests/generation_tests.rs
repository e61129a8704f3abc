use std::fs;
use std::path::{Path, PathBuf};

use gitopts_generator::{
    FlagShape, Generator, GeneratorConfig, SkipReason, classify_command, load_descriptions,
};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/descriptions.json")
}

#[test]
fn test_fixture_generates_only_enabled_named_commands() {
    let table = load_descriptions(fixture()).unwrap();
    let generation = Generator::new("out").generate(&table);

    assert_eq!(generation.units.len(), 1);
    let unit = &generation.units[0];
    assert_eq!(unit.command, "cherry-pick");
    assert_eq!(unit.path, Path::new("out/cherry_pick/cherry_pick_gen.rs"));
}

#[test]
fn test_fixture_flags_sorted_by_method() {
    let table = load_descriptions(fixture()).unwrap();
    let classified = classify_command(&table[0]);

    let methods: Vec<&str> = classified.flags.iter().map(|f| f.method.as_str()).collect();
    assert_eq!(
        methods,
        ["Abort", "Cleanup", "Edit", "GpgSign", "Mainline", "RerereAutoupdate", "Strategy"]
    );

    let shapes: Vec<FlagShape> = classified.flags.iter().map(|f| f.shape).collect();
    assert_eq!(
        shapes,
        [
            FlagShape::Bare,
            FlagShape::RequiredNamed,
            FlagShape::Bare,
            FlagShape::OptionalNamed,
            FlagShape::Positional,
            FlagShape::OptionalUnnamed,
            FlagShape::RequiredUnnamed,
        ]
    );
}

#[test]
fn test_fixture_skips_are_reported() {
    let table = load_descriptions(fixture()).unwrap();
    let classified = classify_command(&table[0]);

    assert_eq!(classified.skipped.len(), 2);
    let unrecognized = classified
        .skipped
        .iter()
        .find(|s| s.reason == SkipReason::UnrecognizedSyntax)
        .expect("unrecognized flag reported");
    assert_eq!(unrecognized.argument, "--keep-redundant-commits weird");

    let duplicate = classified
        .skipped
        .iter()
        .find(|s| s.reason == SkipReason::DuplicateMethod)
        .expect("duplicate flag reported");
    assert_eq!(duplicate.argument, "-e");

    // The first `Edit` in table order survives.
    let edit = classified.flags.iter().find(|f| f.method == "Edit").unwrap();
    assert_eq!(edit.token, "--edit");
}

#[test]
fn test_fixture_rendered_contents() {
    let table = load_descriptions(fixture()).unwrap();
    let generation = Generator::new("out").generate(&table);
    let contents = &generation.units[0].contents;

    assert!(contents.contains("pub fn mainline(parent_number: impl Into<String>) -> CmdOption"));
    assert!(contents.contains("cmd.add_option_pair(\"--mainline\", parent_number);"));
    assert!(contents.contains("pub fn rerere_autoupdate(value: impl Into<String>) -> CmdOption"));
    assert!(contents.contains("pub fn strategy(value: impl Into<String>) -> CmdOption"));
    assert!(contents.contains("cmd.add_option(\"--gpg-sign\");"));
    assert!(contents.contains("/// \\`\\`\\`"));
    assert!(contents.contains("/// -S[<keyid>], --gpg-sign[=<keyid>]"));
    assert!(!contents.contains("weird"));
}

#[test]
fn test_write_then_check_round() {
    let dir = tempfile::tempdir().unwrap();
    let table = load_descriptions(fixture()).unwrap();
    let generation = Generator::new(dir.path()).generate(&table);

    assert_eq!(generation.check().unwrap().len(), 1);

    let written = generation.write().unwrap();
    assert_eq!(written, [dir.path().join("cherry_pick/cherry_pick_gen.rs")]);
    assert!(generation.check().unwrap().is_empty());

    // A second run over the same table produces identical bytes.
    let again = Generator::new(dir.path()).generate(&table);
    assert_eq!(again, generation);
    assert!(!dir.path().join("rebase").exists());
}

#[test]
fn test_config_file_drives_generation() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(fixture(), dir.path().join("table.json")).unwrap();
    let config_path = dir.path().join("gitopts-gen.yml");
    fs::write(
        &config_path,
        "descriptions: table.json\noutput_dir: src\nruntime_path: gitopts_core\n",
    )
    .unwrap();

    let config = GeneratorConfig::load(&config_path).unwrap();
    let table = load_descriptions(&config.descriptions).unwrap();
    let generation = Generator::from_config(&config).generate(&table);
    generation.write().unwrap();

    let unit = dir.path().join("src/cherry_pick/cherry_pick_gen.rs");
    let contents = fs::read_to_string(unit).unwrap();
    assert!(contents.contains("use gitopts_core::{Cmd, CmdOption};"));
}

#[test]
fn test_committed_core_units_are_current() {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    let config = GeneratorConfig::load(manifest.join("gitopts-gen.yml")).unwrap();
    let table = load_descriptions(&config.descriptions).unwrap();
    let generation = Generator::from_config(&config).generate(&table);

    let commands: Vec<&str> = generation.units.iter().map(|u| u.command.as_str()).collect();
    assert_eq!(commands, ["add", "merge", "push"]);

    let stale = generation.check().unwrap();
    assert!(stale.is_empty(), "regenerate with `gitopts-gen generate --config generator/gitopts-gen.yml`: {stale:?}");
}
