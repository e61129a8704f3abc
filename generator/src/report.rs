//! Structured reporting for generation runs.

use serde::{Deserialize, Serialize};

use crate::classify::SkippedFlag;

/// Per-command summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandReport {
    pub command: String,
    pub path: String,
    pub flags: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFlag>,
}

/// Summary of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub commands: Vec<CommandReport>,
    /// Commands left out because their module was already generated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicate_commands: Vec<String>,
}

impl GenerationReport {
    /// Total number of skipped flags across all commands.
    pub fn skipped_count(&self) -> usize {
        self.commands.iter().map(|c| c.skipped.len()).sum()
    }
}

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ReportFormat {
    Json,
    Yaml,
}

/// Formats a report in the requested format.
pub fn format_report(report: &GenerationReport, format: ReportFormat) -> Result<String, String> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        ReportFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SkipReason;

    fn report() -> GenerationReport {
        GenerationReport {
            commands: vec![CommandReport {
                command: "add".to_string(),
                path: "core/src/add/add_gen.rs".to_string(),
                flags: 13,
                skipped: vec![SkippedFlag {
                    argument: "--chmod=(+|-)x".to_string(),
                    reason: SkipReason::UnrecognizedSyntax,
                }],
            }],
            duplicate_commands: Vec::new(),
        }
    }

    #[test]
    fn test_json_report() {
        let raw = format_report(&report(), ReportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["commands"][0]["command"], "add");
        assert_eq!(parsed["commands"][0]["skipped"][0]["reason"], "unrecognized_syntax");
    }

    #[test]
    fn test_yaml_report() {
        let raw = format_report(&report(), ReportFormat::Yaml).unwrap();
        assert!(raw.contains("command: add"));
        assert!(raw.contains("flags: 13"));
    }

    #[test]
    fn test_empty_skips_not_serialized() {
        let mut report = report();
        report.commands[0].skipped.clear();
        let raw = format_report(&report, ReportFormat::Json).unwrap();
        assert!(!raw.contains("skipped"));
        assert!(!raw.contains("duplicate_commands"));
        assert_eq!(report.skipped_count(), 0);
    }

    #[test]
    fn test_duplicate_commands_serialized() {
        let mut report = report();
        report.duplicate_commands.push("cherry_pick".to_string());
        let raw = format_report(&report, ReportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["duplicate_commands"][0], "cherry_pick");
    }
}
