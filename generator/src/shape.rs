//! Flag-syntax classification.
//!
//! Recognizes the six syntactic shapes a documented git flag can take and
//! splits the syntax into the flag token and the value placeholder. Shapes
//! are tried in [`FlagShape::PRECEDENCE`] order and the first match wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Syntactic shape of a documented flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagShape {
    /// `--quiet`
    Bare,
    /// `--strategy=<strategy>`
    RequiredNamed,
    /// `--no-recurse-submodules[=yes|on-demand|no]`
    OptionalUnnamed,
    /// `--signed=(true|false|if-asked)` or `--recurse-submodules-default=[yes|on-demand]`
    RequiredUnnamed,
    /// `--log[=<n>]`
    OptionalNamed,
    /// `-m <msg>`
    Positional,
}

impl FlagShape {
    /// Order in which shapes are tried. Do not reorder: several patterns
    /// are anchored on `=` and overlap in their character sets.
    pub const PRECEDENCE: [FlagShape; 6] = [
        FlagShape::Bare,
        FlagShape::RequiredNamed,
        FlagShape::OptionalUnnamed,
        FlagShape::RequiredUnnamed,
        FlagShape::OptionalNamed,
        FlagShape::Positional,
    ];

    /// Returns `true` if the generated option takes a value parameter.
    pub fn takes_value(self) -> bool {
        self != FlagShape::Bare
    }

    /// Returns `true` if an empty value falls back to the bare token.
    pub fn is_optional(self) -> bool {
        matches!(self, FlagShape::OptionalNamed | FlagShape::OptionalUnnamed)
    }

    /// Returns `true` if the syntax carries a placeholder name.
    pub fn has_placeholder(self) -> bool {
        matches!(
            self,
            FlagShape::RequiredNamed | FlagShape::OptionalNamed | FlagShape::Positional
        )
    }

    fn pattern(self) -> &'static Regex {
        let patterns = &*PATTERNS;
        match self {
            FlagShape::Bare => &patterns.bare,
            FlagShape::RequiredNamed => &patterns.required_named,
            FlagShape::OptionalUnnamed => &patterns.optional_unnamed,
            FlagShape::RequiredUnnamed => &patterns.required_unnamed,
            FlagShape::OptionalNamed => &patterns.optional_named,
            FlagShape::Positional => &patterns.positional,
        }
    }
}

impl std::fmt::Display for FlagShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bare => write!(f, "bare"),
            Self::RequiredNamed => write!(f, "required_named"),
            Self::OptionalUnnamed => write!(f, "optional_unnamed"),
            Self::RequiredUnnamed => write!(f, "required_unnamed"),
            Self::OptionalNamed => write!(f, "optional_named"),
            Self::Positional => write!(f, "positional"),
        }
    }
}

/// Flag syntax split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFlag {
    pub shape: FlagShape,
    /// Literal switch to emit, dashes included (`--log`).
    pub token: String,
    /// Switch name without the leading dashes (`log`).
    pub name: String,
    /// Value placeholder (`n` for `--log[=<n>]`), for shapes that name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

static PATTERNS: LazyLock<ShapePatterns> = LazyLock::new(ShapePatterns::new);

struct ShapePatterns {
    bare: Regex,
    required_named: Regex,
    optional_unnamed: Regex,
    required_unnamed: Regex,
    optional_named: Regex,
    positional: Regex,
}

impl ShapePatterns {
    fn new() -> Self {
        Self {
            bare: Regex::new(r"^(-{1,2}([\w\d\-]+))$").expect("static regex must compile"),
            required_named: Regex::new(r"^(-{1,2}([\w\d\-]+))=<([\w\d\- ]+)>$")
                .expect("static regex must compile"),
            optional_unnamed: Regex::new(r"^(-{1,2}([\w\d\-]+))\[=[\w\d\-()|]+\]$")
                .expect("static regex must compile"),
            required_unnamed: Regex::new(r"^(-{1,2}([\w\d\-]+))=[\[(][\w\d\-|()]+[\])]$")
                .expect("static regex must compile"),
            optional_named: Regex::new(r"^(-{1,2}([\w\d\-]+))\[=<([\w\d\-)]+)>\]$")
                .expect("static regex must compile"),
            positional: Regex::new(r"^(-{1,2}([\w\d\-]+)) ?<([\w\d\-)]+)>$")
                .expect("static regex must compile"),
        }
    }
}

/// Classifies raw flag syntax, returning `None` when no shape matches.
///
/// # Examples
///
/// ```
/// use gitopts_generator::{FlagShape, classify_flag};
///
/// let parsed = classify_flag("--log[=<n>]").unwrap();
/// assert_eq!(parsed.shape, FlagShape::OptionalNamed);
/// assert_eq!(parsed.token, "--log");
/// assert_eq!(parsed.placeholder.as_deref(), Some("n"));
///
/// assert!(classify_flag("--chmod=(+|-)x").is_none());
/// ```
pub fn classify_flag(raw: &str) -> Option<ParsedFlag> {
    FlagShape::PRECEDENCE.iter().find_map(|&shape| {
        let caps = shape.pattern().captures(raw)?;
        let placeholder = if shape.has_placeholder() {
            caps.get(3).map(|m| m.as_str().to_string())
        } else {
            None
        };
        Some(ParsedFlag {
            shape,
            token: caps[1].to_string(),
            name: caps[2].to_string(),
            placeholder,
        })
    })
}
