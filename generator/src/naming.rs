//! Identifier derivation.
//!
//! Flag tokens and value placeholders are kebab-case (`dry-run`) or
//! space-separated (`file name`). Method names are derived as UpperCamelCase
//! and argument names as lowerCamelCase; the renderer then maps both to
//! snake_case Rust identifiers.

/// Argument identifier used when the syntax names no value, or when the
/// derived name would collide with the method name.
pub const GENERIC_ARGUMENT: &str = "value";

/// Name of the closure parameter receiving the `Cmd` in generated code.
pub const CLOSURE_PARAM: &str = "cmd";

/// Converts a kebab-case or space-separated token to camel case.
///
/// Every `-` or space is dropped and the next character is uppercased. The
/// first character is uppercased when `upper_first` is set and lowercased
/// otherwise; all other characters pass through unchanged.
///
/// # Examples
///
/// ```
/// use gitopts_generator::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("dry-run", true), "DryRun");
/// assert_eq!(to_camel_case("dry-run", false), "dryRun");
/// assert_eq!(to_camel_case("file name", false), "fileName");
/// ```
pub fn to_camel_case(raw: &str, upper_first: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut upper_next = false;

    for ch in raw.trim().chars() {
        if ch == '-' || ch == ' ' {
            upper_next = true;
            continue;
        }
        if out.is_empty() {
            if upper_first {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
        } else if upper_next {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        upper_next = false;
    }
    out
}

/// Derives the public method name from the flag name or its override.
pub fn method_name(flag_name: &str, method_override: Option<&str>) -> String {
    to_camel_case(method_override.unwrap_or(flag_name), true)
}

/// Derives the argument identifier for a value placeholder.
///
/// Falls back to [`GENERIC_ARGUMENT`] when there is no placeholder or when
/// the derived name equals `method` ignoring case.
pub fn argument_name(method: &str, placeholder: Option<&str>) -> String {
    placeholder
        .map(|raw| to_camel_case(raw, false))
        .filter(|arg| !arg.is_empty() && arg.to_lowercase() != method.to_lowercase())
        .unwrap_or_else(|| GENERIC_ARGUMENT.to_string())
}

/// Converts a camel-case identifier to snake_case.
///
/// Acronym runs stay together: `GPGSign` becomes `gpg_sign`.
pub fn to_snake_case(camel: &str) -> String {
    let chars: Vec<char> = camel.chars().collect();
    let mut out = String::with_capacity(camel.len() + 4);

    for (idx, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            if idx > 0 && !out.ends_with('_') {
                let prev = chars[idx - 1];
                let next_is_lower = chars.get(idx + 1).is_some_and(|c| c.is_lowercase());
                if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
                {
                    out.push('_');
                }
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const RESERVED_PATH_KEYWORDS: &[&str] = &["crate", "self", "super", "Self"];

/// Makes `ident` usable as a Rust identifier.
///
/// Keywords become raw identifiers (`r#continue`). Path keywords get a
/// trailing underscore and names starting with a digit a leading one.
pub fn rust_ident(ident: &str) -> String {
    if RESERVED_PATH_KEYWORDS.contains(&ident) {
        return format!("{ident}_");
    }
    if RUST_KEYWORDS.contains(&ident) {
        return format!("r#{ident}");
    }
    if ident.chars().next().is_some_and(|ch| ch.is_ascii_digit()) {
        return format!("_{ident}");
    }
    ident.to_string()
}

/// Rust function name emitted for a method name (`NoFF` → `no_ff`).
pub fn function_ident(method: &str) -> String {
    rust_ident(&to_snake_case(method))
}

/// Rust parameter name emitted for an argument name.
///
/// An argument that would shadow the closure parameter becomes
/// [`GENERIC_ARGUMENT`].
pub fn parameter_ident(argument: &str) -> String {
    let snake = to_snake_case(argument);
    if snake == CLOSURE_PARAM {
        return GENERIC_ARGUMENT.to_string();
    }
    rust_ident(&snake)
}

/// Returns `true` if `ident` can be emitted as a function or parameter name.
///
/// ```
/// use gitopts_generator::naming::is_valid_ident;
///
/// assert!(is_valid_ident("dry_run"));
/// assert!(is_valid_ident("r#continue"));
/// assert!(!is_valid_ident("bar)"));
/// assert!(!is_valid_ident(""));
/// ```
pub fn is_valid_ident(ident: &str) -> bool {
    let bare = ident.strip_prefix("r#").unwrap_or(ident);
    let mut chars = bare.chars();
    let starts_ok = chars.next().is_some_and(|ch| ch == '_' || ch.is_alphabetic());
    starts_ok && bare != "_" && chars.all(|ch| ch == '_' || ch.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_method_and_argument() {
        assert_eq!(to_camel_case("dry-run", true), "DryRun");
        assert_eq!(to_camel_case("dry-run", false), "dryRun");
        assert_eq!(to_camel_case("force", true), "Force");
        assert_eq!(to_camel_case("intent-to-add", true), "IntentToAdd");
    }

    #[test]
    fn test_camel_case_spaces_and_trim() {
        assert_eq!(to_camel_case("  file name ", false), "fileName");
        assert_eq!(to_camel_case("commit message", true), "CommitMessage");
    }

    #[test]
    fn test_camel_case_keeps_other_characters() {
        assert_eq!(to_camel_case("ignore-space-at-eol", true), "IgnoreSpaceAtEol");
        assert_eq!(to_camel_case("n", true), "N");
        assert_eq!(to_camel_case("Keyid", false), "keyid");
        assert_eq!(to_camel_case("PathSpec", true), "PathSpec");
    }

    #[test]
    fn test_method_override_wins() {
        assert_eq!(method_name("m", Some("message")), "Message");
        assert_eq!(method_name("dry-run", None), "DryRun");
    }

    #[test]
    fn test_argument_collision_falls_back_to_generic() {
        assert_eq!(argument_name("Strategy", Some("strategy")), GENERIC_ARGUMENT);
        assert_eq!(argument_name("GpgSign", Some("gpg-sign")), GENERIC_ARGUMENT);
        assert_eq!(argument_name("Log", Some("n")), "n");
        assert_eq!(argument_name("Log", None), GENERIC_ARGUMENT);
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("DryRun"), "dry_run");
        assert_eq!(to_snake_case("dryRun"), "dry_run");
        assert_eq!(to_snake_case("IntentToAdd"), "intent_to_add");
        assert_eq!(to_snake_case("GPGSign"), "gpg_sign");
        assert_eq!(to_snake_case("NoFF"), "no_ff");
        assert_eq!(to_snake_case("N"), "n");
        assert_eq!(to_snake_case("Ipv4Only"), "ipv4_only");
    }

    #[test]
    fn test_rust_ident_escapes_keywords() {
        assert_eq!(rust_ident("continue"), "r#continue");
        assert_eq!(rust_ident("move"), "r#move");
        assert_eq!(rust_ident("self"), "self_");
        assert_eq!(rust_ident("4"), "_4");
        assert_eq!(rust_ident("dry_run"), "dry_run");
    }

    #[test]
    fn test_function_and_parameter_idents() {
        assert_eq!(function_ident("NoFf"), "no_ff");
        assert_eq!(function_ident("NoFF"), "no_ff");
        assert_eq!(function_ident("Continue"), "r#continue");
        assert_eq!(parameter_ident("cmd"), GENERIC_ARGUMENT);
        assert_eq!(parameter_ident("parentNumber"), "parent_number");
        assert_eq!(parameter_ident("type"), "r#type");
    }

    #[test]
    fn test_valid_idents() {
        assert!(is_valid_ident("no_ff"));
        assert!(is_valid_ident("_4"));
        assert!(is_valid_ident("self_"));
        assert!(!is_valid_ident("_"));
        assert!(!is_valid_ident("r#"));
        assert!(!is_valid_ident("bar)"));
        assert!(!is_valid_ident("a.b"));
    }
}
