//! Common utilities for TypeScript code generation.
//!
//! This module provides shared helper functions used across the generators and emission.

use std::collections::HashSet;
use std::sync::LazyLock;

/// TypeScript reserved words that cannot be used as identifiers.
pub static TS_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        "let",
        "static",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "await",
        "async",
    ]
    .into_iter()
    .collect()
});

/// Built-in type names an interface or alias may not take.
const PREDEFINED_TYPE_NAMES: &[&str] = &[
    "any", "bigint", "boolean", "never", "number", "object", "string", "symbol", "undefined",
    "unknown",
];

/// Identifiers the generated service and hook functions use for their own
/// parameters and locals. Path parameters must not shadow them.
const GENERATED_LOCALS: &[&str] = &["params", "data", "config", "options", "queryClient"];

/// Check if a name needs quoting to be used as a property key.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Whether `name` can be declared as an interface or type alias.
pub fn is_type_identifier(name: &str) -> bool {
    !needs_quoting(name)
        && !TS_RESERVED_WORDS.contains(name)
        && !PREDEFINED_TYPE_NAMES.contains(&name)
}

/// Escape a string for use in a single-quoted TypeScript string literal.
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Escape static text placed inside a template literal.
pub fn escape_template(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Quote a string if needed for use as a property key.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        format!("'{}'", escape_single_quoted(name))
    } else {
        name.to_string()
    }
}

/// Sanitize a parameter name to be a valid TypeScript identifier.
/// - Replaces `-`, `.`, ` ` with separators and converts to camelCase
/// - Prepends `_` if starts with digit
/// - Escapes reserved words and generated locals with `_` prefix
pub fn sanitize_ts_identifier(name: &str) -> String {
    let mut result = String::new();
    for (i, part) in name
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
        .filter(|p| !p.is_empty())
        .enumerate()
    {
        if i == 0 {
            result.push_str(part);
        } else {
            result.push_str(&capitalize_first(part));
        }
    }

    if result.is_empty() {
        return "_empty".to_string();
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result = format!("_{result}");
    }

    if TS_RESERVED_WORDS.contains(result.as_str()) || GENERATED_LOCALS.contains(&result.as_str())
    {
        result = format!("_{result}");
    }

    result
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Make free text safe inside a single-line JSDoc comment.
pub fn jsdoc_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "*\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_quoting() {
        assert!(!needs_quoting("foo"));
        assert!(!needs_quoting("_foo"));
        assert!(!needs_quoting("$foo"));
        assert!(!needs_quoting("camelCase"));

        assert!(needs_quoting(""));
        assert!(needs_quoting("123foo"));
        assert!(needs_quoting("foo-bar"));
        assert!(needs_quoting("foo.bar"));
        assert!(needs_quoting("foo bar"));
    }

    #[test]
    fn test_is_type_identifier() {
        assert!(is_type_identifier("PetOwner"));
        assert!(is_type_identifier("_Internal"));
        assert!(!is_type_identifier("2fa"));
        assert!(!is_type_identifier("pet-owner"));
        assert!(!is_type_identifier("class"));
        assert!(!is_type_identifier("string"));
        assert!(!is_type_identifier(""));
    }

    #[test]
    fn test_escape_single_quoted() {
        assert_eq!(escape_single_quoted("hello"), "hello");
        assert_eq!(escape_single_quoted("it's"), "it\\'s");
        assert_eq!(escape_single_quoted("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_template() {
        assert_eq!(escape_template("/a/b"), "/a/b");
        assert_eq!(escape_template("/a`${x}"), "/a\\`\\${x}");
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("foo"), "foo");
        assert_eq!(quote_if_needed("foo-bar"), "'foo-bar'");
        assert_eq!(quote_if_needed("123"), "'123'");
    }

    #[test]
    fn test_sanitize_ts_identifier() {
        assert_eq!(sanitize_ts_identifier("foo"), "foo");
        assert_eq!(sanitize_ts_identifier("user-id"), "userId");
        assert_eq!(sanitize_ts_identifier("foo.bar"), "fooBar");
        assert_eq!(sanitize_ts_identifier("user_id"), "user_id");
        assert_eq!(sanitize_ts_identifier("123foo"), "_123foo");
        assert_eq!(sanitize_ts_identifier("delete"), "_delete");
        assert_eq!(sanitize_ts_identifier("params"), "_params");
        assert_eq!(sanitize_ts_identifier("--"), "_empty");
    }

    #[test]
    fn test_jsdoc_text() {
        assert_eq!(jsdoc_text("multi\n  line"), "multi line");
        assert_eq!(jsdoc_text("ends */ early"), "ends *\\/ early");
    }
}
