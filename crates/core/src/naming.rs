//! Identifier synthesis from free-text endpoint names.
//!
//! Every generator derives its names through these functions, which is what
//! keeps the types, services, hooks and index artifacts in agreement: the
//! endpoint named `"get user list"` always yields `GetUserListResponse`,
//! `getGetUserList` and `useGetUserList`.
//!
//! The method prefix is never deduplicated against the name, so an endpoint
//! named `"Get Users"` under GET becomes `getGetUsers`.

use apigen_common::{Endpoint, HttpMethod};

/// Split free text into alphanumeric tokens. Every run of other characters
/// acts as a single separator.
fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
}

/// First letter upper-cased, the rest lower-cased.
fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => std::iter::once(first.to_ascii_uppercase())
            .chain(chars.map(|c| c.to_ascii_lowercase()))
            .collect(),
    }
}

/// `"get user-list"` -> `"GetUserList"`. Empty input yields an empty string.
pub fn to_pascal_case(raw: &str) -> String {
    tokens(raw).map(title_case).collect()
}

/// `"get user-list"` -> `"getUserList"`. Only the first token is lower-cased
/// as a whole.
pub fn to_camel_case(raw: &str) -> String {
    let mut out = String::new();
    for (i, token) in tokens(raw).enumerate() {
        if i == 0 {
            out.push_str(&token.to_ascii_lowercase());
        } else {
            out.push_str(&title_case(token));
        }
    }
    out
}

/// `"Get Users"` -> `"get-users"`, used as the base of cache keys.
pub fn slug(raw: &str) -> String {
    tokens(raw)
        .map(|t| t.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Verb prefix for service functions.
pub fn method_prefix(method: &HttpMethod) -> String {
    match method {
        HttpMethod::Get => "get".to_string(),
        HttpMethod::Post => "create".to_string(),
        HttpMethod::Put => "update".to_string(),
        HttpMethod::Patch => "patch".to_string(),
        HttpMethod::Delete => "delete".to_string(),
        other => other.as_str().to_ascii_lowercase(),
    }
}

/// Lower-case the first character.
fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
    }
}

/// Service function name: method prefix + PascalCase(name).
pub fn function_name(endpoint: &Endpoint) -> String {
    lower_first(&format!(
        "{}{}",
        method_prefix(&endpoint.method),
        to_pascal_case(&endpoint.name)
    ))
}

/// Hook name: `use` + PascalCase(name).
pub fn hook_name(endpoint: &Endpoint) -> String {
    format!("use{}", to_pascal_case(&endpoint.name))
}

/// Name of a per-endpoint type, e.g. `type_name(ep, "Params")`.
pub fn type_name(endpoint: &Endpoint, suffix: &str) -> String {
    format!("{}{suffix}", to_pascal_case(&endpoint.name))
}

/// Whether a name synthesizes usable identifiers (non-empty, not starting
/// with a digit).
pub fn is_usable_name(raw: &str) -> bool {
    to_pascal_case(raw)
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
}
