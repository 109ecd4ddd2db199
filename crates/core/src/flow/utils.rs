//! Common utilities for Flow code generation.

/// Check if a name is not a plain identifier and must be quoted as a key.
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

/// Escape a string for use inside a single-quoted literal.
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render a property key. Keys containing `-` or `_` are always quoted, as
/// are keys that are not valid identifiers.
pub fn property_key(name: &str) -> String {
    if name.contains(['-', '_']) || needs_quoting(name) {
        format!("'{}'", escape_single_quoted(name))
    } else {
        name.to_string()
    }
}

/// Render a function parameter name.
///
/// Flow has no quoted parameter names, so anything that is not an identifier
/// is camel-cased across its invalid characters (`a-b` becomes `aB`).
pub fn param_name(name: &str) -> String {
    if !needs_quoting(name) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
            if upper_next && !out.is_empty() {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    if out.is_empty() {
        return "arg".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}
