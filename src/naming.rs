//! Terraform resource name normalization.
//!
//! A resource name must start with a letter or underscore and may contain
//! only letters, digits, underscores and dashes.

/// Turn an arbitrary display name into a valid Terraform resource name.
///
/// Names that do not start with a letter or underscore get a `_` prefix,
/// and every character outside `[A-Za-z0-9_-]` becomes `_`.
///
/// # Examples
///
/// - `normalize_name("7_Site")` -> `"_7_Site"`
/// - `normalize_name("DC Hub/1")` -> `"DC_Hub_1"`
/// - `normalize_name("-edge")` -> `"_-edge"`
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);

    match name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => out.push('_'),
    }

    out.extend(name.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            c
        } else {
            '_'
        }
    }));
    out
}
