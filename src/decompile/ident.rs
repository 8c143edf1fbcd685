//! Identifier recognition and substitution inside arbitrary text.
//!
//! Identifiers are `8-4-4-4-12` hexadecimal groups. They are matched anywhere
//! in a string, not only as the whole value, and every registered match is
//! replaced. Matches the registry does not know stay as they are.
//!
//! A match only counts when it is not glued to a longer run of hex digits or
//! dashes, so `name_<id>` and `...\n<id>` are found while `<id>0` is not.

use super::registry::SymbolRegistry;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}")
        .expect("valid regex")
});

/// Result of rewriting one piece of text.
#[derive(Debug, PartialEq, Eq)]
pub struct Rewritten<'t> {
    pub text: Cow<'t, str>,
    /// Symbols substituted, in order of appearance.
    pub symbols: Vec<String>,
}

/// Whether the whole of `text` is exactly one identifier.
pub fn is_identifier(text: &str) -> bool {
    ID_PATTERN
        .find(text)
        .is_some_and(|m| m.start() == 0 && m.end() == text.len())
}

/// Identifier matches in `text` that stand on their own.
fn matches(text: &str) -> impl Iterator<Item = regex::Match<'_>> {
    ID_PATTERN
        .find_iter(text)
        .filter(move |m| is_delimited(text, m.start(), m.end()))
}

fn is_delimited(text: &str, start: usize, end: usize) -> bool {
    let joins = |c: char| c.is_ascii_hexdigit() || c == '-';
    !text[..start].chars().next_back().is_some_and(joins)
        && !text[end..].chars().next().is_some_and(joins)
}

/// Replace every registered identifier in `text`.
///
/// Text between substitutions goes through `literal`, each substituted
/// symbol through `reference`. Unregistered identifiers are plain text.
/// Registered identifiers are resolved through the registry, which marks
/// them referenced.
pub fn rewrite<'t>(
    text: &'t str,
    registry: &mut SymbolRegistry,
    literal: impl Fn(&'t str) -> Cow<'t, str>,
    reference: impl Fn(&str) -> String,
) -> Rewritten<'t> {
    let mut symbols = Vec::new();
    let mut out = String::new();
    let mut last = 0;

    for m in matches(text) {
        let id = m.as_str();
        let symbol = registry.resolve(id);
        if symbol == id {
            continue;
        }
        let symbol = symbol.to_string();
        out.push_str(&literal(&text[last..m.start()]));
        out.push_str(&reference(&symbol));
        last = m.end();
        symbols.push(symbol);
    }

    if symbols.is_empty() {
        return Rewritten {
            text: literal(text),
            symbols,
        };
    }
    out.push_str(&literal(&text[last..]));
    Rewritten {
        text: Cow::Owned(out),
        symbols,
    }
}
