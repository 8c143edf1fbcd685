//! Attribute value rendering.
//!
//! Turns an [`AttrValue`] into HCL expression text:
//!
//! | Value                     | Output                                   |
//! |---------------------------|------------------------------------------|
//! | `Bool`                    | `true` / `false`                         |
//! | `Number`                  | literal text                             |
//! | `String` (an identifier)  | `sdwan_x.Name.id` when registered        |
//! | `String`                  | quoted, embedded ids as `${sdwan_x.Name.id}` |
//! | `List` of scalars         | `["a", "b"]`                             |
//! | `List` with structures    | multi-line `[ {...}, ]` block            |
//! | `Structure`               | multi-line `{ key = value }` block       |
//!
//! Multi-line output starts at the current position and closes at `depth`,
//! so callers only prefix the first line.
//!
//! Inside a device template, a structure entry whose value was substituted
//! by a reference also gets a sibling `version = <symbol>.version` line, and
//! the structure's own raw `version` is dropped in favour of it.

use super::{
    ident,
    policy::{self, Level},
    registry::SymbolRegistry,
};
use crate::{
    hcl::{escape_string, key, pad},
    state::AttrValue,
};
use std::collections::BTreeMap;

/// Rendered leaf plus the symbol it was resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub text: String,
    pub symbol: Option<String>,
}

/// Renders attribute values against a populated registry.
pub struct ValueRenderer<'r> {
    registry: &'r mut SymbolRegistry,
    /// Emit `version` companions for substituted references.
    versioned: bool,
}

impl<'r> ValueRenderer<'r> {
    pub fn new(registry: &'r mut SymbolRegistry, versioned: bool) -> Self {
        Self {
            registry,
            versioned,
        }
    }

    /// Render any value whose key sits at `depth`.
    ///
    /// Returns `None` for `Null`, which callers drop.
    pub fn render(&mut self, value: &AttrValue, depth: usize) -> Option<String> {
        match value {
            AttrValue::Null => None,
            AttrValue::List(items) => Some(self.render_list(items, depth)),
            AttrValue::Structure(map) => Some(self.render_structure(map, depth)),
            scalar => self.render_scalar(scalar).map(|leaf| leaf.text),
        }
    }

    /// Render a scalar; `None` for `Null` and for non-scalars.
    pub fn render_scalar(&mut self, value: &AttrValue) -> Option<Leaf> {
        let text = match value {
            AttrValue::Bool(b) => b.to_string(),
            AttrValue::Number(n) => n.to_string(),
            AttrValue::String(s) => return Some(self.render_string(s)),
            AttrValue::Null | AttrValue::List(_) | AttrValue::Structure(_) => return None,
        };
        Some(Leaf { text, symbol: None })
    }

    /// Render a string, substituting registered identifiers.
    ///
    /// Identifiers are found in the raw text; only the text around them is
    /// escaped, so escape sequences never hide an identifier.
    pub fn render_string(&mut self, s: &str) -> Leaf {
        if ident::is_identifier(s) {
            let symbol = self.registry.resolve(s);
            if symbol != s {
                return Leaf {
                    text: format!("{symbol}.id"),
                    symbol: Some(symbol.to_string()),
                };
            }
        }

        let rewritten = ident::rewrite(s, self.registry, escape_string, |symbol| {
            format!("${{{symbol}.id}}")
        });
        Leaf {
            text: format!("\"{}\"", rewritten.text),
            symbol: rewritten.symbols.into_iter().next(),
        }
    }

    /// Scalar lists stay on one line; anything else becomes a block.
    fn render_list(&mut self, items: &[AttrValue], depth: usize) -> String {
        let items: Vec<&AttrValue> = items.iter().filter(|v| !v.is_null()).collect();

        if items.iter().all(|v| v.is_scalar()) {
            let rendered: Vec<String> = items
                .iter()
                .filter_map(|v| self.render_scalar(v))
                .map(|leaf| leaf.text)
                .collect();
            return format!("[{}]", rendered.join(", "));
        }

        let inner = pad(depth + 1);
        let mut out = String::from("[\n");
        for item in items {
            if let Some(text) = self.render(item, depth + 1) {
                out.push_str(&inner);
                out.push_str(&text);
                out.push_str(",\n");
            }
        }
        out.push_str(&pad(depth));
        out.push(']');
        out
    }

    fn render_structure(&mut self, map: &BTreeMap<String, AttrValue>, depth: usize) -> String {
        let planned = policy::plan(map, Level::Nested);
        if planned.is_empty() {
            return "{}".to_string();
        }

        let inner = pad(depth + 1);
        let mut entries: Vec<Entry> = Vec::with_capacity(planned.len() + 1);
        let mut companion = false;

        for item in planned {
            let text = match item.value {
                AttrValue::String(s) => {
                    let leaf = self.render_string(s);
                    if self.versioned
                        && !companion
                        && let Some(symbol) = leaf.symbol
                    {
                        companion = true;
                        entries.push(Entry::raw(item.key, leaf.text));
                        entries.push(Entry::companion(format!("{symbol}.version")));
                        continue;
                    }
                    leaf.text
                }
                value => match self.render(value, depth + 1) {
                    Some(text) => text,
                    None => continue,
                },
            };
            entries.push(Entry::raw(item.key, text));
        }

        let mut out = String::from("{\n");
        for entry in entries {
            if companion && !entry.synthetic && entry.key == "version" {
                continue;
            }
            out.push_str(&inner);
            out.push_str(&key(entry.key));
            out.push_str(" = ");
            out.push_str(&entry.text);
            out.push('\n');
        }
        out.push_str(&pad(depth));
        out.push('}');
        out
    }
}

/// One `key = value` line of a structure block.
struct Entry<'a> {
    key: &'a str,
    text: String,
    synthetic: bool,
}

impl<'a> Entry<'a> {
    fn raw(key: &'a str, text: String) -> Self {
        Self {
            key,
            text,
            synthetic: false,
        }
    }

    fn companion(text: String) -> Self {
        Self {
            key: "version",
            text,
            synthetic: true,
        }
    }
}

// ============================================================================
// tests
// ============================================================================
