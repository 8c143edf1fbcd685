//! Resource block emission.

use super::{
    policy::{self, Disposition, Level},
    registry::SymbolRegistry,
    value::ValueRenderer,
};
use crate::{
    hcl::{INDENT, quote, resource_open},
    state::{AttrValue, Instance},
};

/// Output group for a resource type: its last two `_`-separated words.
///
/// `sdwan_cisco_system_feature_template` -> `feature_template`
pub fn group_for(kind: &str) -> String {
    let words: Vec<&str> = kind.split('_').collect();
    match words.as_slice() {
        [.., a, b] => format!("{a}_{b}"),
        _ => kind.to_string(),
    }
}

/// Emit one resource block.
///
/// `versioned` turns on `version` companions for substituted references
/// inside nested structures (device templates only).
pub fn emit_resource(
    kind: &str,
    name: &str,
    instance: &Instance,
    registry: &mut SymbolRegistry,
    versioned: bool,
) -> Vec<String> {
    let planned = policy::plan(&instance.attributes, Level::Resource);
    let mut renderer = ValueRenderer::new(registry, versioned);

    let mut lines = Vec::with_capacity(planned.len() + 3);
    lines.push(resource_open(kind, name));

    for item in planned {
        match item.disposition {
            Disposition::Comment => {
                lines.push(format!("{INDENT}# {} = {}", item.key, commented(item.value)));
            }
            Disposition::Emit => {
                if let Some(text) = renderer.render(item.value, 1) {
                    lines.push(format!("{INDENT}{} = {text}", item.key));
                }
            }
        }
    }

    lines.push("}".to_string());
    lines.push(String::new());
    lines
}

/// Raw text of a commented line: never resolved, so it keeps the real id.
fn commented(value: &AttrValue) -> String {
    match value {
        AttrValue::String(s) => quote(s),
        AttrValue::Bool(b) => b.to_string(),
        AttrValue::Number(n) => n.to_string(),
        AttrValue::Null => "null".to_string(),
        AttrValue::List(_) | AttrValue::Structure(_) => "...".to_string(),
    }
}
