//! Attribute ordering and suppression.
//!
//! Emission order is cosmetic but must be stable: keys in [`PRIORITY`] come
//! first in list order, every other key follows in lexical order.

use crate::state::AttrValue;
use std::collections::BTreeMap;

/// Keys that lead a block, in this order.
pub const PRIORITY: &[&str] = &[
    "id",
    "name",
    "description",
    "device_types",
    "vpn_id",
    "interface_name",
    "interface_description",
    "address_variable",
    "dhcp",
    "match_entries",
    "action_entries",
];

/// Keys never emitted, at any depth.
pub const SUPPRESSED: &[&str] = &["template_type"];

/// Key kept as a commented line on resource blocks.
pub const COMMENTED: &str = "id";

/// Where a set of keys lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Top-level attributes of a resource block.
    Resource,
    /// Keys of a structure nested inside an attribute value.
    Nested,
}

/// What to do with a surviving key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Emit,
    Comment,
}

/// One key in emission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planned<'a> {
    pub key: &'a str,
    pub value: &'a AttrValue,
    pub disposition: Disposition,
}

/// Sort key: position in [`PRIORITY`], then the key itself.
fn rank(key: &str) -> (usize, &str) {
    let position = PRIORITY
        .iter()
        .position(|p| *p == key)
        .unwrap_or(PRIORITY.len());
    (position, key)
}

/// Drop suppressed and null entries, mark the commented key, and order the rest.
pub fn plan(attributes: &BTreeMap<String, AttrValue>, level: Level) -> Vec<Planned<'_>> {
    let mut planned: Vec<Planned<'_>> = attributes
        .iter()
        .filter(|(key, value)| !value.is_null() && !SUPPRESSED.contains(&key.as_str()))
        .map(|(key, value)| Planned {
            key,
            value,
            disposition: if level == Level::Resource && key.as_str() == COMMENTED {
                Disposition::Comment
            } else {
                Disposition::Emit
            },
        })
        .collect();
    planned.sort_by(|a, b| rank(a.key).cmp(&rank(b.key)));
    planned
}
