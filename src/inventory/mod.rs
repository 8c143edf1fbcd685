//! Backup inventory reader for the `import` command.
//!
//! A backup tree holds one `<type>.json` file per object type under
//! `inventory/`, each a list of objects. Every supported object becomes one
//! [`InventoryObject`]: a resource type, a normalized resource name and the
//! id terraform imports it by.

pub mod files;
mod translate;

use translate::resource_type;

use crate::{debug, device::is_vedge_device, log, naming::normalize_name};
use anyhow::Result;
use serde_json::Value;
use std::{fmt, path::Path};
use translate::{UNSUPPORTED_FEATURES, UNSUPPORTED_TYPES};

/// Device template names skipped unless defaults are requested.
const DEFAULT_TEMPLATE_PREFIXES: &[&str] = &["Default_", "Factory_Default_"];

/// One object to import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryObject {
    pub kind: String,
    pub name: String,
    pub id: String,
}

impl InventoryObject {
    /// Terraform address `<type>.<name>`.
    pub fn address(&self) -> String {
        format!("{}.{}", self.kind, self.name)
    }
}

/// Why an inventory entry was left out.
#[derive(Debug, PartialEq, Eq)]
enum Skip {
    Malformed,
    UnsupportedType(String),
    UnknownType(String),
    DefaultTemplate(String),
    Vedge(String),
    UnsupportedFeature(String, String),
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "entry without name or id"),
            Self::UnsupportedType(t) => write!(f, "type '{t}' is not supported"),
            Self::UnknownType(t) => write!(f, "unknown type '{t}'"),
            Self::DefaultTemplate(name) => write!(f, "device template '{name}': explicit skip"),
            Self::Vedge(name) => write!(f, "feature template '{name}': vEdge devices are not supported"),
            Self::UnsupportedFeature(name, t) => {
                write!(f, "feature template '{name}': type '{t}' is not supported by the provider")
            }
        }
    }
}

/// Objects found in a backup tree.
#[derive(Debug, Default)]
pub struct Inventory {
    pub objects: Vec<InventoryObject>,
    pub skipped: usize,
}

impl Inventory {
    /// Scan `<dir>/*.json`.
    pub fn scan(dir: &Path, skip_defaults: bool) -> Result<Self> {
        let mut inventory = Self::default();

        for path in files::json_files(dir)? {
            let (Some(backup_type), Some(content)) = (files::file_type(&path), files::load_json(&path))
            else {
                continue;
            };
            let Value::Array(entries) = content else {
                log!("warning"; "{} does not hold a list of objects, skipping", path.display());
                continue;
            };

            for entry in &entries {
                match classify(backup_type, entry, skip_defaults) {
                    Ok(object) => {
                        debug!("import"; "adding '{}' object '{}'", backup_type, object.name);
                        inventory.objects.push(object);
                    }
                    Err(Skip::Malformed) => {
                        log!("warning"; "{} does not seem to hold SD-WAN objects, skipping entry", path.display());
                        inventory.skipped += 1;
                    }
                    Err(reason) => {
                        debug!("import"; "skipping {}", reason);
                        inventory.skipped += 1;
                    }
                }
            }
        }

        Ok(inventory)
    }
}

/// Decide whether one backup entry is imported, and as what.
fn classify(backup_type: &str, entry: &Value, skip_defaults: bool) -> Result<InventoryObject, Skip> {
    let name = find_field(entry, "ame").and_then(Value::as_str);
    let id = find_field(entry, "Id").and_then(Value::as_str);
    let (Some(name), Some(id)) = (name, id) else {
        return Err(Skip::Malformed);
    };
    if name.is_empty() || id.is_empty() {
        return Err(Skip::Malformed);
    }
    let name = normalize_name(name);

    if UNSUPPORTED_TYPES.contains(&backup_type) {
        return Err(Skip::UnsupportedType(backup_type.to_string()));
    }

    let kind = resource_type(backup_type, entry)
        .ok_or_else(|| Skip::UnknownType(backup_type.to_string()))?;

    match backup_type {
        "device_templates" if skip_defaults && is_default_template(&kind, &name) => {
            return Err(Skip::DefaultTemplate(name));
        }
        "feature_templates" => {
            let template_type = entry.get("templateType").and_then(Value::as_str);
            if is_vedge_device(device_types(entry), template_type) {
                return Err(Skip::Vedge(name));
            }
            if let Some(t) = template_type
                && UNSUPPORTED_FEATURES.contains(&t)
            {
                return Err(Skip::UnsupportedFeature(name, t.to_string()));
            }
        }
        _ => {}
    }

    Ok(InventoryObject {
        kind,
        name,
        id: id.to_string(),
    })
}

/// First field whose key ends with `suffix`, in document order.
///
/// Backups spell ids differently per type (`templateId`, `listId`,
/// `definitionId`, plain `id`); a bare `id` counts as `Id`.
fn find_field<'a>(entry: &'a Value, suffix: &str) -> Option<&'a Value> {
    entry
        .as_object()?
        .iter()
        .find(|(key, _)| {
            let key = if key.as_str() == "id" { "Id" } else { key.as_str() };
            key.ends_with(suffix)
        })
        .map(|(_, value)| value)
}

fn is_default_template(kind: &str, name: &str) -> bool {
    kind == "sdwan_cli_device_template"
        || DEFAULT_TEMPLATE_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
}

/// Device models listed on a backup entry.
fn device_types(entry: &Value) -> impl Iterator<Item = &str> {
    ["deviceType", "device_type"]
        .into_iter()
        .filter_map(move |key| entry.get(key))
        .flat_map(|value| match value {
            Value::String(s) => vec![s.as_str()],
            Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        })
}
