//! Terraform state snapshot model.
//!
//! Only the parts of `terraform.tfstate` the decompiler reads are modelled;
//! everything else in the file (version, lineage, provider, schema_version ...)
//! is ignored during deserialization.
//!
//! ```json
//! {"resources": [{"type": "...", "name": "...", "instances": [{"attributes": {...}}]}]}
//! ```

mod error;
mod value;

pub use error::StateError;
pub use value::AttrValue;

use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};

/// A whole state snapshot, loaded into memory at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub resources: Vec<ResourceRecord>,
}

/// One managed object and its instance(s).
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub instances: Vec<Instance>,
}

/// Attribute bag of one resource instance.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Instance {
    #[serde(default)]
    pub attributes: BTreeMap<String, AttrValue>,
}

impl Snapshot {
    /// Read and decode a snapshot file.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        let content = fs::read_to_string(path).map_err(|source| StateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| StateError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

impl ResourceRecord {
    /// Build a single-instance record.
    #[cfg(test)]
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        attributes: BTreeMap<String, AttrValue>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            instances: vec![Instance { attributes }],
        }
    }

    /// The single instance of this record.
    ///
    /// `Ok(None)` for a record without instances; more than one instance is fatal.
    pub fn instance(&self) -> Result<Option<&Instance>, StateError> {
        match self.instances.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(only)),
            many => Err(StateError::MultipleInstances {
                resource: self.address(),
                count: many.len(),
            }),
        }
    }

    /// `<type>.<name>` as written in the snapshot.
    pub fn address(&self) -> String {
        format!("{}.{}", self.kind, self.name)
    }
}

impl Instance {
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// String attribute, `None` when absent, null or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }
}

// ============================================================================
// tests
// ============================================================================
