//! Attribute value tree.
//!
//! State attributes are untyped JSON. They are converted once, at load time,
//! into a closed enum so every consumer dispatches exhaustively instead of
//! probing JSON types at runtime.

use serde::Deserialize;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// One raw attribute value as stored in the snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<AttrValue>),
    Structure(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Scalars render on a single line; lists and structures may not.
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Structure(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Structure(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
