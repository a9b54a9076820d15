//! Opaque graph element identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque token naming a node or edge in the backing store.
///
/// The iterator tree never looks inside a value; it only compares values for
/// equality and hands them back as results. Storage backends pick whichever
/// representation suits their index, either a numeric id or a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric identifier, e.g. a quad-store row id.
    Id(u64),
    /// Textual identifier, e.g. an IRI or a node name.
    Name(String),
}

impl Value {
    /// Parse a command-line token: all-digit tokens become ids.
    pub fn parse(token: &str) -> Self {
        match token.parse::<u64>() {
            Ok(id) => Value::Id(id),
            Err(_) => Value::Name(token.to_string()),
        }
    }
}

impl From<u64> for Value {
    fn from(id: u64) -> Self {
        Value::Id(id)
    }
}

impl From<&str> for Value {
    fn from(name: &str) -> Self {
        Value::Name(name.to_string())
    }
}

impl From<String> for Value {
    fn from(name: String) -> Self {
        Value::Name(name)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Id(id) => write!(f, "{}", id),
            Value::Name(name) => write!(f, "{}", name),
        }
    }
}
