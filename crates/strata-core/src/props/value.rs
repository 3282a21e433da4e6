use indexmap::IndexMap;
use serde::Serialize;

/// A node of the property tree.
///
/// Configuration values are untyped at this layer: every scalar is held as
/// a string, exactly as it will appear in the flattened property set.
/// Decoders render numbers, booleans and nulls into their string forms at
/// ingestion. `IndexMap` preserves key order, which keeps serialized output
/// predictable.
///
/// # Example
///
/// ```
/// use strata_core::Value;
///
/// let val: Value = "0.0.0.0:8080".into();
/// assert_eq!(val.as_str(), Some("0.0.0.0:8080"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Scalar leaf value.
    String(String),
    /// Sequence of values.
    Array(Vec<Value>),
    /// Map of values.
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Returns the value as a str if it is a scalar leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an array slice if it matches.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Returns the value as an object if it matches.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns true if this node is a container (array or object).
    pub fn is_container(&self) -> bool {
        !matches!(self, Value::String(_))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}
