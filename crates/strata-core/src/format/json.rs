use indexmap::IndexMap;
use serde_json::Value as Json;

use crate::error::{ConfigError, Result};
use crate::format::FormatParser;
use crate::props::{Properties, Value};

/// JSON decoder.
///
/// The document root must be an object (`null` decodes to an empty
/// layer). Scalars are rendered to strings.
pub struct JsonFormat;

impl FormatParser for JsonFormat {
    fn parse(&self, input: &str) -> Result<Properties> {
        let doc: Json =
            serde_json::from_str(input).map_err(|e| ConfigError::parse("json", e.to_string()))?;
        match doc {
            Json::Null => Ok(Properties::new()),
            Json::Object(map) => Ok(Properties::from_root(to_object(map)?)),
            _ => Err(ConfigError::parse("json", "root must be an object")),
        }
    }
}

fn to_object(map: serde_json::Map<String, Json>) -> Result<IndexMap<String, Value>> {
    let mut object = IndexMap::with_capacity(map.len());
    for (key, value) in map {
        object.insert(key, to_value(value)?);
    }
    Ok(object)
}

fn to_value(node: Json) -> Result<Value> {
    match node {
        Json::Null => Ok(Value::String(String::new())),
        Json::Bool(b) => Ok(Value::String(b.to_string())),
        Json::Number(n) => Ok(Value::String(n.to_string())),
        Json::String(s) => Ok(Value::String(s)),
        Json::Array(items) => Ok(Value::Array(
            items.into_iter().map(to_value).collect::<Result<_>>()?,
        )),
        Json::Object(map) => Ok(Value::Object(to_object(map)?)),
    }
}
