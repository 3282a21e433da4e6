use indexmap::IndexMap;
use serde_yaml::Value as Yaml;

use crate::error::{ConfigError, Result};
use crate::format::FormatParser;
use crate::props::{Properties, Value};

/// YAML decoder.
///
/// The document root must be a mapping (an empty document decodes to an
/// empty layer). Scalars are rendered to strings; mapping keys must be
/// scalars.
pub struct YamlFormat;

impl FormatParser for YamlFormat {
    fn parse(&self, input: &str) -> Result<Properties> {
        let doc: Yaml =
            serde_yaml::from_str(input).map_err(|e| ConfigError::parse("yaml", e.to_string()))?;
        match doc {
            Yaml::Null => Ok(Properties::new()),
            Yaml::Mapping(map) => Ok(Properties::from_root(to_object(map)?)),
            _ => Err(ConfigError::parse("yaml", "root must be a mapping")),
        }
    }
}

fn to_object(map: serde_yaml::Mapping) -> Result<IndexMap<String, Value>> {
    let mut object = IndexMap::with_capacity(map.len());
    for (key, value) in map {
        object.insert(scalar_key(key)?, to_value(value)?);
    }
    Ok(object)
}

fn scalar_key(key: Yaml) -> Result<String> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        _ => Err(ConfigError::parse("yaml", "mapping keys must be scalars")),
    }
}

fn to_value(node: Yaml) -> Result<Value> {
    match node {
        Yaml::Null => Ok(Value::String(String::new())),
        Yaml::Bool(b) => Ok(Value::String(b.to_string())),
        Yaml::Number(n) => Ok(Value::String(n.to_string())),
        Yaml::String(s) => Ok(Value::String(s)),
        Yaml::Sequence(seq) => Ok(Value::Array(
            seq.into_iter().map(to_value).collect::<Result<_>>()?,
        )),
        Yaml::Mapping(map) => Ok(Value::Object(to_object(map)?)),
        Yaml::Tagged(tagged) => to_value(tagged.value),
    }
}
