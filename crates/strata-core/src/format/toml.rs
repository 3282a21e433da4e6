use indexmap::IndexMap;

use crate::error::{ConfigError, Result};
use crate::format::FormatParser;
use crate::props::{Properties, Value};

/// TOML decoder.
///
/// TOML documents are tables at the root by construction. Scalars
/// (including datetimes) are rendered to strings.
pub struct TomlFormat;

impl FormatParser for TomlFormat {
    fn parse(&self, input: &str) -> Result<Properties> {
        let table: ::toml::Table =
            ::toml::from_str(input).map_err(|e| ConfigError::parse("toml", e.to_string()))?;
        Ok(Properties::from_root(to_object(table)?))
    }
}

fn to_object(table: ::toml::Table) -> Result<IndexMap<String, Value>> {
    let mut object = IndexMap::with_capacity(table.len());
    for (key, value) in table {
        object.insert(key, to_value(value)?);
    }
    Ok(object)
}

fn to_value(node: ::toml::Value) -> Result<Value> {
    use ::toml::Value as Toml;
    match node {
        Toml::String(s) => Ok(Value::String(s)),
        Toml::Integer(i) => Ok(Value::String(i.to_string())),
        Toml::Float(f) => Ok(Value::String(f.to_string())),
        Toml::Boolean(b) => Ok(Value::String(b.to_string())),
        Toml::Datetime(dt) => Ok(Value::String(dt.to_string())),
        Toml::Array(items) => Ok(Value::Array(
            items.into_iter().map(to_value).collect::<Result<_>>()?,
        )),
        Toml::Table(table) => Ok(Value::Object(to_object(table)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[server]
port = 8080
host = "localhost"

[app]
name = "myapp"
debug = true
"#;
        let props = TomlFormat.parse(toml).unwrap();
        assert_eq!(props.get("server.port"), Some("8080"));
        assert_eq!(props.get("server.host"), Some("localhost"));
        assert_eq!(props.get("app.name"), Some("myapp"));
        assert_eq!(props.get("app.debug"), Some("true"));
    }

    #[test]
    fn test_parse_array_of_tables() {
        let toml = r#"
[[http.server]]
addr = "0.0.0.0:8080"

[[http.server]]
addr = "0.0.0.0:8081"
"#;
        let props = TomlFormat.parse(toml).unwrap();
        assert_eq!(props.get("http.server[0].addr"), Some("0.0.0.0:8080"));
        assert_eq!(props.get("http.server[1].addr"), Some("0.0.0.0:8081"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(TomlFormat.parse("key = ").is_err());
    }
}
