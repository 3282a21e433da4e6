use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::error::{ConfigError, Result};
use crate::props::path::{self, Segment};
use crate::props::value::Value;

/// A property store addressed by dotted paths.
///
/// `Properties` holds one tree of [`Value`] nodes and exposes the flat
/// view of it: [`Properties::set`] writes a scalar at a dotted path,
/// creating intermediate containers, [`Properties::get`] reads one back,
/// and [`Properties::data`] flattens every leaf into a
/// `path -> scalar` mapping.
///
/// The structural invariant of the whole engine lives here: a path is
/// never simultaneously a leaf and an ancestor. `set` is the single
/// point of enforcement: writing a scalar where a container exists
/// (or descending through an existing scalar) fails with
/// `property conflict at path <path>`, naming the full incoming path.
/// Writing a scalar over an existing scalar is an overwrite, which is
/// what gives later layers priority at identical paths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Properties {
    root: IndexMap<String, Value>,
}

impl Properties {
    /// Creates an empty property store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from an already-built tree.
    pub fn from_root(root: IndexMap<String, Value>) -> Self {
        Self { root }
    }

    /// Creates a store by setting each `(path, value)` pair in order.
    ///
    /// # Example
    ///
    /// ```
    /// use strata_core::Properties;
    ///
    /// let p = Properties::from_pairs([("spring.profiles.active", "dev,test")]).unwrap();
    /// assert_eq!(p.get("spring.profiles.active"), Some("dev,test"));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut props = Self::new();
        for (path, value) in pairs {
            props.set(path.as_ref(), value)?;
        }
        Ok(props)
    }

    /// Returns true if the store holds no properties.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns a reference to the root tree.
    pub fn root(&self) -> &IndexMap<String, Value> {
        &self.root
    }

    /// Writes a scalar value at a dotted path.
    ///
    /// Intermediate containers are created on demand; sequence segments
    /// may extend an array by exactly one element (`[len]`). Fails with
    /// a conflict when the path crosses an existing leaf or changes the
    /// structural role of an existing node.
    pub fn set(&mut self, path: &str, value: impl Into<String>) -> Result<()> {
        let segments = path::parse(path)?;
        let value = value.into();

        // parse() guarantees the path starts with a field name.
        let mut container = Value::Object(std::mem::take(&mut self.root));
        let result = set_value(&mut container, &segments, path, value);
        let Value::Object(root) = container else {
            unreachable!("root container is always an object");
        };
        self.root = root;
        result
    }

    /// Reads the scalar at a dotted path.
    ///
    /// Returns `None` when the path is absent or names a container.
    pub fn get(&self, path: &str) -> Option<&str> {
        let segments = path::parse(path).ok()?;
        let Segment::Key(first) = &segments[0] else {
            return None;
        };
        let mut node = self.root.get(first)?;
        for segment in &segments[1..] {
            node = match (node, segment) {
                (Value::Object(map), Segment::Key(key)) => map.get(key)?,
                (Value::Array(items), Segment::Index(i)) => items.get(*i)?,
                _ => return None,
            };
        }
        node.as_str()
    }

    /// Flattens every leaf into a `path -> scalar` mapping.
    ///
    /// Paths are fully qualified dotted paths with `[n]` index segments.
    /// The `BTreeMap` gives a deterministic (sorted) iteration order,
    /// which the merge engine relies on for stable conflict reporting.
    pub fn data(&self) -> BTreeMap<String, String> {
        let mut flat = BTreeMap::new();
        for (key, value) in &self.root {
            flatten(key, value, &mut flat);
        }
        flat
    }

    /// Serializes the property tree to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root)
            .map_err(|e| ConfigError::parse("json_target", e.to_string()))
    }
}

fn flatten(prefix: &str, value: &Value, target: &mut BTreeMap<String, String>) {
    match value {
        Value::String(s) => {
            target.insert(prefix.to_string(), s.clone());
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten(&format!("{prefix}[{i}]"), item, target);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten(&format!("{prefix}.{key}"), item, target);
            }
        }
    }
}

/// Creates the empty container matching the next path segment.
fn empty_container(next: &Segment) -> Value {
    match next {
        Segment::Key(_) => Value::Object(IndexMap::new()),
        Segment::Index(_) => Value::Array(Vec::new()),
    }
}

fn set_value(container: &mut Value, segments: &[Segment], full: &str, value: String) -> Result<()> {
    match (&mut *container, &segments[0]) {
        (Value::Object(map), Segment::Key(key)) => {
            if segments.len() == 1 {
                return match map.get(key) {
                    None | Some(Value::String(_)) => {
                        map.insert(key.clone(), Value::String(value));
                        Ok(())
                    }
                    Some(_) => Err(ConfigError::conflict(full)),
                };
            }
            let slot = map
                .entry(key.clone())
                .or_insert_with(|| empty_container(&segments[1]));
            set_value(slot, &segments[1..], full, value)
        }
        (Value::Array(items), Segment::Index(i)) => {
            let i = *i;
            if i > items.len() {
                return Err(ConfigError::invalid_path(full, "index out of range"));
            }
            if segments.len() == 1 {
                if i == items.len() {
                    items.push(Value::String(value));
                    return Ok(());
                }
                return if matches!(items[i], Value::String(_)) {
                    items[i] = Value::String(value);
                    Ok(())
                } else {
                    Err(ConfigError::conflict(full))
                };
            }
            if i == items.len() {
                items.push(empty_container(&segments[1]));
            }
            set_value(&mut items[i], &segments[1..], full, value)
        }
        // Crossing a leaf, or asking an existing container to change kind.
        _ => Err(ConfigError::conflict(full)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_nested() {
        let mut props = Properties::new();
        props.set("spring.app.name", "demo").unwrap();
        props.set("http.server.addr", "0.0.0.0:8080").unwrap();

        assert_eq!(props.get("spring.app.name"), Some("demo"));
        assert_eq!(props.get("http.server.addr"), Some("0.0.0.0:8080"));
        assert_eq!(props.get("spring.app"), None); // container, not a leaf
        assert_eq!(props.get("missing"), None);
    }

    #[test]
    fn set_overwrites_scalar_at_same_path() {
        let mut props = Properties::new();
        props.set("spring.app.name", "one").unwrap();
        props.set("spring.app.name", "two").unwrap();
        assert_eq!(props.get("spring.app.name"), Some("two"));
    }

    #[test]
    fn set_array_elements() {
        let mut props = Properties::new();
        props.set("http.server[0].addr", "0.0.0.0:8080").unwrap();
        props.set("http.server[1].addr", "0.0.0.0:8081").unwrap();

        assert_eq!(props.get("http.server[0].addr"), Some("0.0.0.0:8080"));
        assert_eq!(props.get("http.server[1].addr"), Some("0.0.0.0:8081"));
    }

    #[test]
    fn set_rejects_leaf_becoming_container() {
        let mut props = Properties::new();
        props.set("a", "a").unwrap();
        let err = props.set("a.b", "a.b").unwrap_err();
        assert_eq!(err.to_string(), "property conflict at path a.b");
    }

    #[test]
    fn set_rejects_container_becoming_leaf() {
        let mut props = Properties::new();
        props.set("a.b", "a.b").unwrap();
        let err = props.set("a", "a").unwrap_err();
        assert_eq!(err.to_string(), "property conflict at path a");
    }

    #[test]
    fn set_rejects_object_addressed_as_array() {
        let mut props = Properties::new();
        props.set("http.server.addr", "0.0.0.0:8080").unwrap();
        let err = props.set("http.server[0].addr", "x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "property conflict at path http.server[0].addr"
        );
    }

    #[test]
    fn set_rejects_array_addressed_as_object() {
        let mut props = Properties::new();
        props.set("http.server[0].addr", "0.0.0.0:8080").unwrap();
        let err = props.set("http.server.addr", "x").unwrap_err();
        assert_eq!(err.to_string(), "property conflict at path http.server.addr");
    }

    #[test]
    fn set_rejects_sparse_array_index() {
        let mut props = Properties::new();
        props.set("list[0]", "a").unwrap();
        assert!(props.set("list[2]", "c").is_err());
    }

    #[test]
    fn data_flattens_leaves() {
        let mut props = Properties::new();
        props.set("spring.app.name", "demo").unwrap();
        props.set("http.server[0].addr", "0.0.0.0:8080").unwrap();
        props.set("http.server[1].addr", "0.0.0.0:8081").unwrap();

        let data = props.data();
        assert_eq!(data.len(), 3);
        assert_eq!(data["spring.app.name"], "demo");
        assert_eq!(data["http.server[0].addr"], "0.0.0.0:8080");
        assert_eq!(data["http.server[1].addr"], "0.0.0.0:8081");
    }

    #[test]
    fn from_pairs_builds_store() {
        let props = Properties::from_pairs([("a.b", "1"), ("a.c", "2")]).unwrap();
        assert_eq!(props.data().len(), 2);
        assert!(Properties::from_pairs([("a", "1"), ("a.b", "2")]).is_err());
    }

    #[test]
    fn to_json_renders_tree() {
        let mut props = Properties::new();
        props.set("server.port", "8080").unwrap();
        assert_eq!(props.root().len(), 1);

        let json = props.to_json().unwrap();
        assert!(json.contains("\"server\""));
        assert!(json.contains("\"8080\""));
    }
}
