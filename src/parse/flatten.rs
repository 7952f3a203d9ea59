use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Default separator joining nested keys into flat paths
pub const DEFAULT_SEPARATOR: &str = ".";

/// Flatten a nested locale document into a map from dotted-path key to leaf
/// value.
///
/// Only JSON objects are recursed into; strings, numbers, booleans, nulls and
/// arrays are all leaves. An object value that is itself empty contributes no
/// entries. A non-object top level degrades to a single entry under the empty
/// path.
pub fn flatten_keys(value: &Value, separator: &str) -> BTreeMap<String, Value> {
    let mut flat = BTreeMap::new();
    flatten_into(value, String::new(), separator, &mut flat);
    flat
}

fn flatten_into(
    value: &Value,
    prefix: String,
    separator: &str,
    flat: &mut BTreeMap<String, Value>,
) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}{}{}", prefix, separator, key)
                };
                flatten_into(val, path, separator, flat);
            }
        }
        leaf => {
            flat.insert(prefix, leaf.clone());
        }
    }
}

/// Re-nest a flattened key map back into an object tree.
///
/// Inverse of [`flatten_keys`] for object documents: each path is split on
/// `separator` and rebuilt as nested objects with the leaf value at the end.
pub fn unflatten_keys(flat: &BTreeMap<String, Value>, separator: &str) -> Value {
    let mut root = Map::new();
    for (path, leaf) in flat {
        let segments: Vec<&str> = path.split(separator).collect();
        insert_segments(&mut root, &segments, leaf);
    }
    Value::Object(root)
}

fn insert_segments(map: &mut Map<String, Value>, segments: &[&str], leaf: &Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert((*last).to_string(), leaf.clone());
        }
        [head, rest @ ..] => {
            let child = map
                .entry((*head).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(child_map) = child {
                insert_segments(child_map, rest, leaf);
            }
        }
    }
}
