//! Map-shaped inputs accepted by the sort engine
//!
//! A [`SourceMap`] lends out its entries for the duration of one sort call.
//! Dynamic inputs (JSON documents, bare [`Value`]s) may turn out not to be
//! maps at all, which is reported as [`MapSortError::NotAMap`].

use crate::errors::{MapSortError, Result};
use crate::model::{Field, Value};
use std::collections::{BTreeMap, HashMap};

/// An associative collection the engine can read entries from
pub trait SourceMap {
    type Key: Field + Clone;
    type Value: Field;

    /// Borrow every entry, in no particular order
    ///
    /// # Errors
    /// * `NotAMap` - If the input is not an associative collection
    fn entries(&self) -> Result<Vec<(&Self::Key, &Self::Value)>>;
}

impl<M: SourceMap + ?Sized> SourceMap for &M {
    type Key = M::Key;
    type Value = M::Value;

    fn entries(&self) -> Result<Vec<(&Self::Key, &Self::Value)>> {
        (**self).entries()
    }
}

impl<K: Field + Clone, V: Field, S> SourceMap for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> Result<Vec<(&K, &V)>> {
        Ok(self.iter().collect())
    }
}

impl<K: Field + Clone, V: Field> SourceMap for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> Result<Vec<(&K, &V)>> {
        Ok(self.iter().collect())
    }
}

/// Association list; keys are expected to be distinct
impl<K: Field + Clone, V: Field> SourceMap for [(K, V)] {
    type Key = K;
    type Value = V;

    fn entries(&self) -> Result<Vec<(&K, &V)>> {
        Ok(self.iter().map(|(k, v)| (k, v)).collect())
    }
}

impl<K: Field + Clone, V: Field> SourceMap for Vec<(K, V)> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> Result<Vec<(&K, &V)>> {
        self.as_slice().entries()
    }
}

impl SourceMap for serde_json::Value {
    type Key = String;
    type Value = serde_json::Value;

    fn entries(&self) -> Result<Vec<(&String, &serde_json::Value)>> {
        match self {
            serde_json::Value::Object(object) => Ok(object.iter().collect()),
            other => Err(MapSortError::NotAMap {
                found: json_kind(other).to_string(),
            }),
        }
    }
}

/// A bare scalar is never a map
impl SourceMap for Value {
    type Key = Value;
    type Value = Value;

    fn entries(&self) -> Result<Vec<(&Value, &Value)>> {
        Err(MapSortError::NotAMap {
            found: self.kind_name().to_string(),
        })
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hash_map_entries() {
        let map: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let mut entries = map.entries().unwrap();
        entries.sort_by_key(|(k, _)| **k);
        assert_eq!(entries, vec![(&"a", &1), (&"b", &2)]);
    }

    #[test]
    fn test_json_object_is_map() {
        let doc = json!({"x": 1, "y": "two"});
        assert_eq!(doc.entries().unwrap().len(), 2);
    }

    #[test]
    fn test_json_scalar_is_not_map() {
        let err = json!([1, 2]).entries().unwrap_err();
        assert_eq!(
            err,
            MapSortError::NotAMap {
                found: "array".to_string()
            }
        );
    }

    #[test]
    fn test_value_scalar_is_not_map() {
        let err = Value::Int(1).entries().unwrap_err();
        assert!(matches!(err, MapSortError::NotAMap { found } if found == "integer"));
    }
}
