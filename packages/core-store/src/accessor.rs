//! Get, set and delete values at a key path inside a nested mapping.
//!
//! Traversal only descends through `Value::Map`. A path that runs into a
//! missing key or a non-map value simply does not exist: reads return `None`
//! and deletes do nothing. None of these are errors.

use crate::key_path::KeyPath;
use crate::value::{Mapping, Value};

/// Get a reference to the value at `path`.
///
/// Returns `None` if any segment is missing or an intermediate value is not
/// a map.
pub fn get<'a>(root: &'a Mapping, path: &KeyPath) -> Option<&'a Value> {
    let (last, parents) = path.split_last()?;
    if parents.is_empty() {
        return root.get(last);
    }

    let mut cursor = root;
    for segment in parents {
        cursor = cursor.get(segment)?.as_map()?;
    }
    cursor.get(last)
}

/// Set `value` at `path`, creating empty maps for missing intermediate keys.
///
/// If an intermediate key already holds something other than a map, nothing
/// is assigned and `false` is returned; the existing value is left in place.
pub fn set(root: &mut Mapping, path: &KeyPath, value: Value) -> bool {
    let Some((last, parents)) = path.split_last() else {
        return false;
    };
    if parents.is_empty() {
        root.insert(last.clone(), value);
        return true;
    }

    let mut cursor = root;
    for segment in parents {
        let entry = cursor.entry(segment.clone()).or_insert_with(Value::map);
        cursor = match entry {
            Value::Map(map) => map,
            _ => {
                log::debug!(
                    "Not setting {}: segment ({}) holds a non-map value.",
                    path,
                    segment
                );
                return false;
            }
        };
    }

    cursor.insert(last.clone(), value);
    true
}

/// Remove the value at `path`, returning it if it existed.
///
/// Nothing is created while walking; an unresolvable path is a no-op.
pub fn delete(root: &mut Mapping, path: &KeyPath) -> Option<Value> {
    let (last, parents) = path.split_last()?;

    let mut cursor = root;
    for segment in parents {
        cursor = cursor.get_mut(segment)?.as_map_mut()?;
    }
    cursor.remove(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_path;
    use serde_json::json;

    fn test_tree() -> Mapping {
        Value::from(json!({
            "name": "Alice",
            "address": {"city": "NYC", "geo": {"lat": 40.7}},
            "scores": [90, 85, 95]
        }))
        .into_map()
        .unwrap()
    }

    fn path(key: &str) -> KeyPath {
        KeyPath::normalize(key)
    }

    // ==================== get tests ====================

    #[test]
    fn get_top_level() {
        let tree = test_tree();
        assert_eq!(get(&tree, &path("name")), Some(&Value::from("Alice")));
    }

    #[test]
    fn get_nested() {
        let tree = test_tree();
        assert_eq!(get(&tree, &path("address.geo.lat")), Some(&Value::from(40.7)));
    }

    #[test]
    fn get_returns_subtree() {
        let tree = test_tree();
        let geo = get(&tree, &path("address.geo")).unwrap();
        assert!(geo.is_map());
    }

    #[test]
    fn get_missing_intermediate() {
        let tree = test_tree();
        assert_eq!(get(&tree, &path("nope.city")), None);
    }

    #[test]
    fn get_through_scalar_or_array() {
        let tree = test_tree();
        assert_eq!(get(&tree, &path("name.first")), None);
        assert_eq!(get(&tree, &path("scores.0")), None);
    }

    #[test]
    fn get_empty_path() {
        let tree = test_tree();
        assert_eq!(get(&tree, &key_path!()), None);
    }

    // ==================== set tests ====================

    #[test]
    fn set_creates_intermediate_maps() {
        let mut tree = Mapping::new();
        assert!(set(&mut tree, &path("a.b.c"), Value::from("x")));
        assert_eq!(Value::Map(tree), Value::from(json!({"a": {"b": {"c": "x"}}})));
    }

    #[test]
    fn set_overwrites_leaf() {
        let mut tree = test_tree();
        assert!(set(&mut tree, &path("address.city"), Value::from("LA")));
        assert_eq!(get(&tree, &path("address.city")), Some(&Value::from("LA")));
        assert_eq!(get(&tree, &path("address.geo.lat")), Some(&Value::from(40.7)));
    }

    #[test]
    fn set_through_scalar_is_a_no_op() {
        let mut tree = test_tree();
        let before = tree.clone();
        assert!(!set(&mut tree, &path("name.first"), Value::from("A")));
        assert!(!set(&mut tree, &path("scores.first"), Value::from(1)));
        assert_eq!(tree, before);
    }

    #[test]
    fn set_single_segment_keeps_dots_out_of_play() {
        let mut tree = Mapping::new();
        set(&mut tree, &path("top"), Value::from(1));
        assert_eq!(tree.get("top"), Some(&Value::from(1)));
    }

    // ==================== delete tests ====================

    #[test]
    fn delete_nested() {
        let mut tree = test_tree();
        assert_eq!(delete(&mut tree, &path("address.city")), Some(Value::from("NYC")));
        assert_eq!(get(&tree, &path("address.city")), None);
        assert!(get(&tree, &path("address")).is_some());
    }

    #[test]
    fn delete_missing_is_a_no_op() {
        let mut tree = test_tree();
        let before = tree.clone();
        assert_eq!(delete(&mut tree, &path("x.y.z")), None);
        assert_eq!(delete(&mut tree, &path("name.first")), None);
        assert_eq!(tree, before);
    }

    #[test]
    fn delete_top_level() {
        let mut tree = test_tree();
        assert!(delete(&mut tree, &path("scores")).is_some());
        assert!(!tree.contains_key("scores"));
    }
}
