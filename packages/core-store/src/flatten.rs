//! Nested mapping to dot-keyed flat mapping.

use crate::value::{Mapping, Value};

/// Flatten a nested mapping so every leaf is keyed by its dot-joined path.
///
/// Arrays and scalars are leaves and are copied as-is. Every nested mapping
/// is descended into, so an empty one contributes no keys and is lost when
/// the result is passed back through [`expand`](crate::expand).
///
/// ```rust
/// use statham_core_store::{flatten, Value};
/// use serde_json::json;
///
/// let nested = Value::from(json!({"food": {"bacon": {"taste": "good"}}}));
/// let flat = flatten(nested.as_map().unwrap());
/// assert_eq!(flat.get("food.bacon.taste"), Some(&Value::from("good")));
/// ```
pub fn flatten(source: &Mapping) -> Mapping {
    let mut target = Mapping::new();
    flatten_into(source, "", &mut target);
    target
}

/// Flatten `source` into an existing `target`, prefixing every key with
/// `base_path`.
///
/// `base_path` is prepended verbatim, so it should end with `.` when it is
/// not empty.
pub fn flatten_into(source: &Mapping, base_path: &str, target: &mut Mapping) {
    for (key, value) in source {
        match value {
            Value::Map(child) => {
                flatten_into(child, &format!("{}{}.", base_path, key), target);
            }
            _ => {
                target.insert(format!("{}{}", base_path, key), value.clone());
            }
        }
    }
}
