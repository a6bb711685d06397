//! Recursive merging of mappings.

use crate::value::{Mapping, Value};

/// Deep-merge `source` into `target`.
///
/// Where both sides hold a map under the same key the maps are merged
/// recursively. Anything else in `source` (scalars, `Null`, arrays) replaces
/// what `target` had.
pub fn merge_into(target: &mut Mapping, source: &Mapping) {
    for (key, incoming) in source {
        if let (Some(Value::Map(existing)), Value::Map(child)) = (target.get_mut(key), incoming) {
            merge_into(existing, child);
            continue;
        }
        target.insert(key.clone(), incoming.clone());
    }
}
