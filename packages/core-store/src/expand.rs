//! Dot-keyed flat mapping to nested mapping.

use crate::key_path::SEPARATOR;
use crate::value::{Mapping, Value};

/// Expand a flat mapping whose keys are dot-joined paths into a nested one.
///
/// Keys without a `.` are copied directly. For dotted keys every segment but
/// the last is a directory level: existing mappings are reused and missing
/// ones are created.
///
/// When two keys disagree about structure (`a` is a scalar and `a.b` is also
/// present) the key visited later wins, and the scalar is replaced by a
/// mapping. Keys are visited in sorted order.
///
/// `expand(&flatten(x)) == x` holds for any `x` whose keys contain no `.`
/// and which holds no empty nested mapping. A dot inside a key name is
/// indistinguishable from a path separator, and an empty mapping leaves no
/// key behind when flattened.
pub fn expand(source: &Mapping) -> Mapping {
    let mut destination = Mapping::new();

    for (flat_key, value) in source {
        if !flat_key.contains(SEPARATOR) {
            destination.insert(flat_key.clone(), value.clone());
            continue;
        }

        let mut keys: Vec<&str> = flat_key.split(SEPARATOR).collect();
        let Some(key) = keys.pop() else {
            continue;
        };
        insert_at(&mut destination, &keys, key, value.clone());
    }

    destination
}

/// Walk `directories` below `target`, creating a mapping for each missing or
/// non-mapping level, and store `value` under `key` at the bottom.
fn insert_at(target: &mut Mapping, directories: &[&str], key: &str, value: Value) {
    let Some((directory, rest)) = directories.split_first() else {
        target.insert(key.to_string(), value);
        return;
    };

    match target.entry(directory.to_string()).or_insert_with(Value::map) {
        Value::Map(child) => insert_at(child, rest, key, value),
        other => {
            let mut child = Mapping::new();
            insert_at(&mut child, rest, key, value);
            *other = Value::Map(child);
        }
    }
}
