//! Substring search over flattened values.

use std::fmt;

use crate::value::{Mapping, Value};

/// A key/value pair whose value matched a search phrase.
///
/// `key` is always the dot-joined flat key, whatever the store's mode.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit {
    pub key: String,
    pub value: Value,
}

/// Find every entry of an already-flat mapping whose value contains `phrase`.
///
/// Matching is case-sensitive and works on [`Value::search_text`], so an
/// array matches as a whole and is returned whole.
pub fn search_flat(flat: &Mapping, phrase: impl fmt::Display) -> Vec<SearchHit> {
    let phrase = phrase.to_string();
    flat.iter()
        .filter(|(_, value)| value.search_text().contains(phrase.as_str()))
        .map(|(key, value)| SearchHit {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}
