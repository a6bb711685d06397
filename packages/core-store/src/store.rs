//! The structured store: a mapping plus the mode that says how to read it.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path as FsPath, PathBuf};

use crate::key_path::{IntoKeyPath, KeyPath};
use crate::mode::Mode;
use crate::search::{search_flat, SearchHit};
use crate::value::{Mapping, Value};
use crate::{accessor, expand, flatten, merge};

/// A JSON-like mapping held in either flat or nested form.
///
/// In [`Mode::Nested`] keys are dot paths that traverse the tree. In
/// [`Mode::Flat`] every key is a literal top-level key, dots included.
///
/// # Example
///
/// ```rust
/// use statham_core_store::{Mode, StructuredStore, Value};
///
/// let mut store = StructuredStore::default();
/// store.put("food.bacon.taste", "good").put("fruit", "avocado");
///
/// assert_eq!(store.get("food.bacon.taste"), Some(&Value::from("good")));
///
/// let flat = StructuredStore::new(store.flatten().into_owned(), Mode::Flat);
/// assert_eq!(flat.get("food.bacon.taste"), Some(&Value::from("good")));
/// assert_eq!(flat.get("food.bacon"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StructuredStore {
    data: Mapping,
    mode: Mode,
    file_location: Option<PathBuf>,
}

impl StructuredStore {
    /// Wrap `data`, which must already be shaped for `mode`.
    pub fn new(data: Mapping, mode: Mode) -> Self {
        Self {
            data,
            mode,
            file_location: None,
        }
    }

    /// Remember the file this store's data belongs to.
    #[must_use]
    pub fn with_file_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.file_location = Some(location.into());
        self
    }

    pub fn set_file_location(&mut self, location: Option<PathBuf>) -> &mut Self {
        self.file_location = location;
        self
    }

    pub fn file_location(&self) -> Option<&FsPath> {
        self.file_location.as_deref()
    }

    pub fn data(&self) -> &Mapping {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Mapping {
        &mut self.data
    }

    pub fn into_data(self) -> Mapping {
        self.data
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Change the mode. The data is not converted.
    pub fn set_mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = mode;
        self
    }

    pub fn is_flat(&self) -> bool {
        self.mode == Mode::Flat
    }

    pub fn is_nested(&self) -> bool {
        self.mode == Mode::Nested
    }

    /// Look up the value at `key`.
    ///
    /// Flat stores only match the literal key; nested stores traverse it.
    pub fn get(&self, key: impl IntoKeyPath) -> Option<&Value> {
        let path = KeyPath::normalize(key);
        match self.mode {
            Mode::Flat => self.data.get(&path.to_flat_key()),
            Mode::Nested if path.is_single_segment() => self.data.get(&path[0]),
            Mode::Nested => accessor::get(&self.data, &path),
        }
    }

    /// Look up the value at `key`, falling back to `default` on a miss.
    pub fn fetch<'a>(&'a self, key: impl IntoKeyPath, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Set `value` at `key`.
    ///
    /// Nested stores create missing intermediate maps. If an intermediate key
    /// holds a non-map value the assignment is skipped.
    pub fn put(&mut self, key: impl IntoKeyPath, value: impl Into<Value>) -> &mut Self {
        let path = KeyPath::normalize(key);
        let value = value.into();
        match self.mode {
            Mode::Flat => {
                self.data.insert(path.to_flat_key(), value);
            }
            Mode::Nested if path.is_single_segment() => {
                self.data.insert(path[0].clone(), value);
            }
            Mode::Nested => {
                accessor::set(&mut self.data, &path, value);
            }
        }
        self
    }

    /// Remove the value at `key`. Missing keys are ignored.
    pub fn remove(&mut self, key: impl IntoKeyPath) -> &mut Self {
        let path = KeyPath::normalize(key);
        match self.mode {
            Mode::Flat => {
                self.data.remove(&path.to_flat_key());
            }
            Mode::Nested if path.is_single_segment() => {
                self.data.remove(&path[0]);
            }
            Mode::Nested => {
                accessor::delete(&mut self.data, &path);
            }
        }
        self
    }

    /// The data in nested form. Borrowed when the store is already nested.
    pub fn expand(&self) -> Cow<'_, Mapping> {
        match self.mode {
            Mode::Nested => Cow::Borrowed(&self.data),
            Mode::Flat => Cow::Owned(expand::expand(&self.data)),
        }
    }

    /// The data in flat form. Borrowed when the store is already flat.
    pub fn flatten(&self) -> Cow<'_, Mapping> {
        match self.mode {
            Mode::Flat => Cow::Borrowed(&self.data),
            Mode::Nested => Cow::Owned(flatten::flatten(&self.data)),
        }
    }

    /// Deep-merge `sources` into the data, left to right.
    ///
    /// Each source is first reshaped for this store's mode. Later sources
    /// win over earlier ones, and all of them win over the existing data.
    /// `None` and empty sources are skipped.
    ///
    /// ```rust
    /// use statham_core_store::{StructuredStore, Value};
    /// use serde_json::json;
    ///
    /// let a = Value::from(json!({"a": 2})).into_map().unwrap();
    /// let b = Value::from(json!({"a": 3})).into_map().unwrap();
    ///
    /// let mut store = StructuredStore::default();
    /// store.put("a", 1).merge([Some(&a), None, Some(&b)]);
    /// assert_eq!(store.get("a"), Some(&Value::from(3)));
    /// ```
    pub fn merge<'m, I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'m Mapping>>,
    {
        for source in sources {
            let source: Option<&Mapping> = source.into();
            let Some(source) = source.filter(|source| !source.is_empty()) else {
                continue;
            };
            log::trace!("Merging {} keys into {} store.", source.len(), self.mode);
            let reshaped = match self.mode {
                Mode::Flat => flatten::flatten(source),
                Mode::Nested => expand::expand(source),
            };
            merge::merge_into(&mut self.data, &reshaped);
        }
        self
    }

    /// Every flattened entry whose value contains `phrase`.
    ///
    /// Keys in the hits are always dot-joined flat keys.
    pub fn search(&self, phrase: impl fmt::Display) -> Vec<SearchHit> {
        search_flat(&self.flatten(), phrase)
    }
}
