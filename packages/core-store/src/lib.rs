//! Statham core: JSON-like data in flat or nested form.
//!
//! The same data can be held two ways:
//! - nested: a tree of mappings, addressed with dot paths (`food.bacon.taste`)
//! - flat: a single mapping whose keys are those dot paths, taken literally
//!
//! This crate provides:
//! - `Value` / `Mapping`: the data model
//! - `KeyPath`: normalization of dotted keys and key sequences
//! - `flatten` / `expand`: conversion between the two forms
//! - `accessor`: get/set/delete at a key path in a nested mapping
//! - `StructuredStore`: a mapping plus its `Mode`, with fetch, put, remove,
//!   merge and search
//!
//! File loading and saving live in `statham-json-store`.
//!
//! # Example
//!
//! ```rust
//! use statham_core_store::{StructuredStore, Value};
//!
//! let mut store = StructuredStore::default();
//! store.put("food.bacon.taste", "good");
//!
//! assert_eq!(store.fetch("food.bacon.taste", &Value::Null), &Value::from("good"));
//! assert_eq!(store.search("oo")[0].key, "food.bacon.taste");
//! ```

pub mod accessor;
mod error;
mod expand;
mod flatten;
mod key_path;
mod merge;
mod mode;
mod search;
mod store;
mod value;

pub use error::Error;
pub use expand::expand;
pub use flatten::{flatten, flatten_into};
pub use key_path::{IntoKeyPath, KeyPath, SEPARATOR};
pub use merge::merge_into;
pub use mode::{Mode, MODE_FLAT, MODE_NESTED};
pub use search::{search_flat, SearchHit};
pub use store::StructuredStore;
pub use value::{Mapping, Value};
