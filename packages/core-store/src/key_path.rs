//! Dot-delimited key paths.

use std::fmt;

/// The segment separator used by dotted keys.
pub const SEPARATOR: char = '.';

/// A normalized key path: an ordered list of segments.
///
/// A `KeyPath` can only be built by normalizing key specifications, so it
/// never holds a segment containing `.`.
///
/// # Normalization
///
/// - A string is split on `.`. `""` yields `[""]` and `"."` yields `["", ""]`.
/// - A sequence is normalized element by element, recursively.
/// - Several specifications are concatenated left to right.
///
/// ```rust
/// use statham_core_store::{key_path, KeyPath};
///
/// let dotted = KeyPath::normalize("a.b.c");
/// assert_eq!(dotted, KeyPath::normalize(["a", "b", "c"]));
/// assert_eq!(dotted, key_path!("a.b", "c"));
/// assert_eq!(dotted, key_path!(vec!["a"], "b.c"));
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// An empty path, the starting point for [`key_path!`](crate::key_path).
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a single key specification.
    pub fn normalize(spec: impl IntoKeyPath) -> Self {
        let mut path = Self::new();
        path.push(spec);
        path
    }

    /// Normalize `spec` and append its segments.
    pub fn push(&mut self, spec: impl IntoKeyPath) {
        spec.append_to(&mut self.segments);
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when the path addresses a top-level key directly.
    pub fn is_single_segment(&self) -> bool {
        self.segments.len() == 1
    }

    /// Split into the directory segments and the final segment.
    pub fn split_last(&self) -> Option<(&String, &[String])> {
        self.segments.split_last()
    }

    /// The literal key this path denotes in a flat mapping.
    pub fn to_flat_key(&self) -> String {
        self.segments.join(".")
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.segments.iter()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_flat_key())
    }
}

impl std::ops::Index<usize> for KeyPath {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.segments[i]
    }
}

/// A key specification that can be normalized into path segments.
pub trait IntoKeyPath {
    /// Append this specification's normalized segments to `segments`.
    fn append_to(self, segments: &mut Vec<String>);
}

impl IntoKeyPath for &str {
    fn append_to(self, segments: &mut Vec<String>) {
        segments.extend(self.split(SEPARATOR).map(str::to_string));
    }
}

impl IntoKeyPath for String {
    fn append_to(self, segments: &mut Vec<String>) {
        self.as_str().append_to(segments);
    }
}

impl IntoKeyPath for &String {
    fn append_to(self, segments: &mut Vec<String>) {
        self.as_str().append_to(segments);
    }
}

impl<'a, 'b, T: ?Sized> IntoKeyPath for &'b &'a T
where
    &'a T: IntoKeyPath,
{
    fn append_to(self, segments: &mut Vec<String>) {
        (*self).append_to(segments);
    }
}

impl IntoKeyPath for KeyPath {
    fn append_to(self, segments: &mut Vec<String>) {
        segments.extend(self.segments);
    }
}

impl IntoKeyPath for &KeyPath {
    fn append_to(self, segments: &mut Vec<String>) {
        segments.extend(self.segments.iter().cloned());
    }
}

impl<T: IntoKeyPath> IntoKeyPath for Vec<T> {
    fn append_to(self, segments: &mut Vec<String>) {
        for spec in self {
            spec.append_to(segments);
        }
    }
}

impl<T: IntoKeyPath, const N: usize> IntoKeyPath for [T; N] {
    fn append_to(self, segments: &mut Vec<String>) {
        for spec in self {
            spec.append_to(segments);
        }
    }
}

impl<'a, T> IntoKeyPath for &'a [T]
where
    &'a T: IntoKeyPath,
{
    fn append_to(self, segments: &mut Vec<String>) {
        for spec in self {
            spec.append_to(segments);
        }
    }
}

impl<'a, T> IntoKeyPath for &'a Vec<T>
where
    &'a T: IntoKeyPath,
{
    fn append_to(self, segments: &mut Vec<String>) {
        self.as_slice().append_to(segments);
    }
}

/// Normalize any number of key specifications into one [`KeyPath`].
///
/// Arguments may be of different types; each must implement [`IntoKeyPath`].
#[macro_export]
macro_rules! key_path {
    ($($spec:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut path = $crate::KeyPath::new();
        $( path.push($spec); )*
        path
    }};
}
