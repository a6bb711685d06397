use std::io::Write;
use std::{fs, io, path};

use statham_core_store::{Mapping, Mode, StructuredStore, Value};

use crate::{Environment, Error};

/// Loads and saves store data as JSON files.
///
/// Every operation first checks the injected [`Environment`] and fails with
/// [`Error::UnsupportedEnvironment`] before any I/O when files are not
/// available. Failures are returned once; nothing is retried.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFiles {
    environment: Environment,
}

impl JsonFiles {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Use [`Environment::detect`].
    pub fn detect() -> Self {
        Self::new(Environment::detect())
    }

    /// Read and parse the JSON object stored at `file_path`.
    ///
    /// With `ensure`, a missing file is created (parents included) holding
    /// `{}` and an empty mapping is returned.
    pub fn load(&self, file_path: &path::Path, ensure: bool) -> Result<Mapping, Error> {
        self.environment.require_files()?;

        log::debug!("Reading {}...", file_path.display());
        let file = match fs::File::open(file_path) {
            Ok(file) => file,
            Err(error) if ensure && error.kind() == io::ErrorKind::NotFound => {
                log::debug!("Creating missing {}...", file_path.display());
                let empty = Mapping::new();
                self.write(file_path, &empty, true)?;
                return Ok(empty);
            }
            Err(error) => return Err(Error::io(file_path, error)),
        };

        let value: Value = serde_json::from_reader(io::BufReader::new(file))?;
        value.into_map().ok_or_else(|| Error::NotAMapping {
            path: file_path.to_path_buf(),
        })
    }

    /// Serialize `data` as compact JSON into `file_path`.
    ///
    /// With `create_parent_dirs`, missing parent directories are created first.
    pub fn write(
        &self,
        file_path: &path::Path,
        data: &Mapping,
        create_parent_dirs: bool,
    ) -> Result<(), Error> {
        self.environment.require_files()?;

        if create_parent_dirs {
            if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|error| Error::io(parent, error))?;
            }
        }

        log::debug!("Writing {}...", file_path.display());
        let s = serde_json::to_string(data)?;
        let mut f = fs::File::create(file_path).map_err(|error| Error::io(file_path, error))?;
        f.write_all(s.as_bytes())
            .map_err(|error| Error::io(file_path, error))?;

        Ok(())
    }

    /// Open a store on the data in `file_path`, remembering the location.
    pub fn open(
        &self,
        file_path: impl AsRef<path::Path>,
        mode: Mode,
        ensure: bool,
    ) -> Result<StructuredStore, Error> {
        let file_path = file_path.as_ref();
        let data = self.load(file_path, ensure)?;
        Ok(StructuredStore::new(data, mode).with_file_location(file_path))
    }

    /// [`open`](Self::open) with the mode given by name (`"flat"` or
    /// `"nested"`). An unknown name fails with [`Error::Core`] before the
    /// file is touched.
    pub fn open_named(
        &self,
        file_path: impl AsRef<path::Path>,
        mode_name: &str,
        ensure: bool,
    ) -> Result<StructuredStore, Error> {
        let mode: Mode = mode_name.parse()?;
        self.open(file_path, mode, ensure)
    }

    /// Save a store's data to `file_path`, or to its own file location when
    /// `file_path` is `None`.
    pub fn save(
        &self,
        store: &StructuredStore,
        file_path: Option<&path::Path>,
        create_parent_dirs: bool,
    ) -> Result<(), Error> {
        self.environment.require_files()?;

        let file_path = file_path
            .or_else(|| store.file_location())
            .ok_or(Error::PathUndefined)?;
        self.write(file_path, store.data(), create_parent_dirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use statham_core_store::Error as CoreError;

    fn mapping(json: serde_json::Value) -> Mapping {
        Value::from(json).into_map().unwrap()
    }

    fn write_file(file_path: &path::Path, contents: &str) {
        let mut f = fs::File::create(file_path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.sync_all().unwrap();
    }

    #[test]
    fn load_parses_object() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("nested.json");
        write_file(&file_path, r#"{"food": {"bacon": {"taste": "good"}}}"#);

        let data = JsonFiles::detect().load(&file_path, false).unwrap();
        assert_eq!(data, mapping(json!({"food": {"bacon": {"taste": "good"}}})));
    }

    #[test]
    fn load_missing_file_fails_without_ensure() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonFiles::detect().load(&dir.path().join("nope.json"), false);
        match result {
            Err(Error::Io { source, .. }) => assert_eq!(source.kind(), io::ErrorKind::NotFound),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn load_missing_file_with_ensure_creates_it() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("deep").join("er").join("data.json");

        let data = JsonFiles::detect().load(&file_path, true).unwrap();
        assert!(data.is_empty());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{}");
    }

    #[test]
    fn load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("broken.json");
        write_file(&file_path, "{not json");

        let result = JsonFiles::detect().load(&file_path, false);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn load_rejects_non_object_json() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("list.json");
        write_file(&file_path, "[1, 2, 3]");

        let result = JsonFiles::detect().load(&file_path, false);
        assert!(matches!(result, Err(Error::NotAMapping { .. })));
    }

    #[test]
    fn write_is_compact_json() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("out.json");

        JsonFiles::detect()
            .write(&file_path, &mapping(json!({"a": {"b": [1, 2]}})), false)
            .unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), r#"{"a":{"b":[1,2]}}"#);
    }

    #[test]
    fn write_without_parent_dirs_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("missing").join("out.json");

        let result = JsonFiles::detect().write(&file_path, &Mapping::new(), false);
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn open_remembers_location_and_mode() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("flat.json");
        write_file(&file_path, r#"{"food.bacon.taste": "good"}"#);

        let store = JsonFiles::detect().open(&file_path, Mode::Flat, false).unwrap();
        assert!(store.is_flat());
        assert_eq!(store.file_location(), Some(file_path.as_path()));
        assert_eq!(store.get("food.bacon.taste"), Some(&Value::from("good")));
    }

    #[test]
    fn open_named_parses_mode() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("flat.json");
        write_file(&file_path, r#"{"a.b": 1}"#);

        let store = JsonFiles::detect().open_named(&file_path, "flat", false).unwrap();
        assert!(store.is_flat());
        assert_eq!(store.get("a.b"), Some(&Value::from(1)));
    }

    #[test]
    fn open_named_rejects_unknown_mode_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("never.json");

        match JsonFiles::detect().open_named(&file_path, "single", true) {
            Err(Error::Core(CoreError::InvalidMode { mode })) => assert_eq!(mode, "single"),
            other => panic!("expected invalid mode, got {:?}", other),
        }
        assert!(!file_path.exists());
    }

    #[test]
    fn save_to_file_location() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("nested.json");
        write_file(&file_path, "{}");

        let files = JsonFiles::detect();
        let mut store = files.open(&file_path, Mode::Nested, false).unwrap();
        store.put("food.bacon.taste", "good");
        files.save(&store, None, false).unwrap();

        let reopened = files.open(&file_path, Mode::Nested, false).unwrap();
        assert_eq!(reopened.data(), store.data());
    }

    #[test]
    fn save_to_explicit_path_creating_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("a").join("b").join("out.json");

        let mut store = StructuredStore::default();
        store.put("x", 1);
        JsonFiles::detect()
            .save(&store, Some(file_path.as_path()), true)
            .unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), r#"{"x":1}"#);
    }

    #[test]
    fn save_without_any_path_fails() {
        let result = JsonFiles::detect().save(&StructuredStore::default(), None, false);
        assert!(matches!(result, Err(Error::PathUndefined)));
    }

    #[test]
    fn browser_environment_fails_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("never.json");
        let files = JsonFiles::new(Environment::Browser);

        assert!(matches!(
            files.load(&file_path, true),
            Err(Error::UnsupportedEnvironment)
        ));
        assert!(matches!(
            files.open(&file_path, Mode::Nested, true),
            Err(Error::UnsupportedEnvironment)
        ));
        assert!(matches!(
            files.save(&StructuredStore::default(), Some(file_path.as_path()), true),
            Err(Error::UnsupportedEnvironment)
        ));
        assert!(!file_path.exists());
    }
}
