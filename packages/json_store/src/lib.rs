//! JSON file persistence for statham stores.
//!
//! `JsonFiles` is the only way stores touch the file system. It is built with
//! an explicit [`Environment`], so file access can be switched off by
//! configuration.
//!
//! # Example
//!
//! ```rust,no_run
//! use statham_core_store::Mode;
//! use statham_json_store::JsonFiles;
//!
//! # fn main() -> Result<(), statham_json_store::Error> {
//! let files = JsonFiles::detect();
//! let mut store = files.open("settings.json", Mode::Nested, true)?;
//! store.put("window.width", 1280);
//! files.save(&store, None, false)?;
//! # Ok(())
//! # }
//! ```

mod environment;
mod error;
mod json_files;

pub use environment::Environment;
pub use error::Error;
pub use json_files::JsonFiles;
