//! The capability gate for file access.

use crate::Error;

/// Where the code is running, and therefore whether files can be touched.
///
/// Passed explicitly to [`JsonFiles`](crate::JsonFiles) rather than probed on
/// every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// A host with a file system.
    Server,
    /// A sandbox without one, e.g. a browser running wasm.
    Browser,
}

impl Environment {
    /// `Browser` on wasm32 targets, `Server` everywhere else.
    pub fn detect() -> Self {
        if cfg!(target_arch = "wasm32") {
            Environment::Browser
        } else {
            Environment::Server
        }
    }

    pub fn is_server(&self) -> bool {
        matches!(self, Environment::Server)
    }

    /// Fail with [`Error::UnsupportedEnvironment`] unless files are available.
    pub fn require_files(&self) -> Result<(), Error> {
        if self.is_server() {
            Ok(())
        } else {
            Err(Error::UnsupportedEnvironment)
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::detect()
    }
}
