use std::path::PathBuf;

use statham_core_store::Error as CoreError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unsupported environment. This method only works on the server.")]
    UnsupportedEnvironment,

    #[error("Path undefined.")]
    PathUndefined,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON in {} is not an object", .path.display())]
    NotAMapping { path: PathBuf },

    #[error("Store error: {0}")]
    Core(#[from] CoreError),
}

impl Error {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
