//! Error types for the core store.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid mode supplied ({mode}). Must be one of \"flat\" or \"nested\"")]
    InvalidMode { mode: String },
}
