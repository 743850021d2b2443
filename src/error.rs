use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed plan document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document has no 'plan' section, or it is not a record")]
    MissingPlan,

    #[error("no {0} path given")]
    MissingPath(&'static str),

    #[error("failed to read the {what} path: {source}")]
    Prompt {
        what: &'static str,
        source: std::io::Error,
    },

    #[cfg(feature = "io")]
    #[error("failed to write '{}': {message}", path.display())]
    Write { path: PathBuf, message: String },
}
