use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum NavtreeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid endpoint list in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("No endpoints found in {0}")]
    EmptyInput(PathBuf),
}
impl NavtreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NavtreeError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        NavtreeError::Json {
            path: path.into(),
            source,
        }
    }
}
