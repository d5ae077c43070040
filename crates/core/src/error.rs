//! Error type shared by the data sources.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected content in {}: {text:?}", path.display())]
    Parse { path: PathBuf, text: String },

    #[error("Interface '{name}' not found. Available: {available:?}")]
    InterfaceNotFound { name: String, available: Vec<String> },
}

impl SourceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourceError::Io {
            path: path.into(),
            source,
        }
    }
}
