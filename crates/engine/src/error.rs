use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load familiar-word list '{path}': {source}")]
    FamiliarWords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Attaches a path to a bare stream read failure.
    #[must_use]
    pub fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            Self::Read { source } => Self::FileRead {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
