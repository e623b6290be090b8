//! Persistence error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;

/// Errors from reading or rewriting the backing CSV file
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file could not be read or parsed at startup
    #[error("failed to load {}: {source}", .path.display())]
    Load { path: PathBuf, source: csv::Error },

    /// The full-file rewrite after a mutation failed
    #[error("failed to rewrite {}: {source}", .path.display())]
    Save { path: PathBuf, source: csv::Error },
}

impl PersistError {
    pub fn load(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }

    pub fn save(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Save {
            path: path.into(),
            source,
        }
    }
}
