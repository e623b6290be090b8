//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("config error: {0}")]
    Config(String),

    /// Data file already exists; refuse to overwrite it
    #[error("data file {0} already exists")]
    AlreadyInitialized(String),

    /// Startup failed (data load, runtime, bind)
    #[error("boot failed: {0}")]
    Boot(String),

    /// I/O error
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::Boot(msg.into())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
