//! Command-line interface
//!
//! `catalogo init` creates a fresh data file; `catalogo start` boots
//! the store from it and serves HTTP. Boot failures are fatal and
//! reported on stderr by `main`.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, Config};
pub use errors::{CliError, CliResult};
