//! CLI argument definitions using clap
//!
//! Commands:
//! - catalogo init --config <path>
//! - catalogo start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// catalogo - a product catalog HTTP service backed by a CSV file
#[derive(Parser, Debug)]
#[command(name = "catalogo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a fresh, empty product data file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./catalogo.json")]
        config: PathBuf,
    },

    /// Start the catalog HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./catalogo.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
