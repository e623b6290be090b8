//! CLI command implementations
//!
//! Startup sequence for `start`:
//! 1. Configuration load
//! 2. Collection load (fatal if the data file is missing or malformed)
//! 3. HTTP server activation

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::http::{HttpServer, HttpServerConfig};
use crate::persist::CsvFile;
use crate::store::ProductStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Service configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the CSV data file (default: "./produtos.csv")
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// HTTP server section
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_data_file() -> String {
    "./produtos.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file; a missing file yields the
    /// defaults, a malformed one is a fatal config error.
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.data_file.is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        Ok(())
    }

    /// Get data file as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_file)
    }
}

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Create a fresh data file containing only the header row.
fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;

    if config.data_path().exists() {
        return Err(CliError::AlreadyInitialized(config.data_file));
    }

    CsvFile::new(config.data_path())
        .save(&[])
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    println!("{}", serde_json::json!({ "initialized": true, "data_file": config.data_file }));

    Ok(())
}

/// Boot the store from the data file and serve HTTP until terminated.
fn start(config_path: &Path) -> CliResult<()> {
    init_tracing();

    let config = Config::load_or_default(config_path)?;

    let store = ProductStore::open(CsvFile::new(config.data_path()))
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    let server = HttpServer::with_config(Arc::new(store), config.http);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}

/// Install the global tracing subscriber; RUST_LOG overrides the
/// default "info" filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.json")).unwrap();

        assert_eq!(config.data_file, "./produtos.csv");
        assert_eq!(config.http.port, 8000);
    }

    #[test]
    fn test_malformed_config_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalogo.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            Config::load_or_default(&path),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalogo.json");
        fs::write(&path, r#"{"http": {"port": 9000}}"#).unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.data_file, "./produtos.csv");
    }

    #[test]
    fn test_zero_port_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalogo.json");
        fs::write(&path, r#"{"http": {"port": 0}}"#).unwrap();

        assert!(matches!(
            Config::load_or_default(&path),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_init_refuses_existing_data_file() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("produtos.csv");
        fs::write(&data, "id,nome,categoria,preco\n").unwrap();

        let config_path = dir.path().join("catalogo.json");
        fs::write(
            &config_path,
            serde_json::json!({ "data_file": data.to_str().unwrap() }).to_string(),
        )
        .unwrap();

        assert!(matches!(
            init(&config_path),
            Err(CliError::AlreadyInitialized(_))
        ));
    }

    #[test]
    fn test_init_writes_header_only_file() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("produtos.csv");

        let config_path = dir.path().join("catalogo.json");
        fs::write(
            &config_path,
            serde_json::json!({ "data_file": data.to_str().unwrap() }).to_string(),
        )
        .unwrap();

        init(&config_path).unwrap();

        let contents = fs::read_to_string(&data).unwrap();
        assert_eq!(contents, "id,nome,categoria,preco\n");
    }
}
