//! Server configuration.
//!
//! Settings are resolved in three layers, later layers winning:
//!
//! 1. Built-in defaults (data in `~/Documents/Pet Care`, bind `127.0.0.1:3000`)
//! 2. An optional YAML file, either the path in `PET_CARE_CONFIG` or
//!    `pet_care.yaml` inside the data directory
//! 3. Environment variables `PET_CARE_DATA_DIR`, `PET_CARE_BIND`, `PET_CARE_LOG`
//!
//! Example `pet_care.yaml`:
//!
//! ```yaml
//! bind_address: "0.0.0.0:8000"
//! log_level: debug
//! allowed_origin: "http://localhost:5173"
//! ```

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "PET_CARE_CONFIG";
pub const DATA_DIR_ENV: &str = "PET_CARE_DATA_DIR";
pub const BIND_ENV: &str = "PET_CARE_BIND";
pub const LOG_ENV: &str = "PET_CARE_LOG";

const CONFIG_FILE_NAME: &str = "pet_care.yaml";
const DATA_DIRECTORY_NAME: &str = "Pet Care";
const FALLBACK_DATA_DIRECTORY: &str = "pet_care_data";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Directory holding the CSV record files
    pub data_directory: PathBuf,
    pub bind_address: SocketAddr,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Origin allowed by CORS, normally the frontend dev server
    pub allowed_origin: String,
}

/// Shape of the YAML file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    data_directory: Option<PathBuf>,
    bind_address: Option<String>,
    log_level: Option<String>,
    allowed_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_level: "info".to_string(),
            allowed_origin: "http://localhost:8080".to_string(),
        }
    }
}

impl ServerConfig {
    /// Resolve configuration from defaults, the YAML file and the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::load`] with an injectable environment lookup
    pub fn load_with<F>(env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(data_directory) = env(DATA_DIR_ENV) {
            config.data_directory = PathBuf::from(data_directory);
        }

        let explicit_path = env(CONFIG_PATH_ENV).map(PathBuf::from);
        let config_path = explicit_path
            .clone()
            .unwrap_or_else(|| config.data_directory.join(CONFIG_FILE_NAME));

        if config_path.exists() {
            info!("Loading configuration from {:?}", config_path);
            config.apply_file(&config_path)?;
        } else if explicit_path.is_some() {
            warn!("Config file {:?} does not exist, using defaults", config_path);
        }

        // The environment wins over the file
        if let Some(data_directory) = env(DATA_DIR_ENV) {
            config.data_directory = PathBuf::from(data_directory);
        }
        if let Some(bind) = env(BIND_ENV) {
            config.bind_address = parse_bind_address(&bind)
                .with_context(|| format!("Invalid {} value", BIND_ENV))?;
        }
        if let Some(level) = env(LOG_ENV) {
            config.log_level = level;
        }

        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        if let Some(data_directory) = file.data_directory {
            self.data_directory = data_directory;
        }
        if let Some(bind) = file.bind_address {
            self.bind_address = parse_bind_address(&bind)
                .with_context(|| format!("Invalid bind_address in {:?}", path))?;
        }
        if let Some(level) = file.log_level {
            self.log_level = level;
        }
        if let Some(origin) = file.allowed_origin {
            self.allowed_origin = origin;
        }
        Ok(())
    }
}

fn parse_bind_address(value: &str) -> Result<SocketAddr> {
    value
        .trim()
        .parse::<SocketAddr>()
        .with_context(|| format!("'{}' is not a socket address", value))
}

/// `~/Documents/Pet Care`, or `./pet_care_data` when there is no documents folder
fn default_data_directory() -> PathBuf {
    match dirs::document_dir() {
        Some(documents) => documents.join(DATA_DIRECTORY_NAME),
        None => PathBuf::from(FALLBACK_DATA_DIRECTORY),
    }
}
