use dashmap::DashMap;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `DATABASE_URL` value that selects the in-memory repository.
pub const IN_MEMORY_STORAGE: &str = "memory";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },
}

/// Key/value configuration store.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
    env_file: Option<PathBuf>,
}

impl ConfigService {
    /// Loads `.env` (if present) and then the process environment.
    pub fn new() -> Self {
        let service = Self {
            env_file: dotenvy::dotenv().ok(),
            ..Self::default()
        };
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    /// The `.env` file that was loaded, if any. Logged by the caller once
    /// tracing is installed.
    pub fn env_file(&self) -> Option<&PathBuf> {
        self.env_file.as_ref()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    fn parse_or<T: std::str::FromStr>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: key.to_string(),
                value,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    InMemory,
    Database { url: String, max_connections: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
    pub log_level: String,
    pub env_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_service(&ConfigService::new())
    }

    pub fn from_service(config: &ConfigService) -> Result<Self, ConfigError> {
        let url = config.get_or("DATABASE_URL", DEFAULT_DATABASE_URL);
        let storage = if url.eq_ignore_ascii_case(IN_MEMORY_STORAGE) {
            StorageConfig::InMemory
        } else {
            StorageConfig::Database {
                url,
                max_connections: config
                    .parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            }
        };

        Ok(Self {
            host: config.get_or("HOST", DEFAULT_HOST),
            port: config.parse_or("PORT", DEFAULT_PORT)?,
            storage,
            log_level: config.get_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            env_file: config.env_file().cloned(),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
