use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Application configuration, read from a TOML file.
///
/// Every section is optional; missing values fall back to defaults suitable
/// for local development.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Sqlite => write!(f, "sqlite"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            database_url: "sqlite://data/campus.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Users with these emails hold ADMIN regardless of their own flag.
    pub admin_emails: Vec<String>,
    pub users: Vec<UserConfig>,
}

/// A known caller and the bearer token that identifies them.
#[derive(Debug, Clone, Deserialize)]
pub struct UserConfig {
    pub email: String,
    pub token: String,
    #[serde(default)]
    pub admin: bool,
}

impl AppConfig {
    /// Loads the file named by `APP_CONFIG` (default `config.toml`), falling
    /// back to defaults when it does not exist. `PORT` overrides the port.
    pub fn load() -> Result<Self> {
        let path = env::var("APP_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(port) = env::var("PORT") {
            config.server.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.logging.level, "info");
        assert!(config.auth.users.is_empty());
    }

    #[test]
    fn parses_all_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [server]
            port = 9000

            [storage]
            backend = "memory"

            [logging]
            level = "debug"

            [auth]
            admin_emails = ["phtcon@ucsb.edu"]

            [[auth.users]]
            email = "phtcon@ucsb.edu"
            token = "admin-token"

            [[auth.users]]
            email = "cgaucho@ucsb.edu"
            token = "user-token"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.max_connections, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.auth.admin_emails, ["phtcon@ucsb.edu"]);
        assert_eq!(config.auth.users.len(), 2);
        assert!(!config.auth.users[1].admin);
    }

    #[test]
    fn rejects_unknown_backend() {
        let result = AppConfig::from_toml_str("[storage]\nbackend = \"postgres\"\n");
        assert!(result.is_err());
    }
}
