//! Server Configuration
//!
//! Defaults, then an optional TOML file, then environment overrides.

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::{DomainError, DomainResult};

const ENV_CONFIG: &str = "INSPECT_CONFIG";
const ENV_DB_PATH: &str = "INSPECT_DB_PATH";
const ENV_BIND_ADDR: &str = "INSPECT_BIND_ADDR";
const ENV_LOG_DIR: &str = "INSPECT_LOG_DIR";

const DEFAULT_CONFIG_FILE: &str = "inspect.toml";
const DEFAULT_DB_PATH: &str = "data/inspect.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_APP_NAME: &str = "inspect-server";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub bind_addr: String,
    pub log_dir: PathBuf,
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

/// Keys accepted in the TOML file; all optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    database_path: Option<PathBuf>,
    bind_addr: Option<String>,
    log_dir: Option<PathBuf>,
    app_name: Option<String>,
}

fn read_non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Load from the process environment and the config file it points at
    pub fn load() -> DomainResult<Self> {
        let env = |key: &str| std::env::var(key).ok();
        let (path, required) = match read_non_empty(&env, ENV_CONFIG) {
            Some(path) => (PathBuf::from(path), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let file = match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(DomainError::InvalidInput(format!(
                    "cannot read config {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Self::from_sources(file.as_deref(), env)
    }

    /// Layer `file` (TOML text) and `env` lookups over the defaults
    pub fn from_sources(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(content) = file {
            let parsed: FileConfig =
                toml::from_str(content).map_err(|e| DomainError::InvalidInput(format!("invalid config: {}", e)))?;
            if let Some(v) = parsed.database_path {
                config.database_path = v;
            }
            if let Some(v) = parsed.bind_addr {
                config.bind_addr = v;
            }
            if let Some(v) = parsed.log_dir {
                config.log_dir = v;
            }
            if let Some(v) = parsed.app_name {
                config.app_name = v;
            }
        }

        if let Some(v) = read_non_empty(&env, ENV_DB_PATH) {
            config.database_path = PathBuf::from(v);
        }
        if let Some(v) = read_non_empty(&env, ENV_BIND_ADDR) {
            config.bind_addr = v;
        }
        if let Some(v) = read_non_empty(&env, ENV_LOG_DIR) {
            config.log_dir = PathBuf::from(v);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_sources(None, env_of(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_file_then_env() {
        let file = r#"
            database_path = "/var/lib/inspect/main.db"
            bind_addr = "0.0.0.0:9000"
        "#;
        let config = AppConfig::from_sources(Some(file), env_of(&[(ENV_BIND_ADDR, "127.0.0.1:7000"), (ENV_LOG_DIR, "  ")]))
            .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/var/lib/inspect/main.db"));
        assert_eq!(config.bind_addr, "127.0.0.1:7000");
        // blank env values are ignored
        assert_eq!(config.log_dir, PathBuf::from(DEFAULT_LOG_DIR));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AppConfig::from_sources(Some("port = 80"), env_of(&[])).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
