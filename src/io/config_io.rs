use std::fs;
use std::path::{Path, PathBuf};

use crate::io::store::{DEFAULT_STORE_FILE, PathStore};
use crate::model::builtin::home_dir;
use crate::model::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"));
    config_dir.join("pathmark").join("config.toml")
}

/// Read the config from a specific path. A missing file is not an error.
pub fn read_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the config from the default location, falling back to defaults
/// (with a warning) when it cannot be used.
pub fn read_config() -> Config {
    match read_config_from(&config_path()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring config file");
            Config::default()
        }
    }
}

/// Pick the store location: explicit override, then config, then
/// `saved_paths.json` in the working directory.
pub fn resolve_store(override_path: Option<&str>, config: &Config) -> PathStore {
    let path = override_path
        .or(config.store.as_deref())
        .unwrap_or(DEFAULT_STORE_FILE);
    PathStore::new(path)
}
