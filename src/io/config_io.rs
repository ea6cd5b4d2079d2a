use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Error type for config loading
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

/// Locate the config file, first match wins:
/// `$DUELIST_CONFIG`, `./duelist.toml`, `~/.config/duelist/config.toml`.
/// Returns None when none of them exists.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("DUELIST_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from("duelist.toml");
    if local.is_file() {
        return Some(local);
    }
    if let Ok(home) = std::env::var("HOME") {
        let user = PathBuf::from(home).join(".config/duelist/config.toml");
        if user.is_file() {
            return Some(user);
        }
    }
    None
}

/// Read and parse one config file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the effective config: file (if any) with environment overrides.
/// `DUELIST_URL` beats the configured base URL; a `--url` flag beats both
/// and is applied by the caller.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = match config_path() {
        Some(path) => read_config(&path)?,
        None => AppConfig::default(),
    };
    if let Ok(url) = std::env::var("DUELIST_URL") {
        config.server.base_url = url;
    }
    Ok(config)
}
