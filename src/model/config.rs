use std::collections::HashMap;

use serde::Deserialize;

/// Top-level application config, read from `duelist.toml`.
/// Every section is optional; a missing file yields all defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
}

/// `[server]` section: where the task collection lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: "http://localhost:8080/api/todos".to_string(),
            timeout_secs: 10,
        }
    }
}

/// `[ui]` section: color overrides keyed by theme slot name,
/// values are `#RRGGBB` strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.base_url, "http://localhost:8080/api/todos");
        assert_eq!(config.server.timeout_secs, 10);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn test_partial_config() {
        let config: AppConfig = toml::from_str(
            r##"
[server]
base_url = "http://tasks.local/api/todos"

[ui.colors]
background = "#000000"
"##,
        )
        .unwrap();
        assert_eq!(config.server.base_url, "http://tasks.local/api/todos");
        assert_eq!(config.server.timeout_secs, 10);
        assert_eq!(
            config.ui.colors.get("background").map(String::as_str),
            Some("#000000")
        );
    }
}
