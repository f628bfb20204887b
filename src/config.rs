//! Application configuration.
//!
//! Loads settings from config.json at startup: the vision service endpoint,
//! where to find the subscription key, and the screen layout regions.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::classify::ScreenLayout;

/// Global configuration instance, initialized once at startup.
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV: &str = "AZURE_VISION_ENDPOINT";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the vision resource, e.g. `https://<name>.cognitiveservices.azure.com/`
    #[serde(default)]
    pub endpoint: String,
    /// Name of the environment variable holding the subscription key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Screen regions used for classification
    #[serde(default)]
    pub layout: ScreenLayout,
}

fn default_api_key_env() -> String {
    "AZURE_VISION_API_KEY".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key_env: default_api_key_env(),
            layout: ScreenLayout::default(),
        }
    }
}

impl AppConfig {
    /// Endpoint from the environment if set, otherwise from the file.
    pub fn resolve_endpoint(&self) -> String {
        std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.endpoint.clone())
    }

    /// Subscription key from the configured environment variable. A missing
    /// key is not an error here: cached screenshots never need it.
    pub fn resolve_api_key(&self) -> String {
        match std::env::var(&self.api_key_env) {
            Ok(key) => key,
            Err(_) => {
                crate::log(&format!(
                    "{} is not set; only cached screenshots can be parsed",
                    self.api_key_env
                ));
                String::new()
            }
        }
    }
}

/// Parses a config file. A missing or unreadable file falls back to defaults.
pub fn load_config_from(config_path: &Path) -> AppConfig {
    crate::log(&format!("Looking for config at: {}", config_path.display()));

    if config_path.exists() {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    crate::log(&format!("Config loaded from {}", config_path.display()));
                    return config;
                }
                Err(e) => {
                    crate::log(&format!(
                        "Failed to parse {}: {}. Using defaults.",
                        config_path.display(),
                        e
                    ));
                }
            },
            Err(e) => {
                crate::log(&format!(
                    "Failed to read {}: {}. Using defaults.",
                    config_path.display(),
                    e
                ));
            }
        }
    } else {
        crate::log(&format!(
            "{} not found. Using default config.",
            config_path.display()
        ));
    }

    AppConfig::default()
}

/// Looks for config.json next to the executable, then in the working directory.
fn load_config() -> AppConfig {
    let exe_config = crate::paths::get_config_path();
    if exe_config.exists() {
        load_config_from(&exe_config)
    } else {
        load_config_from(Path::new("config.json"))
    }
}

/// Initializes the global configuration from an explicit file.
/// Has no effect once the configuration is set.
pub fn init_config_from(config_path: &Path) {
    let _ = CONFIG.set(load_config_from(config_path));
}

/// Returns the global configuration, loading the default location on first use.
pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(load_config)
}
