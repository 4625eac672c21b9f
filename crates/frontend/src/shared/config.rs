//! Application configuration
//!
//! Built-in defaults point at a backend on `localhost:8000`. The host page may
//! override any subset of them with an inline TOML block:
//!
//! ```html
//! <script type="application/toml" id="app-config">
//! [api]
//! base_url = "https://scripts.example.com/api"
//! </script>
//! ```

use anyhow::Context;
use serde::Deserialize;

/// Id of the element carrying the inline TOML configuration
pub const CONFIG_ELEMENT_ID: &str = "app-config";

const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
const DEFAULT_DOCS_URL: &str = "http://localhost:8000/docs";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Interactive API docs, linked from the troubleshooting steps
    pub docs_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`
    pub fn log_level(&self) -> log::Level {
        self.level.trim().parse().unwrap_or(log::Level::Debug)
    }
}

/// Parse a (possibly partial) TOML document on top of the defaults
pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(contents).context("Invalid app configuration")?;

    // Blank values keep their default, the rest of the document still applies
    let defaults = ApiConfig::default();
    let base_url = config.api.base_url.trim().trim_end_matches('/');
    config.api.base_url = if base_url.is_empty() {
        defaults.base_url
    } else {
        base_url.to_string()
    };
    if config.api.docs_url.trim().is_empty() {
        config.api.docs_url = defaults.docs_url;
    }

    Ok(config)
}

/// Load configuration from the host page
///
/// Search order:
/// 1. Inline `<script id="app-config">` TOML block
/// 2. Falls back to built-in defaults
pub fn load_config() -> anyhow::Result<AppConfig> {
    match inline_config_source() {
        Some(contents) => parse_config(&contents),
        None => Ok(AppConfig::default()),
    }
}

fn inline_config_source() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}
