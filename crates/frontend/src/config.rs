//! Dashboard configuration.
//!
//! Defaults are embedded in the binary; the backend base URL can be
//! overridden per page load with `?backend=<url>`.

use serde::Deserialize;
use thiserror::Error;

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[backend]
base_url = "http://localhost:8000"
health_path = "/api/health"
health_timeout_ms = 5000

[notifications]
duration_ms = 4000
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid query string: {0}")]
    Query(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub backend: BackendConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    #[serde(default = "default_health_path")]
    pub health_path: String,
    #[serde(default = "default_health_timeout_ms")]
    pub health_timeout_ms: u32,
    /// Report fetches rely on the browser's own limits unless this is set
    #[serde(default)]
    pub request_timeout_ms: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    pub duration_ms: u32,
}

#[derive(Debug, Default, Deserialize)]
struct LocationOverrides {
    backend: Option<String>,
}

fn default_health_path() -> String {
    "/api/health".to_string()
}

fn default_health_timeout_ms() -> u32 {
    5000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 4000 }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: "http://localhost:8000".to_string(),
                health_path: default_health_path(),
                health_timeout_ms: default_health_timeout_ms(),
                request_timeout_ms: None,
            },
            notifications: NotificationConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies overrides from a `location.search` string
    pub fn with_query(mut self, query: &str) -> Result<Self, ConfigError> {
        let overrides: LocationOverrides = serde_qs::from_str(query.trim_start_matches('?'))
            .map_err(|e| ConfigError::Query(e.to_string()))?;
        if let Some(base_url) = overrides.backend.filter(|url| !url.trim().is_empty()) {
            self.backend.base_url = base_url;
        }
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        self.backend.base_url.trim_end_matches('/')
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url(), self.backend.health_path)
    }
}

/// Loads the embedded configuration plus any `?backend=` override.
///
/// Falls back to the built-in defaults when either part is malformed.
pub fn load_config() -> DashboardConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    match DashboardConfig::parse(DEFAULT_CONFIG).and_then(|config| config.with_query(&search)) {
        Ok(config) => {
            log::info!("Report backend: {}", config.base_url());
            config
        }
        Err(e) => {
            log::error!("{}; using default configuration", e);
            DashboardConfig::default()
        }
    }
}
