//! # Client configuration — `gradebook.toml`
//!
//! Defines the TOML file embedded into the web binary at build time
//! (filename: [`ClientConfig::filename`] = `"gradebook.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "/api"        # prefix for every endpoint path
//! timeout_ms = 60000       # per-request timeout (native transports)
//!
//! [app]
//! title = "Student Grade Management System"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Where and how long to talk to the backend. |
//! | [`AppConfig`] | Branding used for document titles and the shell header. |
//!
//! All structs derive or implement `Default`, so a missing or empty config
//! file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `gradebook.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub app: AppConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prefix joined in front of every endpoint path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "/api".to_string()
}

fn default_timeout_ms() -> u64 {
    60_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Student Grade Management System".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "gradebook.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.api.timeout_ms, 60_000);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"http://localhost:8080/api\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.api.timeout_ms, 60_000);
        assert_eq!(config.app.title, "Student Grade Management System");
    }

    #[test]
    fn test_builder_and_toml_output() {
        let config = ClientConfig::default().with_base_url("https://grades.example.org/api");
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url = \"https://grades.example.org/api\""));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(ClientConfig::from_toml("[api\nbase_url=").is_err());
    }
}
