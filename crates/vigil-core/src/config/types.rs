//! Configuration type definitions for the Vigil CLI.
//!
//! This module contains all configuration struct definitions used throughout
//! the Vigil CLI. These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! api_url = "http://localhost:8000"
//! ws_url = "ws://localhost:8000/ws"
//! request_timeout_secs = 10
//!
//! [dashboard]
//! refresh_interval_secs = 5
//! log_buffer_lines = 1000
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// This is the primary configuration structure that gets loaded from:
/// 1. User config: `~/.vigil/config.toml`
/// 2. Project config: `./.vigil/config.toml`
///
/// Project config values override user config values, and the
/// `VIGIL_API_URL` / `VIGIL_WS_URL` environment variables override both.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VigilConfig {
    /// Backend endpoint configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Dashboard behavior configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Backend endpoint configuration.
///
/// All fields are optional in config files; unset fields fall back to the
/// local backend defaults via the accessor methods.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    /// Base URL of the control API.
    /// Default: `http://localhost:8000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// URL of the log-streaming WebSocket endpoint.
    /// Default: `ws://localhost:8000/ws`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws_url: Option<String>,

    /// Per-request timeout in seconds.
    /// Default: 10 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Dashboard behavior configuration.
///
/// Controls how the live dashboard polls and how much log history it keeps.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    /// Interval in seconds between status poll refreshes.
    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval_secs: Option<u64>,

    /// Maximum log lines retained in memory; oldest lines drop first.
    /// Default: 1000 lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_buffer_lines: Option<usize>,
}

impl ServerConfig {
    /// Build a full URL for an API path, normalizing slashes.
    ///
    /// `endpoint("status")` and `endpoint("/status")` produce the same URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url(), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vigil_config_serialization() {
        let config = VigilConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: VigilConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.server.api_url(), parsed.server.api_url());
    }

    #[test]
    fn test_server_config_serialization() {
        let config = ServerConfig {
            api_url: Some("http://bot-host:8000".to_string()),
            ws_url: Some("ws://bot-host:8000/ws".to_string()),
            request_timeout_secs: Some(30),
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("api_url = \"http://bot-host:8000\""));
        assert!(toml_str.contains("request_timeout_secs = 30"));
    }

    #[test]
    fn test_dashboard_config_deserialize() {
        let toml_str = r#"
refresh_interval_secs = 10
log_buffer_lines = 200
"#;
        let config: DashboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.refresh_interval_secs, Some(10));
        assert_eq!(config.log_buffer_lines, Some(200));
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = ServerConfig {
            api_url: Some("http://localhost:9000".to_string()),
            ws_url: None,
            request_timeout_secs: None,
        };
        assert_eq!(config.endpoint("status"), "http://localhost:9000/status");
        assert_eq!(config.endpoint("/status"), "http://localhost:9000/status");
    }

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        let config = ServerConfig {
            api_url: Some("http://localhost:9000/".to_string()),
            ws_url: None,
            request_timeout_secs: None,
        };
        assert_eq!(config.endpoint("logs"), "http://localhost:9000/logs");
    }
}
