//! Default values for configuration types.
//!
//! The accessor methods here resolve optional config fields to their
//! documented defaults, so the rest of the crate never sees `Option`s.

use crate::config::types::{DashboardConfig, ServerConfig};

/// Default base URL of the control API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default URL of the log-streaming WebSocket endpoint.
pub const DEFAULT_WS_URL: &str = "ws://localhost:8000/ws";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default maximum log lines retained in memory.
///
/// Matches the log buffer the backend itself keeps, so a freshly connected
/// dashboard can hold the full replayed history.
pub const DEFAULT_LOG_BUFFER_LINES: usize = 1000;

impl ServerConfig {
    /// Returns the API base URL with any trailing slash removed,
    /// defaulting to the local backend.
    pub fn api_url(&self) -> String {
        self.api_url
            .as_deref()
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Returns the WebSocket URL, defaulting to the local backend.
    pub fn ws_url(&self) -> String {
        self.ws_url
            .as_deref()
            .unwrap_or(DEFAULT_WS_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Returns the per-request timeout in seconds, defaulting to 10.
    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

impl DashboardConfig {
    /// Returns the status poll interval in seconds, defaulting to 5.
    pub fn refresh_interval_secs(&self) -> u64 {
        self.refresh_interval_secs
            .unwrap_or(crate::dashboard::REFRESH_INTERVAL.as_secs())
    }

    /// Returns the log buffer cap in lines, defaulting to 1000.
    pub fn log_buffer_lines(&self) -> usize {
        self.log_buffer_lines.unwrap_or(DEFAULT_LOG_BUFFER_LINES)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::types::VigilConfig;

    #[test]
    fn test_vigil_config_default() {
        let config = VigilConfig::default();
        assert_eq!(config.server.api_url(), "http://localhost:8000");
        assert_eq!(config.server.ws_url(), "ws://localhost:8000/ws");
        assert_eq!(config.server.request_timeout_secs(), 10);
    }

    #[test]
    fn test_dashboard_config_defaults() {
        let config = VigilConfig::default();
        assert_eq!(config.dashboard.refresh_interval_secs(), 5);
        assert_eq!(config.dashboard.log_buffer_lines(), 1000);
    }

    #[test]
    fn test_api_url_trailing_slash_stripped() {
        let config: VigilConfig = toml::from_str(
            r#"
[server]
api_url = "http://localhost:8000/"
"#,
        )
        .unwrap();
        assert_eq!(config.server.api_url(), "http://localhost:8000");
    }

    #[test]
    fn test_server_config_serde_defaults() {
        // Missing fields resolve to documented defaults, not zero values
        let config: VigilConfig = toml::from_str(
            r#"
[server]
api_url = "https://bot.example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.server.api_url(), "https://bot.example.com");
        assert_eq!(config.server.ws_url(), "ws://localhost:8000/ws");
        assert_eq!(config.server.request_timeout_secs(), 10);
    }

    #[test]
    fn test_empty_config_parses() {
        let config: VigilConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.api_url(), "http://localhost:8000");
        assert_eq!(config.dashboard.log_buffer_lines(), 1000);
    }
}
