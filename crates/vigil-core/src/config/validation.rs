//! Configuration validation.
//!
//! Runs after the full hierarchy (files plus environment) is merged, so it
//! sees the values the client will actually use.

use crate::config::types::VigilConfig;
use crate::errors::ConfigError;

/// Validate a fully merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` when:
/// - `api_url` is not an `http://` or `https://` URL
/// - `ws_url` is not a `ws://` or `wss://` URL
/// - `request_timeout_secs`, `refresh_interval_secs`, or `log_buffer_lines` is zero
pub fn validate_config(config: &VigilConfig) -> Result<(), ConfigError> {
    let api_url = config.server.api_url();
    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "api_url '{}' must start with http:// or https://",
                api_url
            ),
        });
    }

    let ws_url = config.server.ws_url();
    if !ws_url.starts_with("ws://") && !ws_url.starts_with("wss://") {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("ws_url '{}' must start with ws:// or wss://", ws_url),
        });
    }

    if config.server.request_timeout_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "request_timeout_secs must be greater than zero".to_string(),
        });
    }

    if config.dashboard.refresh_interval_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "refresh_interval_secs must be greater than zero".to_string(),
        });
    }

    if config.dashboard.log_buffer_lines() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "log_buffer_lines must be greater than zero".to_string(),
        });
    }

    Ok(())
}
