//! Configuration loading and merging logic.
//!
//! This module handles loading configuration from files and merging
//! configurations from different sources (user config, project config,
//! environment variables).
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.vigil/config.toml` (global user preferences)
//! 3. **Project config** - `./.vigil/config.toml` (project-specific overrides)
//! 4. **Environment variables** - `VIGIL_API_URL`, `VIGIL_WS_URL` (highest priority)

use crate::config::types::{DashboardConfig, ServerConfig, VigilConfig};
use crate::config::validation::validate_config;
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "VIGIL_API_URL";

/// Environment variable overriding the WebSocket URL.
pub const WS_URL_ENV: &str = "VIGIL_WS_URL";

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files and environment.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.vigil/config.toml`)
/// 3. Project config (`./.vigil/config.toml`)
/// 4. `VIGIL_API_URL` / `VIGIL_WS_URL` environment variables
///
/// # Errors
///
/// Returns an error if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<VigilConfig, Box<dyn std::error::Error>> {
    let mut config = VigilConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    apply_env_overrides(&mut config);

    // Validate the final configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.vigil/config.toml.
fn load_user_config() -> Result<VigilConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".vigil").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.vigil/config.toml.
fn load_project_config() -> Result<VigilConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".vigil").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &PathBuf) -> Result<VigilConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
    let config: VigilConfig = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present, so a project config
/// that omits a field keeps the user config's setting.
pub fn merge_configs(base: VigilConfig, override_config: VigilConfig) -> VigilConfig {
    VigilConfig {
        server: ServerConfig {
            api_url: override_config.server.api_url.or(base.server.api_url),
            ws_url: override_config.server.ws_url.or(base.server.ws_url),
            request_timeout_secs: override_config
                .server
                .request_timeout_secs
                .or(base.server.request_timeout_secs),
        },
        dashboard: DashboardConfig {
            refresh_interval_secs: override_config
                .dashboard
                .refresh_interval_secs
                .or(base.dashboard.refresh_interval_secs),
            log_buffer_lines: override_config
                .dashboard
                .log_buffer_lines
                .or(base.dashboard.log_buffer_lines),
        },
    }
}

/// Apply `VIGIL_API_URL` / `VIGIL_WS_URL` environment overrides.
///
/// Empty or whitespace-only values are ignored.
fn apply_env_overrides(config: &mut VigilConfig) {
    if let Ok(url) = std::env::var(API_URL_ENV)
        && !url.trim().is_empty()
    {
        config.server.api_url = Some(url.trim().to_string());
    }

    if let Ok(url) = std::env::var(WS_URL_ENV)
        && !url.trim().is_empty()
    {
        config.server.ws_url = Some(url.trim().to_string());
    }
}
