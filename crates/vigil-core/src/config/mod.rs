//! # Configuration System
//!
//! Hierarchical TOML configuration system for the Vigil CLI.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values (local backend endpoints)
//! 2. **User config** - `~/.vigil/config.toml` (global user preferences)
//! 3. **Project config** - `./.vigil/config.toml` (project-specific overrides)
//! 4. **Environment variables** - `VIGIL_API_URL`, `VIGIL_WS_URL` (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.vigil/config.toml
//! [server]
//! api_url = "http://bot-host.internal:8000"
//! ws_url = "ws://bot-host.internal:8000/ws"
//!
//! [dashboard]
//! refresh_interval_secs = 10
//! log_buffer_lines = 500
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use vigil_core::config::VigilConfig;
//!
//! // Handle config errors explicitly - don't silently fall back to defaults
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VigilConfig::load_hierarchy()?;
//!     let status_url = config.server.endpoint("status");
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{DashboardConfig, ServerConfig, VigilConfig};
pub use validation::validate_config;

// Delegation for VigilConfig methods
impl VigilConfig {
    /// Load configuration from the hierarchy of config files and environment.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
