//! vigil-core: Client library for the VigilBot control API
//!
//! This library provides the client-side logic for observing and controlling
//! a managed bot process through its HTTP/WebSocket backend. It is used by
//! the `vigil` CLI.
//!
//! # Main Entry Points
//!
//! - [`api`] - Fetch status and logs, issue start/stop/restart commands
//! - [`stream`] - Subscribe to the live log stream
//! - [`dashboard`] - State held by the dashboard view
//! - [`config`] - Configuration management

pub mod api;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod logging;
pub mod stream;

// Re-export commonly used types at crate root for convenience
pub use api::types::{ActionResponse, BotState, BotStatus};
pub use config::VigilConfig;
pub use dashboard::DashboardState;
pub use stream::LogStream;

// Re-export client modules as the primary API
pub use api::client as api_ops;

// Re-export logging initialization
pub use logging::init_logging;
