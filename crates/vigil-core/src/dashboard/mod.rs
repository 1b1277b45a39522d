//! Dashboard view state and refresh timing.
//!
//! Provides the state behind the live status view: the current status
//! record, the append-only log buffer, the loading flag, and the single
//! user-visible error banner.

pub mod state;

pub use state::DashboardState;

use std::time::Duration;

/// Refresh interval for status auto-update (5 seconds)
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5);
