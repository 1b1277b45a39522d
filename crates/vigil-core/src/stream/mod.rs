//! Live log subscription over the backend's WebSocket endpoint.
//!
//! The backend emits one log line per text frame; on connect it replays the
//! buffered history before streaming live lines. Reconnection policy belongs
//! to the consumer: the dashboard retries on its poll cadence, `logs --follow`
//! treats a drop as fatal.

pub mod client;
pub mod errors;

pub use client::LogStream;
pub use errors::StreamError;
