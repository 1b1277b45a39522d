//! Client for the bot control HTTP API.
//!
//! Covers the backend's status, log history, and control surfaces:
//! `GET /status`, `GET /logs`, `POST /start`, `POST /stop`, `POST /restart`.
//! The live log stream has its own module ([`crate::stream`]).

pub mod client;
pub mod errors;
pub mod types;

pub use errors::ApiError;
pub use types::{ActionResponse, BotState, BotStatus};
