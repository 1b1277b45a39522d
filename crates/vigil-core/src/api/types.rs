//! Wire types for the bot control API.

use serde::{Deserialize, Serialize};

/// Lifecycle state of the managed bot process as reported by the backend.
///
/// Backends may grow new states; anything unrecognized deserializes to
/// `Unknown` instead of failing the whole status fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BotState {
    Running,
    Stopped,
    #[serde(other)]
    #[default]
    Unknown,
}

impl BotState {
    pub fn is_running(&self) -> bool {
        matches!(self, BotState::Running)
    }
}

impl std::fmt::Display for BotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotState::Running => write!(f, "running"),
            BotState::Stopped => write!(f, "stopped"),
            BotState::Unknown => write!(f, "unknown"),
        }
    }
}

/// Snapshot of the bot process returned by `GET /status`.
///
/// `pid`, `uptime`, and `memory_usage` are absent when the bot is stopped.
/// Uptime and memory arrive pre-formatted by the backend (e.g. "2h 13m",
/// "103.42 MB"); the client displays them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotStatus {
    pub status: BotState,
    #[serde(default)]
    pub pid: Option<u32>,
    #[serde(default)]
    pub uptime: Option<String>,
    #[serde(default)]
    pub memory_usage: Option<String>,
}

impl BotStatus {
    /// Status placeholder used before the first successful poll.
    pub fn unknown() -> Self {
        Self {
            status: BotState::Unknown,
            pid: None,
            uptime: None,
            memory_usage: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }
}

/// Body of `GET /logs`.
///
/// A missing or null `logs` field is treated as an empty history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsResponse {
    #[serde(default)]
    pub logs: Vec<String>,
}

/// Body of `POST /start|stop|restart` when the backend sends one.
///
/// `success: false` means the backend declined the action (e.g. starting a
/// bot that is already running), not a transport failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub status: Option<BotStatus>,
}
