use std::collections::VecDeque;

use crate::api::types::{BotState, BotStatus};

/// State behind the dashboard view.
///
/// All fields are private - access state through the facade methods below.
/// This keeps the invariants in one place: the log buffer never exceeds its
/// cap, and a successful status poll always clears the error banner.
pub struct DashboardState {
    /// Latest status record from the backend.
    status: BotStatus,

    /// Append-only log lines, oldest first, capped at `capacity`.
    logs: VecDeque<String>,

    /// Maximum log lines retained; oldest lines drop first.
    capacity: usize,

    /// True until the first status response (success or failure) arrives.
    loading: bool,

    /// Single user-visible error banner, if any.
    error: Option<String>,
}

impl DashboardState {
    /// Create new dashboard state with the given log buffer cap.
    ///
    /// Starts in the loading state with an unknown status record.
    pub fn new(log_capacity: usize) -> Self {
        Self {
            status: BotStatus::unknown(),
            logs: VecDeque::new(),
            capacity: log_capacity.max(1),
            loading: true,
            error: None,
        }
    }

    /// Apply a fresh status record from a successful poll.
    ///
    /// Clears the loading flag and dismisses any error banner.
    pub fn apply_status(&mut self, status: BotStatus) {
        self.status = status;
        self.loading = false;
        self.error = None;
    }

    /// Surface a user-visible error banner.
    ///
    /// Also clears the loading flag: a failed first poll still ends loading.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Dismiss the error banner.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Append one log line, dropping the oldest line when at capacity.
    pub fn push_log(&mut self, line: String) {
        if self.logs.len() == self.capacity {
            self.logs.pop_front();
        }
        self.logs.push_back(line);
    }

    /// Append a batch of log lines (the initial history fetch).
    pub fn extend_logs(&mut self, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            self.push_log(line);
        }
    }

    /// Latest status record.
    pub fn status(&self) -> &BotStatus {
        &self.status
    }

    /// Log lines in arrival order.
    pub fn logs(&self) -> impl Iterator<Item = &String> {
        self.logs.iter()
    }

    /// The last `n` log lines in arrival order.
    pub fn log_tail(&self, n: usize) -> impl Iterator<Item = &String> {
        self.logs.iter().skip(self.logs.len().saturating_sub(n))
    }

    /// Number of log lines currently buffered.
    pub fn log_count(&self) -> usize {
        self.logs.len()
    }

    /// True until the first status response arrives.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // =========================================================================
    // Control availability
    // =========================================================================

    /// Whether the start control is applicable (bot is not running).
    pub fn can_start(&self) -> bool {
        !matches!(self.status.status, BotState::Running)
    }

    /// Whether the stop control is applicable (bot is running).
    pub fn can_stop(&self) -> bool {
        matches!(self.status.status, BotState::Running)
    }

    /// Whether the restart control is applicable (always).
    pub fn can_restart(&self) -> bool {
        true
    }
}
