//! Live dashboard: fixed-interval status polling plus streaming logs.
//!
//! Renders the error banner, status, controls, info, and log panels on every
//! event, clearing the screen first - the same redraw cycle as watch mode.
//! One select loop drives everything: the poll tick, incoming stream lines,
//! and Ctrl+C teardown. The poll tick doubles as the reconnect cadence for a
//! dropped log stream.

use std::io::{self, Write};
use std::time::Duration;

use tracing::{debug, error, info, warn};

use vigil_core::api_ops;
use vigil_core::config::VigilConfig;
use vigil_core::dashboard::DashboardState;
use vigil_core::stream::{LogStream, StreamError};

/// Log lines shown in the dashboard's log panel.
const LOG_PANEL_LINES: usize = 15;

/// One iteration's wake-up cause.
enum DashboardEvent {
    Shutdown,
    PollTick,
    StreamLine(Result<Option<String>, StreamError>),
}

pub fn run_dashboard(
    config: VigilConfig,
    interval_secs: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let rt = crate::commands::runtime()?;
    rt.block_on(dashboard_loop(&config, interval_secs))
}

async fn dashboard_loop(
    config: &VigilConfig,
    interval_secs: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = DashboardState::new(config.dashboard.log_buffer_lines());
    let ws_url = config.server.ws_url();

    // One-shot history fetch on load. Failure is logged, not fatal: the
    // status poll and the stream are independent effects.
    match api_ops::fetch_logs(config).await {
        Ok(lines) => state.extend_logs(lines),
        Err(e) => warn!(event = "cli.dashboard.history_fetch_failed", error = %e),
    }

    let mut stream = match LogStream::connect(&ws_url).await {
        Ok(stream) => Some(stream),
        Err(e) => {
            warn!(event = "cli.dashboard.stream_connect_failed", error = %e);
            state.set_error("Failed to connect to WebSocket for logs");
            None
        }
    };

    let mut poll = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    poll.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        let event = tokio::select! {
            _ = tokio::signal::ctrl_c() => DashboardEvent::Shutdown,
            _ = poll.tick() => DashboardEvent::PollTick,
            line = next_stream_line(&mut stream) => DashboardEvent::StreamLine(line),
        };

        match event {
            DashboardEvent::Shutdown => break,
            DashboardEvent::PollTick => {
                match api_ops::fetch_status(config).await {
                    Ok(status) => state.apply_status(status),
                    Err(e) => {
                        error!(event = "cli.dashboard.status_fetch_failed", error = %e);
                        state.set_error("Failed to fetch bot status");
                    }
                }

                if stream.is_none() {
                    match LogStream::connect(&ws_url).await {
                        Ok(reconnected) => {
                            debug!(event = "cli.dashboard.stream_reconnected", url = %ws_url);
                            stream = Some(reconnected);
                        }
                        Err(e) => {
                            debug!(event = "cli.dashboard.stream_reconnect_failed", error = %e);
                        }
                    }
                }
            }
            DashboardEvent::StreamLine(Ok(Some(line))) => {
                state.push_log(line);
            }
            DashboardEvent::StreamLine(Ok(None)) => {
                warn!(event = "cli.dashboard.stream_closed");
                state.set_error("Log stream disconnected");
                stream = None;
            }
            DashboardEvent::StreamLine(Err(e)) => {
                warn!(event = "cli.dashboard.stream_failed", error = %e);
                state.set_error("Failed to connect to WebSocket for logs");
                stream = None;
            }
        }

        render(&state, interval_secs)?;
    }

    // Teardown: the poll timer and socket drop here; leave the cursor on a
    // fresh line below the last frame.
    println!();
    info!(event = "cli.dashboard_stopped");

    Ok(())
}

/// Next line from the stream, or never if the stream is down.
///
/// Keeping the disconnected case pending lets the select loop idle on the
/// poll tick alone until a reconnect attempt succeeds.
async fn next_stream_line(
    stream: &mut Option<LogStream>,
) -> Result<Option<String>, StreamError> {
    match stream {
        Some(stream) => stream.next_line().await,
        None => std::future::pending().await,
    }
}

fn render(state: &DashboardState, interval_secs: u64) -> io::Result<()> {
    // ANSI clear screen + cursor home, same escape as watch mode
    print!("\x1B[2J\x1B[1;1H");
    io::stdout().flush()?;

    println!("🤖 VigilBot Dashboard");
    println!();

    if let Some(error) = state.error() {
        println!("⚠️  {}", error);
        println!();
    }

    if state.is_loading() {
        println!("🤖 Bot Status");
        println!("   Loading...");
    } else {
        crate::commands::print_status_panel(state.status());
    }
    println!();

    print_controls_panel(state);
    println!();

    print_info_panel();
    println!();

    print_log_panel(state);
    println!();

    let now = chrono::Local::now().format("%H:%M:%S");
    println!(
        "Last updated {} | refreshing every {}s. Press Ctrl+C to exit.",
        now, interval_secs
    );
    io::stdout().flush()
}

fn print_controls_panel(state: &DashboardState) {
    println!("🎛️  Controls");
    println!(
        "   vigil start     {}",
        control_hint(state.can_start(), "bot is already running")
    );
    println!(
        "   vigil stop      {}",
        control_hint(state.can_stop(), "bot is not running")
    );
    println!(
        "   vigil restart   {}",
        control_hint(state.can_restart(), "")
    );
}

fn print_info_panel() {
    println!("ℹ️  Info");
    println!("   Use this dashboard to manage your VigilBot instance.");
    println!("   For commands and features, invite the bot to your Discord server and type !help.");
}

fn print_log_panel(state: &DashboardState) {
    println!(
        "📜 Bot Logs ({})",
        log_panel_title(state.log_count(), LOG_PANEL_LINES)
    );
    if state.log_count() == 0 {
        println!("   No logs available");
        return;
    }

    for line in state.log_tail(LOG_PANEL_LINES) {
        println!("   {}", line);
    }
}

/// Availability hint for one control, mirroring the disabled-button states.
fn control_hint(enabled: bool, reason: &str) -> String {
    if enabled {
        "available".to_string()
    } else {
        format!("disabled ({})", reason)
    }
}

fn log_panel_title(total: usize, shown: usize) -> String {
    if total > shown {
        format!("last {} of {} lines", shown, total)
    } else {
        format!("{} lines", total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_hint_enabled() {
        assert_eq!(control_hint(true, "bot is already running"), "available");
    }

    #[test]
    fn test_control_hint_disabled_carries_reason() {
        assert_eq!(
            control_hint(false, "bot is not running"),
            "disabled (bot is not running)"
        );
    }

    #[test]
    fn test_log_panel_title_under_cap() {
        assert_eq!(log_panel_title(3, 15), "3 lines");
        assert_eq!(log_panel_title(15, 15), "15 lines");
    }

    #[test]
    fn test_log_panel_title_over_cap() {
        assert_eq!(log_panel_title(120, 15), "last 15 of 120 lines");
    }
}
