use clap::ArgMatches;
use tracing::{error, info, warn};

use vigil_core::api::types::{ActionResponse, BotState, BotStatus};
use vigil_core::api_ops;
use vigil_core::config::VigilConfig;
use vigil_core::events;
use vigil_core::stream::LogStream;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("status", sub_matches)) => handle_status_command(sub_matches),
        Some(("logs", sub_matches)) => handle_logs_command(sub_matches),
        Some(("start", _)) => handle_control_command("start"),
        Some(("stop", _)) => handle_control_command("stop"),
        Some(("restart", _)) => handle_control_command("restart"),
        Some(("dashboard", sub_matches)) => handle_dashboard_command(sub_matches),
        Some(("completions", sub_matches)) => handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> VigilConfig {
    match VigilConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.vigil/config.toml and ./.vigil/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            VigilConfig::default()
        }
    }
}

/// Build the runtime all network commands run on.
pub(crate) fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
}

fn handle_status_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config = load_config_with_warning();

    info!(event = "cli.status_started", json_output = json_output);

    let rt = runtime()?;
    match rt.block_on(api_ops::fetch_status(&config)) {
        Ok(status) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print_status_panel(&status);
            }

            info!(event = "cli.status_completed", status = %status.status);

            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to fetch bot status: {}", e);

            error!(
                event = "cli.status_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_logs_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let follow = matches.get_flag("follow");
    let config = load_config_with_warning();

    info!(
        event = "cli.logs_started",
        json_output = json_output,
        follow = follow
    );

    let rt = runtime()?;

    // One-shot history fetch. In follow mode a failed fetch is not fatal:
    // the live stream can still attach.
    match rt.block_on(api_ops::fetch_logs(&config)) {
        Ok(lines) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else if lines.is_empty() {
                println!("No logs available.");
            } else {
                for line in &lines {
                    println!("{}", line);
                }
            }

            info!(event = "cli.logs_completed", count = lines.len());
        }
        Err(e) if follow => {
            eprintln!("⚠️  Could not fetch log history: {}", e);
            warn!(event = "cli.logs_history_fetch_failed", error = %e);
        }
        Err(e) => {
            eprintln!("❌ Failed to fetch logs: {}", e);

            error!(
                event = "cli.logs_failed",
                error = %e
            );

            events::log_app_error(&e);
            return Err(e.into());
        }
    }

    if follow {
        return rt.block_on(follow_logs(&config));
    }

    Ok(())
}

/// Print stream lines until the server closes the connection.
///
/// Follow mode has one-shot semantics: a dropped stream exits with an error
/// instead of reconnecting. The dashboard is the reconnecting consumer.
async fn follow_logs(config: &VigilConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ws_url = config.server.ws_url();

    let mut stream = match LogStream::connect(&ws_url).await {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("❌ Failed to connect to WebSocket for logs: {}", e);
            error!(event = "cli.logs_follow_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    info!(event = "cli.logs_follow_started", url = %ws_url);

    loop {
        match stream.next_line().await {
            Ok(Some(line)) => println!("{}", line),
            Ok(None) => {
                println!("Log stream closed by server.");
                info!(event = "cli.logs_follow_completed");
                return Ok(());
            }
            Err(e) => {
                eprintln!("❌ Log stream failed: {}", e);
                error!(event = "cli.logs_follow_failed", error = %e);
                events::log_app_error(&e);
                return Err(e.into());
            }
        }
    }
}

fn handle_control_command(action: &'static str) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();

    info!(event = "cli.control_started", action = action);

    let rt = runtime()?;
    let result = rt.block_on(async {
        match action {
            "start" => api_ops::start_bot(&config).await,
            "stop" => api_ops::stop_bot(&config).await,
            _ => api_ops::restart_bot(&config).await,
        }
    });

    match result {
        Ok(response) => {
            println!("{}", control_summary(action, response.as_ref()));
            if let Some(status) = response.as_ref().and_then(|r| r.status.as_ref()) {
                println!("   Status: {}", status.status);
            }

            let accepted = response.as_ref().map(|r| r.success).unwrap_or(true);
            info!(
                event = "cli.control_completed",
                action = action,
                accepted = accepted
            );

            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to {} bot: {}", action, e);

            error!(
                event = "cli.control_failed",
                action = action,
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_dashboard_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let interval = matches
        .get_one::<u64>("interval")
        .copied()
        .unwrap_or_else(|| config.dashboard.refresh_interval_secs())
        .max(1);

    info!(event = "cli.dashboard_started", interval = interval);

    crate::dashboard::run_dashboard(config, interval)
}

fn handle_completions_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let shell = matches
        .get_one::<clap_complete::Shell>("shell")
        .ok_or("Shell argument is required")?;

    let mut cmd = crate::app::build_cli();
    clap_complete::generate(*shell, &mut cmd, "vigil", &mut std::io::stdout());

    Ok(())
}

/// First output line for a control command's outcome.
fn control_summary(action: &str, response: Option<&ActionResponse>) -> String {
    match response {
        Some(r) if r.success => format!("✅ {}", r.message),
        Some(r) => format!("⚠️  {}", r.message),
        None => format!("✅ Bot {} requested.", action),
    }
}

/// Icon for a bot state, matching the dashboard's status dot.
pub(crate) fn status_icon(state: BotState) -> &'static str {
    match state {
        BotState::Running => "✅",
        BotState::Stopped => "❌",
        BotState::Unknown => "❓",
    }
}

fn format_optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_string())
}

pub(crate) fn print_status_panel(status: &BotStatus) {
    println!("🤖 Bot Status");
    println!("┌{}┐", "─".repeat(62));
    println!(
        "│ Status:      {} {:<44} │",
        status_icon(status.status),
        status.status.to_string()
    );
    println!(
        "│ PID:         {:<47} │",
        format_optional(status.pid.map(|p| p.to_string()))
    );
    println!("│ Uptime:      {:<47} │", format_optional(status.uptime.clone()));
    println!(
        "│ Memory:      {:<47} │",
        format_optional(status.memory_usage.clone())
    );
    println!("└{}┘", "─".repeat(62));
}
