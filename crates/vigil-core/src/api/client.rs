//! HTTP client for the bot control API.
//!
//! Builds a fresh `reqwest` client per operation with bounded connect and
//! request timeouts. Each public function maps to one backend endpoint; the
//! fixed-interval poll in the dashboard is the only retry mechanism, so a
//! failed call here simply surfaces an error for the current tick.

use std::time::Duration;

use tracing::{debug, info};

use crate::api::errors::ApiError;
use crate::api::types::{ActionResponse, BotStatus, LogsResponse};
use crate::config::VigilConfig;

/// Connect timeout, separate from the configurable per-request timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

fn http_client(timeout_secs: u64) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| ApiError::Request {
            message: e.to_string(),
        })
}

/// Map a transport-level failure, distinguishing "backend not there" from
/// everything else so callers can render a single reachability banner.
fn map_send_error(url: &str, e: reqwest::Error) -> ApiError {
    if e.is_connect() || e.is_timeout() {
        ApiError::Unreachable {
            url: url.to_string(),
            message: e.to_string(),
        }
    } else {
        ApiError::Request {
            message: e.to_string(),
        }
    }
}

fn check_http_status(url: &str, status: reqwest::StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Decode a control-action response body.
///
/// The backend is not required to send a body for control actions; an empty
/// body means the request was accepted.
fn decode_action_body(body: &str) -> Result<Option<ActionResponse>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let response: ActionResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Protocol {
            message: format!("Invalid JSON response: {}", e),
        })?;
    Ok(Some(response))
}

/// Fetch the current status record from `GET /status`.
pub async fn fetch_status(config: &VigilConfig) -> Result<BotStatus, ApiError> {
    let url = config.server.endpoint("status");

    debug!(event = "core.api.fetch_status_started", url = %url);

    let client = http_client(config.server.request_timeout_secs())?;
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| map_send_error(&url, e))?;

    check_http_status(&url, response.status())?;

    let status: BotStatus = response.json().await.map_err(|e| ApiError::Protocol {
        message: e.to_string(),
    })?;

    debug!(
        event = "core.api.fetch_status_completed",
        status = %status.status,
        pid = ?status.pid
    );

    Ok(status)
}

/// Fetch the buffered log history from `GET /logs`.
pub async fn fetch_logs(config: &VigilConfig) -> Result<Vec<String>, ApiError> {
    let url = config.server.endpoint("logs");

    debug!(event = "core.api.fetch_logs_started", url = %url);

    let client = http_client(config.server.request_timeout_secs())?;
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| map_send_error(&url, e))?;

    check_http_status(&url, response.status())?;

    let body: LogsResponse = response.json().await.map_err(|e| ApiError::Protocol {
        message: e.to_string(),
    })?;

    debug!(
        event = "core.api.fetch_logs_completed",
        lines = body.logs.len()
    );

    Ok(body.logs)
}

/// Issue a control action via `POST /{action}`.
///
/// Returns the backend's action response when it sends one, `None` when the
/// backend replies with an empty body.
async fn post_action(
    config: &VigilConfig,
    action: &str,
) -> Result<Option<ActionResponse>, ApiError> {
    let url = config.server.endpoint(action);

    info!(event = "core.api.action_started", action = action, url = %url);

    let client = http_client(config.server.request_timeout_secs())?;
    let response = client
        .post(&url)
        .send()
        .await
        .map_err(|e| map_send_error(&url, e))?;

    check_http_status(&url, response.status())?;

    let body = response.text().await.map_err(|e| ApiError::Request {
        message: e.to_string(),
    })?;
    let decoded = decode_action_body(&body)?;

    info!(
        event = "core.api.action_completed",
        action = action,
        accepted = decoded.as_ref().map(|r| r.success).unwrap_or(true)
    );

    Ok(decoded)
}

/// Request the backend to start the bot process.
pub async fn start_bot(config: &VigilConfig) -> Result<Option<ActionResponse>, ApiError> {
    post_action(config, "start").await
}

/// Request the backend to stop the bot process.
pub async fn stop_bot(config: &VigilConfig) -> Result<Option<ActionResponse>, ApiError> {
    post_action(config, "stop").await
}

/// Request the backend to restart the bot process.
pub async fn restart_bot(config: &VigilConfig) -> Result<Option<ActionResponse>, ApiError> {
    post_action(config, "restart").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VigilError;

    #[test]
    fn test_decode_action_body_empty_is_accepted() {
        assert!(decode_action_body("").unwrap().is_none());
        assert!(decode_action_body("  \n").unwrap().is_none());
    }

    #[test]
    fn test_decode_action_body_parses_response() {
        let body = r#"{"success": true, "message": "Bot started with PID 42"}"#;
        let response = decode_action_body(body).unwrap().unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Bot started with PID 42");
    }

    #[test]
    fn test_decode_action_body_declined_action() {
        let body = r#"{
            "success": false,
            "message": "Bot is not running",
            "status": {"status": "stopped"}
        }"#;
        let response = decode_action_body(body).unwrap().unwrap();
        assert!(!response.success);
        assert_eq!(response.status.unwrap().status.to_string(), "stopped");
    }

    #[test]
    fn test_decode_action_body_invalid_json_is_protocol_error() {
        let result = decode_action_body("not json");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_code(), "API_PROTOCOL_ERROR");
    }

    #[test]
    fn test_check_http_status_success_range() {
        assert!(check_http_status("http://x/status", reqwest::StatusCode::OK).is_ok());
        assert!(check_http_status("http://x/start", reqwest::StatusCode::NO_CONTENT).is_ok());
    }

    #[test]
    fn test_check_http_status_failure_carries_code_and_url() {
        let err = check_http_status(
            "http://localhost:8000/status",
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        )
        .unwrap_err();
        match err {
            ApiError::HttpStatus { status, url } => {
                assert_eq!(status, 500);
                assert_eq!(url, "http://localhost:8000/status");
            }
            other => panic!("Expected HttpStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_http_client_builds() {
        assert!(http_client(10).is_ok());
    }
}
