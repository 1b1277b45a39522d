//! WebSocket subscription yielding log lines as they arrive.

use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, info};

use crate::stream::errors::StreamError;

/// A live subscription to the backend's log stream.
///
/// Each text frame is one log line. Ping/pong and binary frames are skipped.
#[derive(Debug)]
pub struct LogStream {
    inner: WebSocketStream<MaybeTlsStream<TcpStream>>,
    url: String,
}

impl LogStream {
    /// Connect to the log-streaming WebSocket endpoint.
    pub async fn connect(ws_url: &str) -> Result<Self, StreamError> {
        debug!(event = "core.stream.connect_started", url = ws_url);

        let (inner, _response) =
            tokio_tungstenite::connect_async(ws_url)
                .await
                .map_err(|e| StreamError::ConnectFailed {
                    url: ws_url.to_string(),
                    message: e.to_string(),
                })?;

        info!(event = "core.stream.connect_completed", url = ws_url);

        Ok(Self {
            inner,
            url: ws_url.to_string(),
        })
    }

    /// The URL this stream is connected to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Read the next log line.
    ///
    /// Returns `Ok(None)` when the server closes the connection cleanly.
    pub async fn next_line(&mut self) -> Result<Option<String>, StreamError> {
        loop {
            match self.inner.next().await {
                Some(Ok(Message::Text(line))) => return Ok(Some(line)),
                Some(Ok(Message::Close(_))) => {
                    debug!(event = "core.stream.closed_by_server", url = %self.url);
                    return Ok(None);
                }
                // Control and binary frames carry no log lines
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    return Err(StreamError::Protocol {
                        message: e.to_string(),
                    });
                }
                None => {
                    debug!(event = "core.stream.ended", url = %self.url);
                    return Ok(None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_fails_when_no_server_listening() {
        // Port 9 (discard) is not running a WebSocket server
        let result = LogStream::connect("ws://127.0.0.1:9/ws").await;
        assert!(result.is_err());
        assert!(
            matches!(result.unwrap_err(), StreamError::ConnectFailed { .. }),
            "Should return ConnectFailed when nothing is listening"
        );
    }

    #[tokio::test]
    async fn test_connect_fails_for_invalid_url() {
        let result = LogStream::connect("not-a-url").await;
        assert!(result.is_err());
    }
}
