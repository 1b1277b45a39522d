use crate::errors::VigilError;

/// Error on the log-streaming WebSocket connection.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Failed to connect to log stream at {url}: {message}")]
    ConnectFailed { url: String, message: String },

    #[error("Log stream error: {message}")]
    Protocol { message: String },
}

impl VigilError for StreamError {
    fn error_code(&self) -> &'static str {
        match self {
            StreamError::ConnectFailed { .. } => "STREAM_CONNECT_FAILED",
            StreamError::Protocol { .. } => "STREAM_PROTOCOL_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, StreamError::ConnectFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StreamError::ConnectFailed {
                url: "ws://localhost:8000/ws".to_string(),
                message: "refused".to_string()
            }
            .error_code(),
            "STREAM_CONNECT_FAILED"
        );
        assert_eq!(
            StreamError::Protocol {
                message: "bad frame".to_string()
            }
            .error_code(),
            "STREAM_PROTOCOL_ERROR"
        );
    }

    #[test]
    fn test_is_user_error() {
        assert!(
            StreamError::ConnectFailed {
                url: "ws://localhost:8000/ws".to_string(),
                message: "refused".to_string()
            }
            .is_user_error()
        );
        assert!(
            !StreamError::Protocol {
                message: "bad frame".to_string()
            }
            .is_user_error()
        );
    }
}
