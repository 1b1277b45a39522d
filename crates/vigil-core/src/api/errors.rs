use crate::errors::VigilError;

/// Error communicating with the bot control API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Backend is not reachable at {url}: {message}")]
    Unreachable { url: String, message: String },

    #[error("Backend returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid response from backend: {message}")]
    Protocol { message: String },

    #[error("Request failed: {message}")]
    Request { message: String },
}

impl VigilError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Unreachable { .. } => "API_UNREACHABLE",
            ApiError::HttpStatus { .. } => "API_HTTP_STATUS",
            ApiError::Protocol { .. } => "API_PROTOCOL_ERROR",
            ApiError::Request { .. } => "API_REQUEST_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ApiError::Unreachable { .. })
    }
}
