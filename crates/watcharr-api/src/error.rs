use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{context}: {status} - {message}")]
    Status {
        context: &'static str,
        status: StatusCode,
        message: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Not authenticated")]
    NotAuthenticated,
}

impl ApiError {
    /// Build a status error from a failed response body.
    ///
    /// The server answers errors as `{"error": "..."}`; fall back to the raw
    /// body when it doesn't.
    pub fn from_body(context: &'static str, status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.to_string());
        ApiError::Status {
            context,
            status,
            message,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status(),
            ApiError::Decode(_) | ApiError::NotAuthenticated => None,
        }
    }
}
