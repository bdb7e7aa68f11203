use thiserror::Error;

/// The single message shown to the user for any failed request.
pub const REQUEST_FAILED_ALERT: &str = "Unable to load questions. Please try your request again";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("server reported failure: {0}")]
    Rejected(String),
}

impl ApiError {
    /// What the user sees. Every failure kind maps to the same alert.
    pub fn user_message(&self) -> &'static str {
        REQUEST_FAILED_ALERT
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
