//! Publisher API error types.

/// Errors produced while talking to the publishing service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("authentication rejected ({status}): {message}")]
    Security { status: u16, message: String },

    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },
}
