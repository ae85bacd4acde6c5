use reqwest::StatusCode;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("response decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("request options serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
