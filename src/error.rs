use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("notification is a duplicate")]
    Duplicate,

    #[error("notification rejected by the sink")]
    NotificationRejected,

    #[error("notifications sink error: {0}")]
    Sink(#[from] reqwest::Error),

    #[error("notifications sink responded with status {0}")]
    SinkStatus(reqwest::StatusCode),

    #[error("notifications sink response invalid: {0}")]
    SinkResponseInvalid(#[source] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(#[from] request_client::Error),
}

///
/// Dispatcher errors end up as `{"saved": false}` and never reach
/// the response, only backend reads do.
///
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::Backend(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
