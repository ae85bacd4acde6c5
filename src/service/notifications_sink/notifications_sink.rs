use super::SinkOutcome;
use crate::{dto::output, error::Error};
use axum::async_trait;

///
/// External store of notifications.
///
/// Notification writes are at-most-once from the client's perspective,
/// so implementations must send exactly one request per call and never retry.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsSink: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Sink] when request could not be completed
    /// - [Error::SinkStatus] when sink responded with non-success status
    /// - [Error::SinkResponseInvalid] when response body is not valid JSON
    ///
    async fn persist(&self, notification: &output::Notification) -> Result<SinkOutcome, Error>;
}
