use crate::error::Error;
use axum::async_trait;
use serde_json::Value;

///
/// Read access to notifications stored by the backend
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsFeedService: Send + Sync {
    ///
    /// Find notifications of the user.
    ///
    /// ### Returns
    /// backend response as is, [Value::Null] when backend returned no content
    ///
    /// ### Errors
    /// - [Error::Backend] when every attempt to reach the backend failed
    ///
    async fn find_notifications(&self, user_id: u64) -> Result<Value, Error>;
}
