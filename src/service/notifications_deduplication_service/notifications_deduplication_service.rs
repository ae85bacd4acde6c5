use super::NotificationFingerprint;
use crate::error::Error;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsDeduplicationService: Send + Sync {
    ///
    /// Function makes sure notification with given fingerprint
    /// was not sent recently. Every call also purges old fingerprints.
    ///
    /// ### Errors
    /// - [Error::Duplicate]
    ///
    async fn deduplicate(&self, fingerprint: &NotificationFingerprint) -> Result<(), Error>;

    ///
    /// Remember that notification with given fingerprint was sent just now
    ///
    async fn mark_sent(&self, fingerprint: NotificationFingerprint);
}
