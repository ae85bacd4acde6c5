use std::time::Duration;

pub struct NotificationsDeduplicationServiceConfig {
    /// Identical notification sent within this window is a duplicate
    pub duplicate_window: Duration,

    /// Fingerprints older than this are purged
    pub notification_lifespan: Duration,
}

impl Default for NotificationsDeduplicationServiceConfig {
    fn default() -> Self {
        Self {
            duplicate_window: Duration::from_millis(5_000),
            notification_lifespan: Duration::from_millis(30_000),
        }
    }
}
