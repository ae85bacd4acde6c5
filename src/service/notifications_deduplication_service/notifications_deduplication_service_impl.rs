use super::{
    NotificationFingerprint, NotificationsDeduplicationService,
    NotificationsDeduplicationServiceConfig,
};
use crate::error::Error;
use axum::async_trait;
use std::collections::HashMap;
use tokio::{sync::Mutex, time::Instant};

pub struct NotificationsDeduplicationServiceImpl {
    config: NotificationsDeduplicationServiceConfig,
    last_sent: Mutex<HashMap<NotificationFingerprint, Instant>>,
}

impl NotificationsDeduplicationServiceImpl {
    pub fn new(config: NotificationsDeduplicationServiceConfig) -> Self {
        let last_sent = HashMap::new();
        let last_sent = Mutex::new(last_sent);

        Self { config, last_sent }
    }

    fn purge(&self, map: &mut HashMap<NotificationFingerprint, Instant>, now: Instant) {
        let len_before = map.len();
        map.retain(|_, sent_at| now.duration_since(*sent_at) < self.config.notification_lifespan);

        if map.len() < map.capacity() / 4 {
            let new_capacity = map.capacity() / 2;
            map.shrink_to(new_capacity);
        }

        let removed_entries = len_before - map.len();
        if removed_entries > 0 {
            tracing::trace!(removed_entries, "purged fingerprints");
        }
    }
}

#[async_trait]
impl NotificationsDeduplicationService for NotificationsDeduplicationServiceImpl {
    ///
    /// ### Errors
    /// - [Error::Duplicate] when notification with the same fingerprint
    ///   was marked as sent less than `duplicate_window` ago
    ///
    #[tracing::instrument(name = "Deduplication", skip_all, fields(%fingerprint))]
    async fn deduplicate(&self, fingerprint: &NotificationFingerprint) -> Result<(), Error> {
        tracing::trace!("deduplicating notification");

        let now = Instant::now();
        let mut last_sent = self.last_sent.lock().await;

        self.purge(&mut last_sent, now);

        match last_sent.get(fingerprint) {
            Some(sent_at) if now.duration_since(*sent_at) < self.config.duplicate_window => {
                tracing::debug!("duplicate notification suppressed");
                Err(Error::Duplicate)
            }
            _ => Ok(()),
        }
    }

    async fn mark_sent(&self, fingerprint: NotificationFingerprint) {
        let now = Instant::now();
        self.last_sent.lock().await.insert(fingerprint, now);
    }
}
