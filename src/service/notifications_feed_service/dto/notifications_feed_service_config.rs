use std::time::Duration;

pub struct NotificationsFeedServiceConfig {
    pub cache_ttl: Duration,
}
