mod notification_fingerprint;
mod notifications_deduplication_service_config;

pub use notification_fingerprint::*;
pub use notifications_deduplication_service_config::*;
