pub mod notifications_deduplication_service;
pub mod notifications_feed_service;
pub mod notifications_service;
pub mod notifications_sink;
