mod dto;
mod notifications_feed_service;
mod notifications_feed_service_impl;

pub use dto::NotificationsFeedServiceConfig;
pub use notifications_feed_service::*;
pub use notifications_feed_service_impl::*;
