mod dto;
mod http_notifications_sink;
mod notifications_sink;

pub use dto::{HttpNotificationsSinkConfig, SinkOutcome};
pub use http_notifications_sink::*;
pub use notifications_sink::*;
