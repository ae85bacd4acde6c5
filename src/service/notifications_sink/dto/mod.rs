mod http_notifications_sink_config;
mod sink_outcome;

pub use http_notifications_sink_config::*;
pub use sink_outcome::*;
