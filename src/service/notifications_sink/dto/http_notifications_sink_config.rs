use reqwest::Url;
use std::time::Duration;

pub struct HttpNotificationsSinkConfig {
    pub url: Url,
    pub timeout: Duration,
}
