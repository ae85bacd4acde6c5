use request_client::{RequestClient, RequestClientConfig};
use reqwest::Url;
use std::{sync::Once, time::Duration};
use tracing::level_filters::LevelFilter;
use wiremock::MockServer;

static INIT_TRACING_ONCE: Once = Once::new();

pub fn init_test_environment() {
    INIT_TRACING_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_target(false)
            .with_test_writer()
            .init();
    });
}

///
/// Client with short delays so retry tests do not take seconds
///
pub fn create_client(server: &MockServer) -> RequestClient {
    let config = RequestClientConfig {
        base_url: Some(Url::parse(&format!("{}/", server.uri())).unwrap()),
        max_attempts: 3,
        attempt_timeout: Duration::from_millis(500),
        backoff_base: Duration::from_millis(20),
    };

    RequestClient::new(config)
}
