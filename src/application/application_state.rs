use super::ApplicationEnv;
use crate::service::{
    notifications_deduplication_service::{
        NotificationsDeduplicationServiceConfig, NotificationsDeduplicationServiceImpl,
    },
    notifications_feed_service::{
        NotificationsFeedService, NotificationsFeedServiceConfig, NotificationsFeedServiceImpl,
    },
    notifications_service::{
        NotificationsService, NotificationsServiceConfig, NotificationsServiceImpl,
    },
    notifications_sink::{HttpNotificationsSink, HttpNotificationsSinkConfig},
};
use axum::extract::FromRef;
use request_client::{RequestClient, RequestClientConfig};
use std::{sync::Arc, time::Duration};

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
    pub notifications_feed_service: Arc<dyn NotificationsFeedService>,
}

pub struct ApplicationStateToClose {
    pub request_client: RequestClient,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("creating request client");
    let config = RequestClientConfig {
        base_url: Some(env.backend_url.clone()),
        ..Default::default()
    };
    let request_client = RequestClient::new(config);

    tracing::info!("creating services");
    let deduplication_service =
        NotificationsDeduplicationServiceImpl::new(NotificationsDeduplicationServiceConfig::default());
    let deduplication_service = Arc::new(deduplication_service);

    let config = HttpNotificationsSinkConfig {
        url: env.notifications_sink_url.clone(),
        timeout: Duration::from_secs(10),
    };
    let sink = HttpNotificationsSink::new(config)?;
    let sink = Arc::new(sink);

    let config = NotificationsServiceConfig {
        currency_label: env.currency_label.clone(),
        ..Default::default()
    };
    let notifications_service = NotificationsServiceImpl::new(config, deduplication_service, sink);
    let notifications_service = Arc::new(notifications_service);

    let config = NotificationsFeedServiceConfig {
        cache_ttl: env.feed_cache_ttl,
    };
    let notifications_feed_service =
        NotificationsFeedServiceImpl::new(config, request_client.clone());
    let notifications_feed_service = Arc::new(notifications_feed_service);

    Ok((
        ApplicationState {
            notifications_service,
            notifications_feed_service,
        },
        ApplicationStateToClose { request_client },
    ))
}
