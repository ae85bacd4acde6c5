use super::{NotificationsFeedService, NotificationsFeedServiceConfig};
use crate::error::Error;
use axum::async_trait;
use request_client::{CachePolicy, RequestClient, RequestOptions};
use serde_json::Value;

pub struct NotificationsFeedServiceImpl {
    config: NotificationsFeedServiceConfig,
    request_client: RequestClient,
}

impl NotificationsFeedServiceImpl {
    pub fn new(config: NotificationsFeedServiceConfig, request_client: RequestClient) -> Self {
        Self {
            config,
            request_client,
        }
    }
}

#[async_trait]
impl NotificationsFeedService for NotificationsFeedServiceImpl {
    #[tracing::instrument(name = "Find notifications", skip(self))]
    async fn find_notifications(&self, user_id: u64) -> Result<Value, Error> {
        tracing::info!("finding notifications");

        let target = format!("notifications?user_id={user_id}");
        let options = RequestOptions::get().with_header("accept", "application/json");
        let cache_policy = CachePolicy::Use {
            ttl: self.config.cache_ttl,
        };

        let notifications = self
            .request_client
            .call(&target, &options, cache_policy)
            .await?;

        Ok(notifications)
    }
}
