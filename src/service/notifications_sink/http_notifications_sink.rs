use super::{HttpNotificationsSinkConfig, NotificationsSink, SinkOutcome};
use crate::{dto::output, error::Error};
use axum::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

///
/// Sink that persists notifications with a single HTTP POST.
/// It deliberately does not use the retrying request client.
///
pub struct HttpNotificationsSink {
    url: Url,
    http: Client,
}

impl HttpNotificationsSink {
    pub fn new(config: HttpNotificationsSinkConfig) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            url: config.url,
            http,
        })
    }
}

#[async_trait]
impl NotificationsSink for HttpNotificationsSink {
    #[tracing::instrument(name = "Persist notification", skip_all)]
    async fn persist(&self, notification: &output::Notification) -> Result<SinkOutcome, Error> {
        tracing::debug!("sending notification to sink");

        let response = self
            .http
            .post(self.url.clone())
            .json(notification)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::SinkStatus(status));
        }

        let body = response.text().await?;
        let sink_response = match body.is_empty() {
            true => Value::Null,
            false => serde_json::from_str(&body).map_err(Error::SinkResponseInvalid)?,
        };

        let outcome = SinkOutcome::from(&sink_response);
        tracing::debug!(?outcome, "sink responded");

        Ok(outcome)
    }
}
