use super::{format_amount, templates, NotificationsService, NotificationsServiceConfig};
use crate::{
    dto::{
        output, AgentRequestType, EarningType, NotificationCategory, NotificationType,
        TransactionStatus, TransactionType,
    },
    error::Error,
    service::{
        notifications_deduplication_service::{
            NotificationFingerprint, NotificationsDeduplicationService,
        },
        notifications_sink::{NotificationsSink, SinkOutcome},
    },
};
use axum::async_trait;
use std::sync::Arc;

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    deduplication_service: Arc<dyn NotificationsDeduplicationService>,
    sink: Arc<dyn NotificationsSink>,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        deduplication_service: Arc<dyn NotificationsDeduplicationService>,
        sink: Arc<dyn NotificationsSink>,
    ) -> Self {
        Self {
            config,
            deduplication_service,
            sink,
        }
    }

    fn validate(notification: &output::Notification) -> Result<(), Error> {
        if notification.user_id == 0 {
            return Err(Error::Validation("user_id must be positive"));
        }
        if notification.title.is_empty() {
            return Err(Error::Validation("title is empty"));
        }
        if notification.message.is_empty() {
            return Err(Error::Validation("message is empty"));
        }

        Ok(())
    }

    fn format_amount(&self, amount: f64) -> String {
        format_amount(amount, &self.config.currency_label)
    }

    async fn save(&self, notification: &output::Notification) -> Result<(), Error> {
        Self::validate(notification)?;

        let fingerprint = NotificationFingerprint::from(notification);
        self.deduplication_service.deduplicate(&fingerprint).await?;

        match self.sink.persist(notification).await? {
            SinkOutcome::Accepted => {
                // only confirmed notifications block later identical ones
                self.deduplication_service.mark_sent(fingerprint).await;
                Ok(())
            }
            SinkOutcome::Duplicate => Err(Error::Duplicate),
            SinkOutcome::Rejected => Err(Error::NotificationRejected),
        }
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    #[tracing::instrument(
        name = "Create notification",
        skip_all,
        fields(
            user_id = notification.user_id,
            category = %notification.category,
        )
    )]
    async fn create_notification(&self, notification: output::Notification) -> bool {
        tracing::info!("creating notification");
        tracing::trace!(?notification);

        match self.save(&notification).await {
            Ok(()) => {
                tracing::info!("created notification");
                true
            }
            Err(Error::Duplicate) => {
                tracing::debug!("notification is a duplicate");
                false
            }
            Err(err) => {
                tracing::warn!(%err, "notification not saved");
                false
            }
        }
    }

    async fn notify_transaction(
        &self,
        user_id: u64,
        transaction_type: TransactionType,
        amount: f64,
        status: TransactionStatus,
        additional_info: Option<String>,
    ) -> bool {
        let amount = self.format_amount(amount);
        let text = templates::transaction(transaction_type, status, &amount)
            .unwrap_or_else(|| templates::transaction_fallback(transaction_type, status))
            .with_additional_info(additional_info.as_deref());

        let notification = output::Notification::new(user_id, text.title, text.message)
            .with_type(status.into())
            .with_category(NotificationCategory::Transaction);

        self.create_notification(notification).await
    }

    async fn notify_earning(
        &self,
        user_id: u64,
        earning_type: EarningType,
        amount: f64,
        additional_info: Option<String>,
    ) -> bool {
        let amount = self.format_amount(amount);
        let text = templates::earning(earning_type, &amount)
            .with_additional_info(additional_info.as_deref());

        let notification = output::Notification::new(user_id, text.title, text.message)
            .with_type(NotificationType::Success)
            .with_category(NotificationCategory::Earning);

        self.create_notification(notification).await
    }

    async fn notify_system(
        &self,
        user_id: u64,
        title: String,
        message: String,
        notification_type: NotificationType,
    ) -> bool {
        let notification = output::Notification::new(user_id, title, message)
            .with_type(notification_type)
            .with_category(NotificationCategory::System);

        self.create_notification(notification).await
    }

    async fn notify_agent(
        &self,
        agent_id: u64,
        request_type: AgentRequestType,
        amount: f64,
        user_id: u64,
    ) -> bool {
        let amount = self.format_amount(amount);
        let text = templates::agent(request_type, &amount, user_id);

        let notification = output::Notification::new(agent_id, text.title, text.message)
            .with_type(NotificationType::Info)
            .with_category(NotificationCategory::Agent)
            .with_related_id(user_id);

        self.create_notification(notification).await
    }

    async fn notify_welcome(&self, user_id: u64, user_name: String) -> bool {
        let text = templates::welcome(&user_name);

        let notification = output::Notification::new(user_id, text.title, text.message)
            .with_type(NotificationType::Success)
            .with_category(NotificationCategory::System);

        self.create_notification(notification).await
    }

    async fn notify_low_balance(&self, user_id: u64, balance: f64) -> bool {
        // NaN is never below the threshold
        if balance.is_nan() || balance >= self.config.low_balance_threshold {
            tracing::trace!(user_id, balance, "balance not low");
            return false;
        }

        let balance = self.format_amount(balance);
        let text = templates::low_balance(&balance);

        let notification = output::Notification::new(user_id, text.title, text.message)
            .with_type(NotificationType::Warning)
            .with_category(NotificationCategory::System);

        self.create_notification(notification).await
    }
}
