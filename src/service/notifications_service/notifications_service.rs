use crate::dto::{
    output, AgentRequestType, EarningType, NotificationType, TransactionStatus, TransactionType,
};
use axum::async_trait;

///
/// Single choke point for user notifications.
///
/// Every function resolves to `true` only when the sink confirmed
/// that notification was saved. Failures are logged, never returned.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Save notification unless identical one was sent recently.
    ///
    /// ### Returns
    /// `false` when
    ///     - notification is invalid
    ///     - notification with the same user, title and message was saved recently
    ///     - sink reported duplicate or rejected notification
    ///     - sink could not be reached
    ///
    async fn create_notification(&self, notification: output::Notification) -> bool;

    async fn notify_transaction(
        &self,
        user_id: u64,
        transaction_type: TransactionType,
        amount: f64,
        status: TransactionStatus,
        additional_info: Option<String>,
    ) -> bool;

    async fn notify_earning(
        &self,
        user_id: u64,
        earning_type: EarningType,
        amount: f64,
        additional_info: Option<String>,
    ) -> bool;

    async fn notify_system(
        &self,
        user_id: u64,
        title: String,
        message: String,
        notification_type: NotificationType,
    ) -> bool;

    ///
    /// Notify agent about request created by the user
    ///
    async fn notify_agent(
        &self,
        agent_id: u64,
        request_type: AgentRequestType,
        amount: f64,
        user_id: u64,
    ) -> bool;

    async fn notify_welcome(&self, user_id: u64, user_name: String) -> bool;

    ///
    /// ### Returns
    /// `false` without contacting the sink when balance is not below the threshold
    ///
    async fn notify_low_balance(&self, user_id: u64, balance: f64) -> bool;
}
