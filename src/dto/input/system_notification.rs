use crate::dto::NotificationType;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SystemNotification {
    pub user_id: u64,
    pub title: String,
    pub message: String,
    #[serde(default, rename = "type")]
    pub notification_type: NotificationType,
}
