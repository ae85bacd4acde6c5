use crate::dto::{input, NotificationCategory, NotificationType};
use serde::Serialize;

///
/// Notification record persisted by the notifications sink
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub user_id: u64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub category: NotificationCategory,
    pub related_id: Option<u64>,
}

impl Notification {
    pub fn new(user_id: u64, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            message: message.into(),
            notification_type: NotificationType::default(),
            category: NotificationCategory::default(),
            related_id: None,
        }
    }

    pub fn with_type(mut self, notification_type: NotificationType) -> Self {
        self.notification_type = notification_type;
        self
    }

    pub fn with_category(mut self, category: NotificationCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_related_id(mut self, related_id: u64) -> Self {
        self.related_id = Some(related_id);
        self
    }
}

impl From<input::Notification> for Notification {
    fn from(value: input::Notification) -> Self {
        Self {
            user_id: value.user_id,
            title: value.title,
            message: value.message,
            notification_type: value.notification_type,
            category: value.category,
            related_id: value.related_id,
        }
    }
}
