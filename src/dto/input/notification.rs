use crate::dto::{NotificationCategory, NotificationType};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Notification {
    pub user_id: u64,
    pub title: String,
    pub message: String,
    #[serde(default, rename = "type")]
    pub notification_type: NotificationType,
    #[serde(default)]
    pub category: NotificationCategory,
    pub related_id: Option<u64>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn notification_json_deserialize_defaults() {
        let json = r#"{
            "user_id": 3,
            "title": "Lot purchased",
            "message": "You purchased lot #2"
        }"#;

        let notification = serde_json::from_str::<Notification>(json).unwrap();

        assert_eq!(notification.notification_type, NotificationType::Info);
        assert_eq!(notification.category, NotificationCategory::General);
        assert_eq!(notification.related_id, None);
    }

    #[test]
    fn notification_json_deserialize_type_and_category() {
        let json = r#"{
            "user_id": 3,
            "title": "Lot purchased",
            "message": "You purchased lot #2",
            "type": "success",
            "category": "transaction",
            "related_id": 41
        }"#;

        let notification = serde_json::from_str::<Notification>(json).unwrap();

        assert_eq!(notification.notification_type, NotificationType::Success);
        assert_eq!(notification.category, NotificationCategory::Transaction);
        assert_eq!(notification.related_id, Some(41));
    }

    #[test]
    fn notification_json_deserialize_unknown_type() {
        let json = r#"{
            "user_id": 3,
            "title": "t",
            "message": "m",
            "type": "fatal"
        }"#;

        let notification = serde_json::from_str::<Notification>(json);

        assert!(notification.is_err());
    }
}
