use crate::dto::output;
use std::fmt;

///
/// Identity of a notification for duplicate detection.
/// Exact and case-sensitive concatenation of user id, title and message.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationFingerprint(String);

impl NotificationFingerprint {
    pub fn new(user_id: u64, title: &str, message: &str) -> Self {
        Self(format!("{user_id}-{title}-{message}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&output::Notification> for NotificationFingerprint {
    fn from(value: &output::Notification) -> Self {
        Self::new(value.user_id, &value.title, &value.message)
    }
}

impl fmt::Display for NotificationFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
