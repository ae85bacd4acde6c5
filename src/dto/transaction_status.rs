use crate::dto::NotificationType;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl From<TransactionStatus> for NotificationType {
    fn from(value: TransactionStatus) -> Self {
        match value {
            TransactionStatus::Approved | TransactionStatus::Completed => NotificationType::Success,
            TransactionStatus::Rejected => NotificationType::Error,
            TransactionStatus::Pending => NotificationType::Info,
        }
    }
}
