use crate::dto::{TransactionStatus, TransactionType};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TransactionNotification {
    pub user_id: u64,
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub status: TransactionStatus,
    pub additional_info: Option<String>,
}
