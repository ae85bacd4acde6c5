use crate::dto::EarningType;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EarningNotification {
    pub user_id: u64,
    pub earning_type: EarningType,
    pub amount: f64,
    pub additional_info: Option<String>,
}
