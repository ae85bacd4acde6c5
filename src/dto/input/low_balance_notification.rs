use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LowBalanceNotification {
    pub user_id: u64,
    pub balance: f64,
}
