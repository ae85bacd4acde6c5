use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WelcomeNotification {
    pub user_id: u64,
    pub user_name: String,
}
