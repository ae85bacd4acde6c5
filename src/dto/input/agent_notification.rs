use crate::dto::AgentRequestType;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AgentNotification {
    pub agent_id: u64,
    pub request_type: AgentRequestType,
    pub amount: f64,
    /// User that created the request
    pub user_id: u64,
}
