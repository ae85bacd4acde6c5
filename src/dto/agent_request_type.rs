use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

///
/// Requests that payment agents handle on behalf of users
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AgentRequestType {
    Deposit,
    Withdrawal,
}
