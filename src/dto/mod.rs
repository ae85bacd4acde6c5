//!
//! Module with all dtos that are passed between server, users
//! and the notifications sink
//!

mod agent_request_type;
mod earning_type;
mod notification_category;
mod notification_type;
mod transaction_status;
mod transaction_type;

pub mod input;
pub mod output;

pub use agent_request_type::*;
pub use earning_type::*;
pub use notification_category::*;
pub use notification_type::*;
pub use transaction_status::*;
pub use transaction_type::*;
