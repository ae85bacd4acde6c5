mod agent_notification;
mod earning_notification;
mod low_balance_notification;
mod notification;
mod system_notification;
mod transaction_notification;
mod welcome_notification;

pub use agent_notification::*;
pub use earning_notification::*;
pub use low_balance_notification::*;
pub use notification::*;
pub use system_notification::*;
pub use transaction_notification::*;
pub use welcome_notification::*;
