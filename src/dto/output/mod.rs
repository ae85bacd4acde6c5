mod notification;
mod notification_saved;

pub use notification::*;
pub use notification_saved::*;
