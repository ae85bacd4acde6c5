mod currency;
mod dto;
mod notifications_service;
mod notifications_service_impl;
mod templates;

pub use currency::format_amount;
pub use dto::NotificationsServiceConfig;
pub use notifications_service::*;
pub use notifications_service_impl::*;
