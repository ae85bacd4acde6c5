//!
//! HTTP client for the platform backend.
//!
//! Requests are retried with exponential backoff, every attempt is bounded
//! by a timeout and successful responses can be cached for a short time.
//!

mod error;
mod request_client;
mod request_options;
mod response_cache;
mod retry;

pub use error::Error;
pub use request_client::{CachePolicy, RequestClient, RequestClientConfig};
pub use request_options::{Method, RequestOptions};
pub use response_cache::ResponseCache;
pub use retry::{backoff_for_attempt, retry};
