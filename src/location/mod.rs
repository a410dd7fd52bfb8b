mod client;
mod error;
mod http_client;
mod last_known_position;
mod retry;
mod service;

pub use client::LocationClient;
pub use error::RetrievalError;
pub use http_client::new_client;
pub use last_known_position::LastKnownPosition;
pub use retry::{RetryPolicy, retry_with_fixed_delay};
pub use service::LocationService;
