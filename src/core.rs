pub mod credentials;
pub mod error;
pub mod http;
pub mod types;

pub use credentials::ApiKey;
pub use error::LlmError;
pub use http::{HttpClient, HttpClientConfig, RetryReason, StatusCallback, StatusUpdate};
pub use types::{ChatRole, Conversation, Message};
