//! # routerchat
//!
//! Send a chat conversation to OpenRouter and get the reply back as a string,
//! with bounded exponential-backoff retries on transient failures.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use routerchat::{ApiKey, CompletionClient, Conversation, OpenRouterConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CompletionClient::new(OpenRouterConfig::default())?
//!         .on_status(|update| eprintln!("{update}"));
//!
//!     let mut conversation = Conversation::with_system_prompt("You are helpful").with_max_len(30);
//!     conversation.push_user("Hello");
//!
//!     let reply = client.reply(&ApiKey::Default.resolve(), &conversation).await;
//!     conversation.push_assistant(reply);
//!     Ok(())
//! }
//! ```
//!
//! ## Retry policy
//!
//! 5xx responses, connection failures and timeouts are retried up to
//! [`HttpClientConfig::max_retries`] times, waiting `initial_retry_delay * 2^attempt`
//! between attempts. Every other non-success status fails immediately with
//! [`LlmError::Api`].

pub mod completions;
pub mod core;
pub mod provider;

pub use completions::CompletionClient;
pub use core::{
    ApiKey, ChatRole, Conversation, HttpClientConfig, LlmError, Message, RetryReason,
    StatusCallback, StatusUpdate,
};
pub use provider::{GenerationConfig, OpenRouterConfig};
