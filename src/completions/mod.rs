//! Chat-completions request/response types and the retrying client.

pub mod client;
pub mod request;
pub mod response;

pub use client::CompletionClient;
