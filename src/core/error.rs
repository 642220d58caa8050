use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong while asking the model for a reply.
///
/// The `Display` text of each variant is meant to be shown to the end user
/// inline in the conversation, see [`CompletionClient::reply`](crate::CompletionClient::reply).
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Error: Missing OpenRouter API key. Set OPENROUTER_API_KEY or pass a key explicitly.")]
    MissingCredential,

    /// Non-retryable HTTP failure. `body` holds at most the first 500 characters.
    #[error("API Error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response format: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Error: Max retries exceeded after {attempts} attempts ({last_error}). Please try again in a moment.")]
    RetriesExhausted { attempts: u32, last_error: String },

    #[error("Unexpected error: {message}")]
    Unexpected {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}
