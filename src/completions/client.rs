//! Completion request client.
//!
//! Turns a [`Conversation`] plus an API key into a single reply string,
//! retrying transient failures through [`HttpClient`].

use std::sync::Arc;

use crate::{
    completions::{
        request::{Request, RequestMessage},
        response::Response,
    },
    core::{Conversation, HttpClient, LlmError, StatusCallback, StatusUpdate},
    provider::OpenRouterConfig,
};

/// Client for the OpenRouter chat-completions endpoint.
///
/// The client is stateless between calls: every [`complete`](Self::complete)
/// owns its own retry counter, so it can be reused for any number of
/// sequential requests.
#[derive(Clone)]
pub struct CompletionClient {
    config: OpenRouterConfig,
    http: HttpClient,
    on_status: Option<StatusCallback>,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("config", &self.config)
            .field("on_status", &self.on_status.is_some())
            .finish()
    }
}

impl CompletionClient {
    /// Create a new completion client with the given configuration.
    pub fn new(config: OpenRouterConfig) -> Result<Self, LlmError> {
        let user_agent = config.user_agent();
        let http = HttpClient::new(config.http_config.clone(), Some(&user_agent))?;

        Ok(Self {
            config,
            http,
            on_status: None,
        })
    }

    /// Configuration this client was built with. The HTTP policy is fixed at
    /// construction; build a new client to change it.
    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    /// Register a callback that receives retry and failure notifications.
    pub fn on_status<F>(mut self, callback: F) -> Self
    where
        F: Fn(&StatusUpdate) + Send + Sync + 'static,
    {
        self.on_status = Some(Arc::new(callback));
        self
    }

    /// Send the conversation and return the first completion's text.
    ///
    /// An empty or whitespace-only `api_key` fails with
    /// [`LlmError::MissingCredential`] without touching the network.
    #[tracing::instrument(
        name = "complete",
        skip(self, api_key, conversation),
        fields(
            model = %self.config.generation.model,
            messages = conversation.len()
        ),
        err
    )]
    pub async fn complete(
        &self,
        api_key: &str,
        conversation: &Conversation,
    ) -> Result<String, LlmError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            if let Some(callback) = &self.on_status {
                callback(&StatusUpdate::Failed {
                    message: LlmError::MissingCredential.to_string(),
                });
            }
            return Err(LlmError::MissingCredential);
        }

        let generation = &self.config.generation;
        let request = Request {
            model: &generation.model,
            messages: conversation.iter().map(RequestMessage::from).collect(),
            temperature: generation.temperature,
            max_tokens: generation.max_tokens,
        };

        let mut headers = vec![self.config.auth_header(api_key)];
        headers.extend(self.config.extra_headers());

        let response: Response = self
            .http
            .post_json(&self.config.url(), &headers, &request, self.on_status.as_ref())
            .await?;

        response.into_first_content().ok_or_else(|| {
            let err = LlmError::Decode {
                message: "response contained no choices".to_string(),
                source: None,
            };
            if let Some(callback) = &self.on_status {
                callback(&StatusUpdate::Failed {
                    message: err.to_string(),
                });
            }
            err
        })
    }

    /// Like [`complete`](Self::complete), but resolves every error to its
    /// display text so it can be shown inline as the assistant's reply.
    pub async fn reply(&self, api_key: &str, conversation: &Conversation) -> String {
        self.complete(api_key, conversation)
            .await
            .unwrap_or_else(|e| e.to_string())
    }
}
