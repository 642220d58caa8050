//! OpenRouter chat-completions configuration.

use crate::core::HttpClientConfig;
use crate::provider::constants::openrouter;

/// Fixed generation parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: openrouter::DEFAULT_MODEL.to_string(),
            temperature: openrouter::DEFAULT_TEMPERATURE,
            max_tokens: openrouter::DEFAULT_MAX_TOKENS,
        }
    }
}

/// Endpoint, headers and HTTP policy for talking to OpenRouter.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub base_url: String,
    /// Sent as `HTTP-Referer` for OpenRouter app attribution
    pub http_referer: Option<String>,
    /// Sent as `X-Title` for OpenRouter app attribution
    pub x_title: Option<String>,
    pub generation: GenerationConfig,
    pub http_config: HttpClientConfig,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            base_url: openrouter::API_BASE.to_string(),
            http_referer: None,
            x_title: None,
            generation: GenerationConfig::default(),
            http_config: HttpClientConfig::default(),
        }
    }
}

impl OpenRouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http_referer(mut self, http_referer: impl Into<String>) -> Self {
        self.http_referer = Some(http_referer.into());
        self
    }

    pub fn with_x_title(mut self, x_title: impl Into<String>) -> Self {
        self.x_title = Some(x_title.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.generation.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.generation.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.generation.max_tokens = max_tokens;
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    pub fn url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            openrouter::CHAT_COMPLETIONS_ENDPOINT
        )
    }

    pub fn auth_header(&self, api_key: &str) -> (String, String) {
        ("Authorization".to_string(), format!("Bearer {api_key}"))
    }

    pub fn extra_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::new();

        if let Some(referer) = &self.http_referer {
            headers.push(("HTTP-Referer".to_string(), referer.clone()));
        }

        if let Some(title) = &self.x_title {
            headers.push(("X-Title".to_string(), title.clone()));
        }

        headers
    }

    pub fn user_agent(&self) -> String {
        format!("routerchat/{}", env!("CARGO_PKG_VERSION"))
    }
}
