//! HTTP client with bounded retries and exponential backoff.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::LlmError;

/// Number of response-body characters kept in [`LlmError::Api`].
pub const ERROR_BODY_PREFIX_CHARS: usize = 500;

/// Configuration for HTTP client resilience
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Timeout for a single attempt, including reading the body
    pub timeout: Duration,
    /// Retries after the first attempt; total requests are `max_retries + 1`
    pub max_retries: u32,
    /// Base duration for exponential backoff
    pub initial_retry_delay: Duration,
    /// Cap on the backoff duration
    pub max_retry_delay: Duration,
    /// Scale each delay by a random factor in 0.9..1.1
    pub jitter: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 4,
            initial_retry_delay: Duration::from_secs(1),
            max_retry_delay: Duration::from_secs(60),
            jitter: false,
        }
    }
}

impl HttpClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_retry_delay(mut self, delay: Duration) -> Self {
        self.initial_retry_delay = delay;
        self
    }

    pub fn with_max_retry_delay(mut self, delay: Duration) -> Self {
        self.max_retry_delay = delay;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Delay before the retry that follows the zero-based `attempt`:
    /// `initial_retry_delay * 2^attempt`, capped at `max_retry_delay`.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2_u32.saturating_pow(attempt);
        let delay = self
            .initial_retry_delay
            .saturating_mul(factor)
            .min(self.max_retry_delay);

        if !self.jitter {
            return delay;
        }

        // +/- 10% jitter (0.9 to 1.1), still bounded by the cap
        let jitter_factor = rand::random::<f64>() * 0.2 + 0.9;
        Duration::try_from_secs_f64(delay.as_secs_f64() * jitter_factor)
            .unwrap_or(self.max_retry_delay)
            .min(self.max_retry_delay)
    }
}

/// Why an attempt was considered transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryReason {
    /// The server answered with a 5xx status.
    ServerError { status: u16 },
    /// No usable response arrived: connection failure, timeout or a broken body.
    Network { message: String },
}

impl fmt::Display for RetryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryReason::ServerError { status } => write!(f, "HTTP {status}"),
            RetryReason::Network { message } => write!(f, "network error: {message}"),
        }
    }
}

/// Progress notification emitted while a request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    /// A transient failure happened and another attempt is scheduled after `delay`.
    /// `attempt` is the one-based number of the retry about to be made.
    Retrying {
        attempt: u32,
        max_retries: u32,
        delay: Duration,
        reason: RetryReason,
    },
    /// The request ended in an error; `message` is the error's display text.
    Failed { message: String },
}

impl fmt::Display for StatusUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusUpdate::Retrying { delay, reason, .. } => {
                let delay = format_delay(*delay);
                match reason {
                    RetryReason::ServerError { status } => {
                        write!(f, "Server is busy (HTTP {status}). Retrying in {delay}…")
                    }
                    RetryReason::Network { .. } => write!(f, "Network issue. Retrying in {delay}…"),
                }
            }
            StatusUpdate::Failed { message } => f.write_str(message),
        }
    }
}

fn format_delay(delay: Duration) -> String {
    if delay < Duration::from_secs(1) {
        format!("{}ms", delay.as_millis())
    } else {
        format!("{:.0}s", delay.as_secs_f64())
    }
}

/// Receiver for [`StatusUpdate`]s.
pub type StatusCallback = Arc<dyn Fn(&StatusUpdate) + Send + Sync>;

/// Shared HTTP client with retry logic and exponential backoff.
///
/// Holds no per-request state: the attempt counter lives inside each
/// [`post_json`](Self::post_json) call.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: HttpClientConfig, user_agent: Option<&str>) -> Result<Self, LlmError> {
        let default_ua = format!("routerchat/{}", env!("CARGO_PKG_VERSION"));
        let ua = user_agent.unwrap_or(&default_ua);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(ua)
            .build()
            .map_err(|e| LlmError::Unexpected {
                message: format!("Failed to build reqwest client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Make a POST request with JSON body and retry logic.
    ///
    /// Only `200 OK` counts as success. Retries on 5xx responses and transport
    /// failures with exponential backoff; any other status fails immediately.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body, on_status),
        fields(url = %url, max_retries = self.config.max_retries),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
        on_status: Option<&StatusCallback>,
    ) -> Result<Res, LlmError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let notify = |update: StatusUpdate| {
            if let Some(callback) = on_status {
                callback(&update);
            }
        };
        let fail = |err: LlmError| {
            notify(StatusUpdate::Failed {
                message: err.to_string(),
            });
            err
        };

        // Serialized once; every attempt resends the identical body.
        let body_value = serde_json::to_value(body).map_err(|e| {
            fail(LlmError::Unexpected {
                message: "Failed to serialize request body".to_string(),
                source: Some(Box::new(e)),
            })
        })?;

        let mut attempt: u32 = 0;

        loop {
            // Build request (must be rebuilt each attempt since .send() consumes it)
            let mut req_builder = self.client.post(url).json(&body_value);
            for (name, value) in headers {
                req_builder = req_builder.header(name, value);
            }

            let reason = match req_builder.send().await {
                Err(e) if e.is_builder() || e.is_redirect() => {
                    return Err(fail(LlmError::Unexpected {
                        message: format!("Failed to send request: {e}"),
                        source: Some(Box::new(e)),
                    }));
                }
                Err(e) => {
                    warn!(attempt, error = %e, timeout = e.is_timeout(), "HTTP request failed");
                    RetryReason::Network {
                        message: e.to_string(),
                    }
                }
                Ok(res) => {
                    let status = res.status();

                    if status == reqwest::StatusCode::OK {
                        match res.text().await {
                            Ok(text) => {
                                debug!(status = %status, attempt, "HTTP request successful");
                                return serde_json::from_str(&text).map_err(|e| {
                                    fail(LlmError::Decode {
                                        message: format!("Failed to parse API response: {e}"),
                                        source: Some(Box::new(e)),
                                    })
                                });
                            }
                            Err(e) => {
                                warn!(attempt, error = %e, "Failed to read response body");
                                RetryReason::Network {
                                    message: e.to_string(),
                                }
                            }
                        }
                    } else if status.is_server_error() {
                        warn!(attempt, status = %status, "API returned server error");
                        RetryReason::ServerError {
                            status: status.as_u16(),
                        }
                    } else {
                        let error_text = res
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        warn!(status = %status, "API returned non-retryable status");

                        return Err(fail(LlmError::Api {
                            status: status.as_u16(),
                            body: body_prefix(&error_text),
                        }));
                    }
                }
            };

            if attempt >= self.config.max_retries {
                return Err(fail(LlmError::RetriesExhausted {
                    attempts: attempt + 1,
                    last_error: reason.to_string(),
                }));
            }

            let delay = self.config.backoff_delay(attempt);
            attempt += 1;

            let update = StatusUpdate::Retrying {
                attempt,
                max_retries: self.config.max_retries,
                delay,
                reason,
            };
            warn!(attempt, delay_ms = delay.as_millis() as u64, "{update}");
            notify(update);

            tokio::time::sleep(delay).await;
        }
    }
}

/// First [`ERROR_BODY_PREFIX_CHARS`] characters of `text`, cut on a char boundary.
pub(crate) fn body_prefix(text: &str) -> String {
    text.chars().take(ERROR_BODY_PREFIX_CHARS).collect()
}
