use crate::provider::constants::openrouter;

/// Where to look for the OpenRouter API key.
///
/// Resolution never fails: an unset or empty variable yields an empty key,
/// which [`CompletionClient::complete`](crate::CompletionClient::complete)
/// reports as [`LlmError::MissingCredential`](crate::LlmError::MissingCredential).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// Read `OPENROUTER_API_KEY` from the environment.
    Default,
    /// Read the named environment variable.
    Env(String),
    Raw(String),
}

impl ApiKey {
    pub fn resolve(&self) -> String {
        match self {
            ApiKey::Default => read_env(openrouter::API_KEY_ENV_VAR),
            ApiKey::Env(name) => read_env(name),
            ApiKey::Raw(key) => key.trim().to_string(),
        }
    }
}

fn read_env(name: &str) -> String {
    match std::env::var(name) {
        Ok(value) => value.trim().to_string(),
        Err(_) => {
            tracing::debug!(var = name, "API key environment variable not set");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_key_is_trimmed() {
        assert_eq!(ApiKey::Raw("  sk-or-1 \n".to_string()).resolve(), "sk-or-1");
    }

    #[test]
    fn unset_env_resolves_to_empty() {
        let key = ApiKey::Env("ROUTERCHAT_TEST_SURELY_UNSET_VAR".to_string());
        assert_eq!(key.resolve(), "");
    }
}
