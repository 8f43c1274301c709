//! Configuration for the generative-fallback collaborator.

use serde::Deserialize;
use std::fmt;

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

/// Settings for the chat-completions fallback client.
///
/// `api_key` is optional: without one the client answers
/// `Unconfigured` deterministically and never touches the network.
#[derive(Clone, Deserialize)]
pub struct FallbackConfig {
    /// API key for the chat-completions endpoint.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name sent with each request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Chat-completions endpoint URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for FallbackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackConfig")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
