//! Chat-completions client for no-match fallback replies.

use crate::config::FallbackConfig;
use hostline_dialog::FallbackOutcome;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// System instruction sent with every fallback request.
const SYSTEM_PROMPT: &str = "You are a friendly restaurant voice assistant. Keep responses short, clear, and helpful. Answer based on common restaurant context like hours, address, menu highlights, reservations, delivery, parking, payment, and kids options.";

/// Upper bound on reply length, in model tokens.
const MAX_REPLY_TOKENS: u32 = 120;

/// Sampling temperature for fallback replies.
const TEMPERATURE: f32 = 0.5;

/// Spoken base line when the model returns empty content.
const EMPTY_REPLY_LINE: &str = "I am sorry, I did not catch that.";

/// Sign-off appended to every generated reply.
const SIGN_OFF: &str = " Dhanyavaad!";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for the generative-fallback collaborator.
#[derive(Debug, Clone)]
pub struct FallbackClient {
    config: FallbackConfig,
    http: reqwest::Client,
}

impl FallbackClient {
    /// Builds a client with the request timeout from `config`.
    pub fn new(config: FallbackConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self { config, http }
    }

    /// Whether a credential is configured.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Requests a fallback reply for the given utterance.
    ///
    /// Never fails outward: every error condition maps to a
    /// [`FallbackOutcome`] variant and is logged here. Without a
    /// configured key this returns `Unconfigured` with no network call.
    pub async fn reply(&self, utterance: &str) -> FallbackOutcome {
        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::debug!("no fallback credential configured, skipping generative reply");
            return FallbackOutcome::Unconfigured;
        };

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: utterance,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_REPLY_TOKENS,
        };

        tracing::debug!(model = %self.config.model, "requesting generative fallback reply");

        let response = match self
            .http
            .post(&self.config.base_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::warn!(
                    timeout_secs = self.config.timeout_secs,
                    "fallback request timed out"
                );
                return FallbackOutcome::TimedOut;
            }
            Err(e) => {
                tracing::warn!(error = %e, "fallback request failed in transit");
                return FallbackOutcome::TransportError(e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "fallback API returned non-success");
            return FallbackOutcome::ApiError(status.as_u16());
        }

        let parsed: ChatResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "fallback response body was not valid JSON");
                return FallbackOutcome::TransportError(e.to_string());
            }
        };

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| EMPTY_REPLY_LINE.to_string());

        FallbackOutcome::Reply(format!("{content}{SIGN_OFF}"))
    }
}
