//! Generative-fallback collaborator client.
//!
//! Invoked only when the classifier finds no keyword or FAQ match. The
//! client calls an OpenAI-style chat-completions endpoint with a fixed
//! system instruction and the raw utterance, bounded by a short
//! timeout.
//!
//! The collaborator is optional and untrusted: a missing credential is
//! a valid configuration, and every failure mode is reported through
//! [`FallbackOutcome`](hostline_dialog::FallbackOutcome) rather than an
//! error type, so a failed call can never propagate to the caller.

pub mod client;
pub mod config;

pub use client::FallbackClient;
pub use config::FallbackConfig;
