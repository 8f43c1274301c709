//! Webhook handlers for the telephony provider's call-control events.
//!
//! Two logical endpoints: `/incoming-call` for the call-start event (no
//! utterance yet) and `/voice` for each speech-turn event. Both always
//! answer `200` with a TwiML document — a failed turn becomes a spoken
//! error reply rather than an HTTP error, so the provider never drops
//! the call.

use crate::AppState;
use axum::{
    body::Bytes,
    extract::Extension,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use futures_util::FutureExt;
use hostline_dialog::{classify, compose, Segment, Selection};
use serde::Deserialize;
use serde_json::{json, Value};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Spoken when a speech-turn handler fails unexpectedly.
const TURN_ERROR_LINE: &str =
    "Sorry, there was an error processing your request. Please try again.";

/// Spoken when the call-start handler fails unexpectedly.
const CALL_START_ERROR_LINE: &str = "Sorry, there was an error. Please try again later.";

/// One parsed call-control event. Fields the provider did not send
/// stay `None`; an unparseable body degrades to the default.
#[derive(Debug, Default, Deserialize)]
struct VoiceEvent {
    #[serde(rename = "SpeechResult", default)]
    speech_result: Option<String>,
}

/// Handler for `GET /`.
pub async fn index_handler() -> Json<Value> {
    Json(json!({ "message": "Restaurant Voice Bot is running!" }))
}

/// Handler for `GET|POST /incoming-call`.
///
/// Greets the caller and opens the first gather step. The trailing
/// no-input line only plays if the gather times out, and this path
/// never consults the fallback collaborator.
pub async fn incoming_call_handler() -> Response {
    tracing::info!("handling incoming call");
    guarded(async { xml_response(&compose::call_start()) }, CALL_START_ERROR_LINE).await
}

/// Handler for `POST /voice`.
///
/// Classifies the transcribed utterance and answers with one of the
/// three reply shapes: agent transfer, FAQ/intent answer, or fallback.
pub async fn voice_handler(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    guarded(voice_turn(state, headers, body), TURN_ERROR_LINE).await
}

async fn voice_turn(state: Arc<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let event = parse_event(&headers, &body);
    let utterance = event.speech_result.unwrap_or_default();

    tracing::info!(utterance = %utterance, "received speech turn");

    let selection = classify(&utterance, &state.faq);

    let segments = match &selection {
        Selection::AgentTransfer => compose::agent_transfer(state.support_number.as_deref()),
        Selection::NoMatch => {
            let outcome = state.fallback.reply(&utterance).await;
            compose::fallback(&outcome)
        }
        answered => compose::answer(answered.answer_text().unwrap_or_default()),
    };

    xml_response(&segments)
}

/// Runs a handler body, converting a panic into a minimal spoken error
/// reply with a success status so the call is not silently dropped.
async fn guarded(
    inner: impl std::future::Future<Output = Response>,
    error_line: &str,
) -> Response {
    match AssertUnwindSafe(inner).catch_unwind().await {
        Ok(response) => response,
        Err(_) => {
            tracing::error!("voice handler panicked, returning spoken error reply");
            xml_response(&[Segment::Say(error_line.to_string())])
        }
    }
}

/// Parses the webhook body, accepting both JSON and form encoding.
///
/// Content-type decides the first attempt; a JSON body that fails to
/// parse falls back to form decoding, and anything still unparseable
/// degrades to an empty event rather than failing the request.
fn parse_event(headers: &HeaderMap, body: &Bytes) -> VoiceEvent {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if content_type.contains("application/json") {
        match serde_json::from_slice(body) {
            Ok(event) => return event,
            Err(e) => {
                tracing::debug!(error = %e, "json body parse failed, trying form encoding");
            }
        }
    }

    serde_urlencoded::from_bytes(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "unparseable webhook body, treating as empty utterance");
        VoiceEvent::default()
    })
}

fn xml_response(segments: &[Segment]) -> Response {
    let twiml = hostline_twiml::render(segments);
    tracing::debug!(twiml = %twiml, "returning call-control markup");
    ([(header::CONTENT_TYPE, "application/xml")], twiml).into_response()
}
