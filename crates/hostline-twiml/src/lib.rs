//! Call-control markup adapter.
//!
//! Renders composer [`Segment`] sequences into the telephony provider's
//! TwiML response document. Segment order is preserved exactly: the
//! platform executes the document top to bottom, so a `Say` after a
//! `Gather` only runs if the gather times out without input.
//!
//! Gather steps post the transcription back to `/voice` with speech
//! input and a short speech timeout, re-invoking the webhook for the
//! next turn.

use hostline_dialog::Segment;

/// Webhook path a gather step posts the next utterance to.
const GATHER_ACTION: &str = "/voice";

/// Seconds of silence before the platform considers speech finished.
const GATHER_SPEECH_TIMEOUT_SECS: u32 = 3;

/// Renders segments into a complete TwiML `<Response>` document.
pub fn render(segments: &[Segment]) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response>");

    for segment in segments {
        match segment {
            Segment::Say(text) => {
                push_say(&mut out, text);
            }
            Segment::Dial(number) => {
                out.push_str("<Dial>");
                out.push_str(&escape(number));
                out.push_str("</Dial>");
            }
            Segment::Gather { prompts } => {
                out.push_str(&format!(
                    "<Gather input=\"speech\" action=\"{GATHER_ACTION}\" method=\"POST\" speechTimeout=\"{GATHER_SPEECH_TIMEOUT_SECS}\">"
                ));
                for prompt in prompts {
                    push_say(&mut out, prompt);
                }
                out.push_str("</Gather>");
            }
        }
    }

    out.push_str("</Response>");
    out
}

fn push_say(out: &mut String, text: &str) {
    out.push_str("<Say>");
    out.push_str(&escape(text));
    out.push_str("</Say>");
}

/// Escapes the five XML-reserved characters in text content.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
