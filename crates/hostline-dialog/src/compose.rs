//! Reply composer: turns a [`Selection`](crate::Selection) into an
//! ordered sequence of response segments.
//!
//! Segments are plain tagged values; serializing them into the
//! provider's call-control markup is the transport adapter's job
//! (`hostline-twiml`). This keeps the turn logic independent of the
//! wire format.
//!
//! Composing never fails. The only collaborator that can fail — the
//! generative fallback — reports through [`FallbackOutcome`], and a
//! single substitution rule in [`fallback`] maps every failure variant
//! to fixed text.

/// Greeting spoken when a call first connects.
pub const WELCOME_LINE: &str = "Welcome to our restaurant! How can I help you today?";

/// Prompt spoken inside the call-start gather step.
pub const BEEP_PROMPT: &str = "Please speak your question after the beep.";

/// Spoken if the call-start gather times out with no input.
pub const NO_INPUT_LINE: &str = "I didn't hear anything. Please call back and try again.";

/// Follow-up prompt appended after every FAQ/intent answer.
pub const FOLLOW_UP_PROMPT: &str =
    "Would you like to make a reservation, hear today's specials, or place an order?";

/// Spoken before transferring to a human.
pub const CONNECTING_LINE: &str = "Connecting you to a human";

/// Spoken instead of dialing when no support number is configured.
pub const NO_SUPPORT_NUMBER_LINE: &str = "Sorry, no support number is configured";

/// Spoken on no-match when no generative fallback is configured.
pub const REPEAT_PROMPT: &str = "Sorry, could you repeat that? Or say agent to talk to a human.";

/// Spoken when the generative fallback fails for any reason.
pub const APOLOGY_LINE: &str = "I am sorry, I did not catch that. Please try again. Dhanyavaad!";

/// One instruction for the telephony platform.
///
/// The composer emits these in the exact order they should appear in
/// the rendered markup.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Speak the given text to the caller.
    Say(String),
    /// Transfer the call to the given number.
    Dial(String),
    /// Prompt (optionally), listen for speech, and re-invoke the
    /// webhook with the transcription.
    Gather {
        /// Prompts spoken inside the gather step, before listening.
        prompts: Vec<String>,
    },
}

impl Segment {
    fn say(text: impl Into<String>) -> Self {
        Segment::Say(text.into())
    }

    fn gather_next() -> Self {
        Segment::Gather {
            prompts: Vec::new(),
        }
    }
}

/// Result of one generative-fallback invocation.
///
/// Produced by the fallback client and consumed by [`fallback`]; the
/// collaborator never surfaces an error any other way.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackOutcome {
    /// The collaborator produced a usable reply.
    Reply(String),
    /// No credential is configured; the collaborator was not invoked.
    Unconfigured,
    /// The request exceeded the bounded timeout.
    TimedOut,
    /// The request failed in transit.
    TransportError(String),
    /// The collaborator answered with a non-success status.
    ApiError(u16),
}

/// Composes the call-start turn (no utterance yet).
///
/// The trailing no-input line is only reached if the gather step times
/// out without hearing anything.
pub fn call_start() -> Vec<Segment> {
    vec![
        Segment::say(WELCOME_LINE),
        Segment::Gather {
            prompts: vec![BEEP_PROMPT.to_string()],
        },
        Segment::say(NO_INPUT_LINE),
    ]
}

/// Composes the agent-transfer reply. Terminal for the turn: no gather
/// follows, the call either dials out or ends.
pub fn agent_transfer(support_number: Option<&str>) -> Vec<Segment> {
    match support_number {
        Some(number) => vec![
            Segment::say(CONNECTING_LINE),
            Segment::Dial(number.to_string()),
        ],
        None => vec![
            Segment::say(CONNECTING_LINE),
            Segment::say(NO_SUPPORT_NUMBER_LINE),
        ],
    }
}

/// Composes a FAQ/intent answer: the answer text, the fixed follow-up
/// prompt, then a fresh gather step for the next utterance.
pub fn answer(text: &str) -> Vec<Segment> {
    vec![
        Segment::say(text),
        Segment::say(FOLLOW_UP_PROMPT),
        Segment::gather_next(),
    ]
}

/// Composes the no-match reply from a fallback outcome.
///
/// The substitution rule: a usable reply is spoken as-is; an
/// unconfigured collaborator degrades to the fixed repeat prompt; every
/// failure degrades to the fixed apology. In all cases the turn stays
/// open with a fresh gather step.
pub fn fallback(outcome: &FallbackOutcome) -> Vec<Segment> {
    let text = match outcome {
        FallbackOutcome::Reply(text) => text.as_str(),
        FallbackOutcome::Unconfigured => REPEAT_PROMPT,
        FallbackOutcome::TimedOut
        | FallbackOutcome::TransportError(_)
        | FallbackOutcome::ApiError(_) => APOLOGY_LINE,
    };

    vec![Segment::say(text), Segment::gather_next()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, ORDER_RESPONSE};
    use crate::faq::FaqTable;

    #[test]
    fn call_start_sequence_is_welcome_gather_no_input() {
        let segments = call_start();
        assert_eq!(
            segments,
            vec![
                Segment::Say(WELCOME_LINE.to_string()),
                Segment::Gather {
                    prompts: vec![BEEP_PROMPT.to_string()],
                },
                Segment::Say(NO_INPUT_LINE.to_string()),
            ]
        );
    }

    #[test]
    fn agent_transfer_dials_when_number_configured() {
        let segments = agent_transfer(Some("+15551230000"));
        assert_eq!(
            segments,
            vec![
                Segment::Say(CONNECTING_LINE.to_string()),
                Segment::Dial("+15551230000".to_string()),
            ]
        );
    }

    #[test]
    fn agent_transfer_without_number_speaks_notice_and_never_dials() {
        let segments = agent_transfer(None);
        assert_eq!(
            segments,
            vec![
                Segment::Say(CONNECTING_LINE.to_string()),
                Segment::Say(NO_SUPPORT_NUMBER_LINE.to_string()),
            ]
        );
        assert!(!segments.iter().any(|s| matches!(s, Segment::Dial(_))));
    }

    #[test]
    fn answer_speaks_text_then_follow_up_then_gathers() {
        let segments = answer("the answer");
        assert_eq!(
            segments,
            vec![
                Segment::Say("the answer".to_string()),
                Segment::Say(FOLLOW_UP_PROMPT.to_string()),
                Segment::Gather {
                    prompts: Vec::new()
                },
            ]
        );
    }

    #[test]
    fn order_scenario_produces_order_prompt_then_gather() {
        // "I want to place an order" → Order intent → spoken prompt + gather.
        let sel = classify("I want to place an order", &FaqTable::builtin());
        let segments = answer(sel.answer_text().unwrap());
        assert_eq!(segments[0], Segment::Say(ORDER_RESPONSE.to_string()));
        assert!(matches!(segments.last(), Some(Segment::Gather { .. })));
    }

    #[test]
    fn kids_scenario_speaks_faq_answer_then_follow_up() {
        let sel = classify("can I bring my kids", &FaqTable::builtin());
        let text = sel.answer_text().unwrap().to_string();
        let segments = answer(&text);
        assert!(text.starts_with("Absolutely!"));
        assert_eq!(segments[1], Segment::Say(FOLLOW_UP_PROMPT.to_string()));
    }

    #[test]
    fn fallback_reply_is_spoken_verbatim() {
        let segments = fallback(&FallbackOutcome::Reply("We close at ten. Dhanyavaad!".into()));
        assert_eq!(
            segments[0],
            Segment::Say("We close at ten. Dhanyavaad!".to_string())
        );
        assert!(matches!(segments.last(), Some(Segment::Gather { .. })));
    }

    #[test]
    fn fallback_unconfigured_uses_repeat_prompt() {
        let segments = fallback(&FallbackOutcome::Unconfigured);
        assert_eq!(segments[0], Segment::Say(REPEAT_PROMPT.to_string()));
    }

    #[test]
    fn fallback_failures_all_use_apology_verbatim() {
        for outcome in [
            FallbackOutcome::TimedOut,
            FallbackOutcome::TransportError("connection reset".into()),
            FallbackOutcome::ApiError(500),
        ] {
            let segments = fallback(&outcome);
            assert_eq!(
                segments[0],
                Segment::Say(APOLOGY_LINE.to_string()),
                "outcome {outcome:?} must degrade to the apology"
            );
        }
    }
}
