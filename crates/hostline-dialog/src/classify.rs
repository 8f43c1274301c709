//! Keyword classifier over one transcribed utterance.
//!
//! Stateless and side-effect-free: each turn is classified on its own,
//! with no memory of earlier turns. Matching is case-insensitive
//! substring containment in a strict precedence order; first match wins.

use crate::faq::FaqTable;

/// Fixed reply for the specials intent.
pub const SPECIALS_RESPONSE: &str = "Today's specials are: Chef's butter chicken with basmati rice, grilled paneer tikka, and mango lassi. Would you like to hear more or place an order?";

/// Fixed reply for the takeout-order intent.
pub const ORDER_RESPONSE: &str = "Great, I can help start a takeout order. Please say the items you want, or say agent to talk to a human.";

/// The outcome of classifying one utterance.
///
/// Produced by [`classify`] and consumed immediately by the composer
/// within the same request; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Nothing matched (or the utterance was empty).
    NoMatch,
    /// The caller asked for a human.
    AgentTransfer,
    /// The caller asked about today's specials.
    Specials,
    /// The caller wants to place a takeout/pickup order.
    Order,
    /// A FAQ keyword matched; carries the configured answer text.
    Faq(String),
}

impl Selection {
    /// The text to speak for this selection, if it carries one.
    ///
    /// `NoMatch` and `AgentTransfer` have no answer text; they are
    /// handled by dedicated composer paths.
    pub fn answer_text(&self) -> Option<&str> {
        match self {
            Selection::Specials => Some(SPECIALS_RESPONSE),
            Selection::Order => Some(ORDER_RESPONSE),
            Selection::Faq(text) => Some(text),
            Selection::NoMatch | Selection::AgentTransfer => None,
        }
    }
}

/// Classifies one utterance against the intent keywords and the FAQ table.
///
/// Precedence, first match wins:
/// 1. empty utterance → [`Selection::NoMatch`]
/// 2. "agent" → [`Selection::AgentTransfer`]
/// 3. "special" → [`Selection::Specials`]
/// 4. "order" / "takeout" / "pickup" → [`Selection::Order`]
/// 5. FAQ table scan in table order → [`Selection::Faq`]
/// 6. otherwise [`Selection::NoMatch`]
pub fn classify(utterance: &str, faq: &FaqTable) -> Selection {
    if utterance.is_empty() {
        return Selection::NoMatch;
    }

    let lowered = utterance.to_lowercase();
    tracing::debug!(utterance = %utterance, "classifying utterance");

    if lowered.contains("agent") {
        tracing::debug!("agent keyword detected");
        return Selection::AgentTransfer;
    }

    if lowered.contains("special") {
        tracing::debug!("specials keyword detected");
        return Selection::Specials;
    }

    if lowered.contains("order") || lowered.contains("takeout") || lowered.contains("pickup") {
        tracing::debug!("order intent detected");
        return Selection::Order;
    }

    if let Some(answer) = faq.lookup(&lowered) {
        tracing::debug!("faq keyword matched");
        return Selection::Faq(answer.to_string());
    }

    tracing::debug!("no keyword or faq match");
    Selection::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::FaqTable;

    fn table() -> FaqTable {
        FaqTable::builtin()
    }

    #[test]
    fn empty_utterance_is_no_match() {
        assert_eq!(classify("", &table()), Selection::NoMatch);
    }

    #[test]
    fn agent_matches_any_case_and_position() {
        assert_eq!(classify("AGENT", &table()), Selection::AgentTransfer);
        assert_eq!(
            classify("I would like an Agent please", &table()),
            Selection::AgentTransfer
        );
        assert_eq!(
            classify("urgent agent now", &table()),
            Selection::AgentTransfer
        );
    }

    #[test]
    fn agent_wins_over_other_keywords() {
        // "agent" is checked before "special" and before the FAQ scan.
        assert_eq!(
            classify("agent, what are the specials", &table()),
            Selection::AgentTransfer
        );
        assert_eq!(
            classify("agent, what are your hours", &table()),
            Selection::AgentTransfer
        );
    }

    #[test]
    fn specials_keyword_yields_specials_intent() {
        let sel = classify("tell me about today's specials", &table());
        assert_eq!(sel, Selection::Specials);
        assert_eq!(sel.answer_text(), Some(SPECIALS_RESPONSE));
    }

    #[test]
    fn special_wins_over_order() {
        assert_eq!(
            classify("can I order the special", &table()),
            Selection::Specials
        );
    }

    #[test]
    fn order_takeout_and_pickup_all_yield_order_intent() {
        assert_eq!(
            classify("I want to place an order", &table()),
            Selection::Order
        );
        assert_eq!(classify("do you do takeout", &table()), Selection::Order);
        assert_eq!(
            classify("can I pickup some food", &table()),
            Selection::Order
        );
    }

    #[test]
    fn faq_lookup_is_substring_based() {
        let sel = classify("what are your hours today", &table());
        match sel {
            Selection::Faq(answer) => {
                assert!(answer.starts_with("We're open Monday through Thursday"));
            }
            other => panic!("expected Faq, got {other:?}"),
        }
    }

    #[test]
    fn kids_keyword_matches_inside_unrelated_word() {
        // Naive substring matching is preserved deliberately.
        assert!(matches!(
            classify("is there a kidstable", &table()),
            Selection::Faq(_)
        ));
    }

    #[test]
    fn unmatched_non_empty_text_is_no_match() {
        assert_eq!(
            classify("do you serve breakfast burritos", &table()),
            Selection::NoMatch
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let a = classify("can I bring my kids", &table());
        let b = classify("can I bring my kids", &table());
        assert_eq!(a, b);
    }
}
