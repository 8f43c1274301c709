//! The FAQ table: an immutable ordered keyword → answer mapping.
//!
//! Iteration order determines match precedence when an utterance could
//! match more than one keyword, so entries are kept in a `Vec` rather
//! than a hash map. The table is built once at startup (either the
//! builtin restaurant set or entries from the config file) and never
//! mutated afterwards.

use serde::Deserialize;

/// A single keyword → canned answer pair.
///
/// Keywords are stored lowercase; matching is substring containment
/// against the lowercased utterance.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FaqEntry {
    pub keyword: String,
    pub answer: String,
}

/// Ordered, read-only FAQ lookup table.
#[derive(Debug, Clone)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
}

impl FaqTable {
    /// Builds a table from explicit entries, preserving their order.
    ///
    /// Keywords are lowercased here so [`FaqTable::lookup`] can assume
    /// both sides are already normalized.
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| FaqEntry {
                keyword: e.keyword.to_lowercase(),
                answer: e.answer,
            })
            .collect();
        Self { entries }
    }

    /// The builtin restaurant FAQ set.
    pub fn builtin() -> Self {
        let entries = [
            (
                "hours",
                "We're open Monday through Thursday from 11 AM to 10 PM, Friday and Saturday from 11 AM to 11 PM, and Sunday from 12 PM to 9 PM.",
            ),
            (
                "address",
                "We're located at 123 Main Street, Downtown District. We're right next to the Central Park, you can't miss us!",
            ),
            (
                "vegan",
                "Yes, we have a dedicated vegan menu with over 15 delicious options including our famous vegan burger, quinoa bowls, and dairy-free desserts.",
            ),
            (
                "reservation",
                "You can make reservations by calling us directly, booking online through our website, or using OpenTable. We recommend booking at least 24 hours in advance for weekend dining.",
            ),
            (
                "delivery",
                "We offer delivery through DoorDash, Uber Eats, and Grubhub. Delivery is available within a 5-mile radius and typically takes 30-45 minutes.",
            ),
            (
                "parking",
                "We have a complimentary valet parking service, and there's also a public parking garage two blocks away with reasonable rates.",
            ),
            (
                "payment",
                "We accept all major credit cards, Apple Pay, Google Pay, and cash. We also accept contactless payments for your convenience.",
            ),
            (
                "kids",
                "Absolutely! We're very family-friendly with a dedicated kids menu, high chairs, and booster seats available. Kids under 5 eat free on weekdays!",
            ),
        ];

        Self::new(
            entries
                .into_iter()
                .map(|(keyword, answer)| FaqEntry {
                    keyword: keyword.to_string(),
                    answer: answer.to_string(),
                })
                .collect(),
        )
    }

    /// Returns the answer for the first entry whose keyword occurs as a
    /// substring of `lowered` (an already-lowercased utterance).
    ///
    /// Substring containment is deliberate: a keyword embedded inside an
    /// unrelated word still matches ("kids" matches "kidstable"). That
    /// imprecision is accepted behavior, not something to fix with
    /// tokenization.
    pub fn lookup(&self, lowered: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| lowered.contains(e.keyword.as_str()))
            .map(|e| e.answer.as_str())
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FaqTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_expected_entries() {
        let table = FaqTable::builtin();
        assert_eq!(table.len(), 8);
        assert!(!table.is_empty());
    }

    #[test]
    fn lookup_matches_keyword_inside_sentence() {
        let table = FaqTable::builtin();
        let answer = table.lookup("what are your hours today").unwrap();
        assert!(answer.starts_with("We're open Monday through Thursday"));
    }

    #[test]
    fn lookup_matches_keyword_embedded_in_unrelated_word() {
        // Accepted imprecision of substring matching.
        let table = FaqTable::builtin();
        assert!(table.lookup("do you have a kidstable").is_some());
    }

    #[test]
    fn lookup_returns_none_for_unknown_text() {
        let table = FaqTable::builtin();
        assert_eq!(table.lookup("do you serve breakfast"), None);
    }

    #[test]
    fn iteration_order_decides_precedence() {
        let table = FaqTable::new(vec![
            FaqEntry {
                keyword: "wine".to_string(),
                answer: "first".to_string(),
            },
            FaqEntry {
                keyword: "wine list".to_string(),
                answer: "second".to_string(),
            },
        ]);
        assert_eq!(table.lookup("do you have a wine list"), Some("first"));
    }

    #[test]
    fn custom_keywords_are_lowercased_on_build() {
        let table = FaqTable::new(vec![FaqEntry {
            keyword: "Gluten".to_string(),
            answer: "yes".to_string(),
        }]);
        assert_eq!(table.lookup("any gluten free options"), Some("yes"));
    }
}
