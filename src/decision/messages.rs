//! User-facing explanation copy
//!
//! One template per (classification, confidence) pair, built once. This is
//! product copy, not a scientific claim; wording changes belong here only.

use std::collections::HashMap;

use crate::models::{Classification, ConfidenceTier};

const AMBIGUOUS: &str = "The text structure is ambiguous or too short for definitive analysis.";
const PREFIX: &str = "This text exhibits patterns";

/// Lookup table of result messages
#[derive(Debug, Clone)]
pub struct MessageTable {
    messages: HashMap<(Classification, ConfidenceTier), String>,
}

impl MessageTable {
    pub fn new() -> Self {
        let mut messages = HashMap::new();
        for &confidence in ConfidenceTier::all() {
            for &classification in Classification::all() {
                let text = match classification {
                    Classification::CannotDetermine => AMBIGUOUS.to_string(),
                    Classification::LikelyHuman => {
                        format!("{PREFIX} consistent with human writing. ({confidence} Confidence)")
                    }
                    Classification::LikelyAi => format!(
                        "{PREFIX} often found in AI-generated content. ({confidence} Confidence)"
                    ),
                };
                messages.insert((classification, confidence), text);
            }
        }
        Self { messages }
    }

    pub fn get(&self, classification: Classification, confidence: ConfidenceTier) -> &str {
        self.messages
            .get(&(classification, confidence))
            .map(String::as_str)
            .unwrap_or(AMBIGUOUS)
    }
}

impl Default for MessageTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_has_message() {
        let table = MessageTable::new();
        assert_eq!(table.messages.len(), 9);
    }

    #[test]
    fn test_copy() {
        let table = MessageTable::new();
        assert_eq!(
            table.get(Classification::LikelyHuman, ConfidenceTier::High),
            "This text exhibits patterns consistent with human writing. (HIGH Confidence)"
        );
        assert_eq!(
            table.get(Classification::LikelyAi, ConfidenceTier::Medium),
            "This text exhibits patterns often found in AI-generated content. (MEDIUM Confidence)"
        );
        for &tier in ConfidenceTier::all() {
            assert_eq!(table.get(Classification::CannotDetermine, tier), AMBIGUOUS);
        }
    }
}
