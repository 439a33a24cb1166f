//! Decision policy: calibrated probability → verdict
//!
//! Stages, in order:
//!
//! ```text
//! P(human) ──▶ gray zone? ──yes──▶ Cannot Determine
//!                  │no
//!                  ▼
//!          P >= domain threshold ? Likely Human : Likely AI
//!
//! P(human) ──▶ base tier (ambiguity penalty, extremity bonus)
//!          ──▶ length override (<50 words LOW, <100 words caps at MEDIUM)
//! ```
//!
//! The gray zone wins over every domain threshold: a near-coin-flip never
//! produces a confident-sounding label.

pub mod confidence;
mod messages;
mod thresholds;

pub use messages::MessageTable;
pub use thresholds::{DomainThresholds, DEFAULT_THRESHOLD};

use crate::models::{Classification, ConfidenceTier, DomainHint};

/// Open interval of probabilities that are always reported as undecided.
pub const GRAY_ZONE: (f64, f64) = (0.45, 0.55);

/// Classification and confidence for one text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub classification: Classification,
    pub confidence: ConfidenceTier,
}

/// Applies thresholds, confidence tiering and message copy
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    thresholds: DomainThresholds,
    messages: MessageTable,
}

impl DecisionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: DomainThresholds) -> Self {
        Self {
            thresholds,
            messages: MessageTable::new(),
        }
    }

    pub fn thresholds(&self) -> &DomainThresholds {
        &self.thresholds
    }

    /// Decide classification and confidence.
    ///
    /// `raw_score` is carried for diagnostics only; the policy reads the
    /// calibrated probability.
    pub fn decide(
        &self,
        calibrated_prob: f64,
        raw_score: f64,
        word_count: usize,
        domain: Option<DomainHint>,
    ) -> Decision {
        let classification = self.classify(calibrated_prob, domain);
        let confidence = confidence::tier(calibrated_prob, word_count);

        tracing::debug!(
            calibrated_prob,
            raw_score,
            word_count,
            domain = domain.map(|d| d.as_str()).unwrap_or("unset"),
            classification = classification.label(),
            confidence = confidence.as_str(),
            "decision"
        );

        Decision {
            classification,
            confidence,
        }
    }

    /// Label from probability and domain threshold, gray zone first.
    pub fn classify(&self, calibrated_prob: f64, domain: Option<DomainHint>) -> Classification {
        if in_gray_zone(calibrated_prob) {
            Classification::CannotDetermine
        } else if self.thresholds.is_human(domain, calibrated_prob) {
            Classification::LikelyHuman
        } else {
            Classification::LikelyAi
        }
    }

    pub fn message(&self, decision: &Decision) -> &str {
        self.messages
            .get(decision.classification, decision.confidence)
    }
}

pub fn in_gray_zone(probability: f64) -> bool {
    probability > GRAY_ZONE.0 && probability < GRAY_ZONE.1
}
