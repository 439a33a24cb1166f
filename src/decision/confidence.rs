//! Confidence tiering
//!
//! A base tier from how decisive the calibrated probability is, then a
//! length override that caps confidence for short samples.

use crate::models::ConfidenceTier;

const BASE_CONFIDENCE: f64 = 0.5;
const AMBIGUITY_PENALTY: f64 = 0.5;
const EXTREMITY_BONUS: f64 = 0.3;

/// Probabilities inside this closed band get the ambiguity penalty.
const PENALTY_BAND: (f64, f64) = (0.40, 0.60);
/// Probabilities beyond these get the extremity bonus.
const EXTREME_LOW: f64 = 0.15;
const EXTREME_HIGH: f64 = 0.85;

const HIGH_CUTOFF: f64 = 0.7;
const LOW_CUTOFF: f64 = 0.3;

/// Below this many words confidence is always LOW.
pub const MIN_WORDS_ANY_CONFIDENCE: usize = 50;
/// Below this many words confidence is capped at MEDIUM.
pub const MIN_WORDS_HIGH_CONFIDENCE: usize = 100;

/// Raw confidence scalar for a calibrated probability.
pub fn confidence_score(probability: f64) -> f64 {
    let mut score = BASE_CONFIDENCE;
    if (PENALTY_BAND.0..=PENALTY_BAND.1).contains(&probability) {
        score -= AMBIGUITY_PENALTY;
    }
    if probability > EXTREME_HIGH || probability < EXTREME_LOW {
        score += EXTREMITY_BONUS;
    }
    score
}

/// Tier from probability alone, before the length override.
pub fn base_tier(probability: f64) -> ConfidenceTier {
    let score = confidence_score(probability);
    if score > HIGH_CUTOFF {
        ConfidenceTier::High
    } else if score < LOW_CUTOFF {
        ConfidenceTier::Low
    } else {
        ConfidenceTier::Medium
    }
}

/// Short samples carry weak signal no matter how extreme the score is.
pub fn apply_length_override(tier: ConfidenceTier, word_count: usize) -> ConfidenceTier {
    if word_count < MIN_WORDS_ANY_CONFIDENCE {
        ConfidenceTier::Low
    } else if word_count < MIN_WORDS_HIGH_CONFIDENCE && tier == ConfidenceTier::High {
        ConfidenceTier::Medium
    } else {
        tier
    }
}

/// Final tier for a probability and sample length.
pub fn tier(probability: f64, word_count: usize) -> ConfidenceTier {
    apply_length_override(base_tier(probability), word_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tiers() {
        assert_eq!(base_tier(0.50), ConfidenceTier::Low);
        assert_eq!(base_tier(0.40), ConfidenceTier::Low);
        assert_eq!(base_tier(0.60), ConfidenceTier::Low);
        assert_eq!(base_tier(0.30), ConfidenceTier::Medium);
        assert_eq!(base_tier(0.80), ConfidenceTier::Medium);
        assert_eq!(base_tier(0.85), ConfidenceTier::Medium);
        assert_eq!(base_tier(0.92), ConfidenceTier::High);
        assert_eq!(base_tier(0.10), ConfidenceTier::High);
        assert_eq!(base_tier(0.0), ConfidenceTier::High);
        assert_eq!(base_tier(1.0), ConfidenceTier::High);
    }

    #[test]
    fn test_length_override() {
        for t in ConfidenceTier::all() {
            assert_eq!(apply_length_override(*t, 0), ConfidenceTier::Low);
            assert_eq!(apply_length_override(*t, 49), ConfidenceTier::Low);
        }
        assert_eq!(apply_length_override(ConfidenceTier::High, 50), ConfidenceTier::Medium);
        assert_eq!(apply_length_override(ConfidenceTier::High, 99), ConfidenceTier::Medium);
        assert_eq!(apply_length_override(ConfidenceTier::Medium, 80), ConfidenceTier::Medium);
        assert_eq!(apply_length_override(ConfidenceTier::Low, 80), ConfidenceTier::Low);
        assert_eq!(apply_length_override(ConfidenceTier::High, 100), ConfidenceTier::High);
    }

    #[test]
    fn test_monotonic_upper_range() {
        let mut prev = ConfidenceTier::Low;
        for i in 80..=96 {
            let t = tier(i as f64 / 100.0, 150);
            assert!(t >= prev, "tier dropped at {i}");
            prev = t;
        }
        assert_eq!(prev, ConfidenceTier::High);
    }
}
