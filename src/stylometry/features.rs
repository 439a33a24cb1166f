//! Fixed-order stylometric feature vector
//!
//! Field order is the column order the scorer was trained with. Do not
//! reorder without retraining every model artifact.

use serde::{Deserialize, Serialize};

/// Number of stylometric signals.
pub const NUM_FEATURES: usize = 10;

/// Human-readable names for each signal, in extraction order.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "rhythm",
    "stopword_ratio",
    "entropy_variance",
    "segmented_ttr",
    "opener_length_variance",
    "em_dash_density",
    "structural_punctuation",
    "passive_voice",
    "adverb_density",
    "complex_word_density",
];

/// Ten-signal stylometric signature of a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// ln(1 + variance of words per sentence)
    pub rhythm: f64,
    /// Share of tokens that are closed-class function words
    pub stopword_ratio: f64,
    /// Variance of per-chunk Shannon entropy
    pub entropy_variance: f64,
    /// Mean type-token ratio across chunks
    pub segmented_ttr: f64,
    /// Variance of sentence-opener character lengths
    pub opener_length_variance: f64,
    /// ln(1 + em-dash and double-hyphen count)
    pub em_dash_density: f64,
    /// Semicolons and colons per word
    pub structural_punctuation: f64,
    /// be-verb + "-ed" matches per sentence
    pub passive_voice: f64,
    /// Share of tokens ending in "ly"
    pub adverb_density: f64,
    /// Share of tokens longer than six characters
    pub complex_word_density: f64,
}

impl FeatureVector {
    /// Typical-human signature returned for degenerate input.
    ///
    /// An all-zero vector reads as a strong machine signal to the scorer,
    /// so short snippets get these values instead. The constants are part
    /// of the contract with trained artifacts.
    pub const NEUTRAL: FeatureVector = FeatureVector {
        rhythm: 1.0,
        stopword_ratio: 0.45,
        entropy_variance: 0.0,
        segmented_ttr: 0.8,
        opener_length_variance: 2.0,
        em_dash_density: 0.0,
        structural_punctuation: 0.0,
        passive_voice: 0.0,
        adverb_density: 0.0,
        complex_word_density: 0.2,
    };

    pub fn from_array(values: [f64; NUM_FEATURES]) -> Self {
        let [rhythm, stopword_ratio, entropy_variance, segmented_ttr, opener_length_variance, em_dash_density, structural_punctuation, passive_voice, adverb_density, complex_word_density] =
            values;
        Self {
            rhythm,
            stopword_ratio,
            entropy_variance,
            segmented_ttr,
            opener_length_variance,
            em_dash_density,
            structural_punctuation,
            passive_voice,
            adverb_density,
            complex_word_density,
        }
    }

    /// Values in training column order.
    pub fn to_array(&self) -> [f64; NUM_FEATURES] {
        [
            self.rhythm,
            self.stopword_ratio,
            self.entropy_variance,
            self.segmented_ttr,
            self.opener_length_variance,
            self.em_dash_density,
            self.structural_punctuation,
            self.passive_voice,
            self.adverb_density,
            self.complex_word_density,
        ]
    }

    pub fn len(&self) -> usize {
        NUM_FEATURES
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// (name, value) pairs for logging and debugging.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_array())
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<FeatureVector> for [f64; NUM_FEATURES] {
    fn from(features: FeatureVector) -> Self {
        features.to_array()
    }
}
