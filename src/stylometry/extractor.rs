//! Stylometric feature extraction
//!
//! Converts raw text into the ten-signal `FeatureVector`. Extraction never
//! fails: degenerate input maps to `FeatureVector::NEUTRAL`.

use std::collections::HashSet;

use super::features::FeatureVector;
use super::text;

/// Below this many word tokens the text is not measured at all.
pub const MIN_TOKENS: usize = 5;

/// Token window for entropy and type-token statistics.
pub const CHUNK_SIZE: usize = 50;

/// Closed-class function words counted by the stopword signal.
const STOPWORDS: &[&str] = &[
    "the", "and", "of", "to", "a", "in", "is", "that", "for", "it", "as", "was", "with", "on",
    "at", "by", "an", "be", "this", "which", "or", "from",
];

/// Extracts stylometric signatures from text
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    stopwords: HashSet<&'static str>,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Extract the feature vector for `text`.
    pub fn extract(&self, text: &str) -> FeatureVector {
        let sentences = text::split_sentences(text);
        let words = text::tokenize(text);

        if words.len() < MIN_TOKENS {
            return FeatureVector::NEUTRAL;
        }

        let n_words = words.len() as f64;
        let n_sentences = sentences.len() as f64;

        // 1. Rhythm
        let sentence_lengths: Vec<f64> = sentences
            .iter()
            .map(|s| text::count_words(s) as f64)
            .collect();
        let rhythm = text::variance(&sentence_lengths).ln_1p();

        // 2. Stopwords
        let stop_count = words
            .iter()
            .filter(|w| self.stopwords.contains(w.as_str()))
            .count();
        let stopword_ratio = stop_count as f64 / n_words;

        // 3-4. Chunked entropy and type-token ratio
        let chunks: Vec<&[String]> = words
            .chunks(CHUNK_SIZE)
            .filter(|c| !c.is_empty())
            .collect();
        let entropies: Vec<f64> = chunks.iter().map(|c| text::shannon_entropy(c)).collect();
        let ttrs: Vec<f64> = chunks.iter().map(|c| text::type_token_ratio(c)).collect();
        let entropy_variance = text::variance(&entropies);
        let segmented_ttr = text::mean(&ttrs);

        // 5. Sentence openers
        let opener_lengths: Vec<f64> = sentences
            .iter()
            .filter_map(|s| s.split_whitespace().next())
            .map(|w| w.chars().count() as f64)
            .collect();
        let opener_length_variance = text::variance(&opener_lengths);

        // 6-7. Punctuation
        let em_dashes = text.matches('\u{2014}').count() + text.matches("--").count();
        let em_dash_density = (em_dashes as f64).ln_1p();
        let structural = text.matches(';').count() + text.matches(':').count();
        let structural_punctuation = structural as f64 / (n_words + 1.0);

        // 8. Passive voice
        let passives = text::count_passive(&text.to_lowercase());
        let passive_voice = passives as f64 / (n_sentences + 1.0);

        // 9-10. Lexical shape
        let adverbs = words.iter().filter(|w| w.ends_with("ly")).count();
        let adverb_density = adverbs as f64 / (n_words + 1.0);
        let complex = words.iter().filter(|w| w.chars().count() > 6).count();
        let complex_word_density = complex as f64 / (n_words + 1.0);

        let features = FeatureVector {
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
        };

        if !features.is_finite() {
            tracing::warn!("Non-finite stylometric features, using neutral signature");
            return FeatureVector::NEUTRAL;
        }
        features
    }

    /// Number of features extracted
    pub fn feature_count(&self) -> usize {
        super::features::NUM_FEATURES
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
