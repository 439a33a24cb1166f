//! Linear regressor over standardized stylometric features
//!
//! Architecture: FeatureVector → standardize → × block weight → dot(weights) + intercept
//!
//! The block weight upweights the stylometric signals relative to the
//! lexical blocks they were trained alongside (2.5 in the shipped models).

use serde::{Deserialize, Serialize};

use super::Scorer;
use crate::error::{DetectorError, Result};
use crate::stylometry::{FeatureExtractor, FeatureVector, NUM_FEATURES};

fn default_block_weight() -> f64 {
    1.0
}

/// Stylometry-only linear scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearScorer {
    /// Per-feature mean removed before scaling
    mean: [f64; NUM_FEATURES],
    /// Per-feature scale; zero entries are treated as 1
    scale: [f64; NUM_FEATURES],
    /// Regression coefficients in feature order
    weights: [f64; NUM_FEATURES],
    intercept: f64,
    #[serde(default = "default_block_weight")]
    block_weight: f64,
    #[serde(skip)]
    extractor: FeatureExtractor,
}

impl LinearScorer {
    pub fn new(
        mean: [f64; NUM_FEATURES],
        scale: [f64; NUM_FEATURES],
        weights: [f64; NUM_FEATURES],
        intercept: f64,
    ) -> Self {
        Self {
            mean,
            scale,
            weights,
            intercept,
            block_weight: default_block_weight(),
            extractor: FeatureExtractor::new(),
        }
    }

    pub fn with_block_weight(mut self, block_weight: f64) -> Self {
        self.block_weight = block_weight;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let all_finite = self
            .mean
            .iter()
            .chain(self.scale.iter())
            .chain(self.weights.iter())
            .chain([self.intercept, self.block_weight].iter())
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(DetectorError::InvalidArtifact {
                name: "model.json",
                reason: "linear scorer contains non-finite parameters".into(),
            });
        }
        Ok(())
    }

    /// Score an already-extracted feature vector.
    pub fn score_features(&self, features: &FeatureVector) -> f64 {
        let values = features.to_array();
        let mut sum = self.intercept;
        for i in 0..NUM_FEATURES {
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            let z = (values[i] - self.mean[i]) / scale;
            sum += self.weights[i] * self.block_weight * z;
        }
        sum
    }
}

impl Scorer for LinearScorer {
    fn score(&self, text: &str) -> Result<f64> {
        let features = self.extractor.extract(text);
        Ok(self.score_features(&features))
    }
}
