//! GBDT scorer over stylometric features
//!
//! Wraps the `gbdt` crate to provide:
//! - Model loading from serialised JSON or XGBoost dump format
//! - Raw scoring of a text through its `FeatureVector`
//!
//! Note: the gbdt crate internally uses `f32` (`ValueType`), while
//! `FeatureVector` stores `f64`. Conversions happen at the crate boundary.

use std::io::Cursor;
use std::path::Path;

use gbdt::decision_tree::Data;
use gbdt::gradient_boost::GBDT;
use serde::{Deserialize, Serialize};

use super::Scorer;
use crate::error::{DetectorError, Result};
use crate::stylometry::{FeatureExtractor, FeatureVector};

#[inline]
fn features_to_f32(features: &FeatureVector) -> Vec<f32> {
    features.to_array().iter().map(|&v| v as f32).collect()
}

fn invalid(reason: String) -> DetectorError {
    DetectorError::InvalidArtifact {
        name: "model.json",
        reason,
    }
}

/// Tree-ensemble scorer in gbdt-rs native format
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct GbdtScorer {
    model: GBDT,
}

impl GbdtScorer {
    /// Load a model from the gbdt-rs native JSON format on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .ok_or_else(|| invalid("invalid UTF-8 in model path".to_string()))?;
        let model = GBDT::load_model(path_str)
            .map_err(|e| invalid(format!("failed to load GBDT model: {e}")))?;
        Ok(Self { model })
    }

    /// Load a model from an XGBoost JSON dump file on disk.
    ///
    /// Uses `binary:logistic` as the objective (sigmoid output).
    pub fn load_xgboost(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .ok_or_else(|| invalid("invalid UTF-8 in model path".to_string()))?;
        let model = GBDT::from_xgboost_dump(path_str, "binary:logistic")
            .map_err(|e| invalid(format!("failed to load XGBoost dump: {e}")))?;
        Ok(Self { model })
    }

    /// Load a model from a JSON string (gbdt-rs native format).
    pub fn from_json(json: &str) -> Result<Self> {
        let model: GBDT = serde_json::from_str(json).map_err(|source| DetectorError::Parse {
            name: "model.json",
            source,
        })?;
        Ok(Self { model })
    }

    /// Load a model from an XGBoost JSON dump string.
    pub fn from_xgboost_json(json: &str) -> Result<Self> {
        let reader = std::io::BufReader::new(Cursor::new(json));
        let model = GBDT::from_xgboost_reader(reader, "binary:logistic")
            .map_err(|e| invalid(format!("failed to parse XGBoost JSON: {e}")))?;
        Ok(Self { model })
    }

    /// Wrap an already-trained `GBDT` instance.
    pub fn from_trained(model: GBDT) -> Self {
        Self { model }
    }

    /// Score an already-extracted feature vector.
    pub fn score_features(&self, features: &FeatureVector) -> f64 {
        let data = vec![Data::new_test_data(features_to_f32(features), None)];
        let preds = self.model.predict(&data);
        preds.first().copied().unwrap_or(0.5_f32) as f64
    }

    /// Return a reference to the underlying GBDT model.
    pub fn inner(&self) -> &GBDT {
        &self.model
    }
}

impl Scorer for GbdtScorer {
    fn score(&self, text: &str) -> Result<f64> {
        let features = FeatureExtractor::new().extract(text);
        Ok(self.score_features(&features))
    }
}
