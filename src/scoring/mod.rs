//! Scorer and calibrator seams
//!
//! The detector only needs two capabilities from trained artifacts:
//!
//! ```text
//! text ──Scorer::score──▶ raw score ──Calibrator::apply──▶ P(human) ∈ [0, 1]
//! ```
//!
//! Raw scores have no fixed scale or sign; only the calibrator gives them
//! meaning. Tests inject deterministic stubs through these traits, while
//! production artifacts deserialize into `ScorerArtifact` and
//! `IsotonicCalibrator`.

mod gbdt;
mod isotonic;
mod linear;

pub use gbdt::GbdtScorer;
pub use isotonic::IsotonicCalibrator;
pub use linear::LinearScorer;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Maps text to an uncalibrated score. Must be deterministic.
pub trait Scorer: Send + Sync {
    fn score(&self, text: &str) -> Result<f64>;
}

/// Monotonic non-decreasing map from raw score to probability in `[0, 1]`.
pub trait Calibrator: Send + Sync {
    fn apply(&self, raw: f64) -> Result<f64>;
}

/// Serialized scorer, tagged by model family.
///
/// ```json
/// { "kind": "linear", "model": { "mean": [...], "scale": [...], ... } }
/// ```
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "model", rename_all = "snake_case")]
pub enum ScorerArtifact {
    Linear(LinearScorer),
    Gbdt(GbdtScorer),
}

impl ScorerArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            ScorerArtifact::Linear(_) => "linear",
            ScorerArtifact::Gbdt(_) => "gbdt",
        }
    }

    /// Reject artifacts that could only ever produce garbage.
    pub fn validate(&self) -> Result<()> {
        match self {
            ScorerArtifact::Linear(m) => m.validate(),
            ScorerArtifact::Gbdt(_) => Ok(()),
        }
    }
}

impl Scorer for ScorerArtifact {
    fn score(&self, text: &str) -> Result<f64> {
        match self {
            ScorerArtifact::Linear(m) => m.score(text),
            ScorerArtifact::Gbdt(m) => m.score(text),
        }
    }
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn score(&self, text: &str) -> Result<f64> {
        (**self).score(text)
    }
}

impl<C: Calibrator + ?Sized> Calibrator for Box<C> {
    fn apply(&self, raw: f64) -> Result<f64> {
        (**self).apply(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylometry::NUM_FEATURES;

    #[test]
    fn test_linear_artifact_roundtrip_tag() {
        let artifact = ScorerArtifact::Linear(LinearScorer::new(
            [0.0; NUM_FEATURES],
            [1.0; NUM_FEATURES],
            [0.0; NUM_FEATURES],
            0.25,
        ));
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["kind"], "linear");
        assert_eq!(json["model"]["intercept"], 0.25);

        let back: ScorerArtifact = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), "linear");
        assert!((back.score("any text at all here").unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{ "kind": "svm", "model": {} }"#;
        assert!(serde_json::from_str::<ScorerArtifact>(json).is_err());
    }
}
