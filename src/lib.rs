//! Authorship - human vs. machine text detection
//!
//! Turns a passage of text into a calibrated probability that a human
//! wrote it, plus a domain-aware verdict, a confidence tier and a
//! product-safe explanation.
//!
//! Architecture: stylometry → Scorer → Calibrator → DecisionEngine
//!
//! Key insight: a confident wrong answer costs more than "Cannot
//! Determine". Near-coin-flip probabilities are reported as undecided,
//! short samples never get more than LOW confidence, and tiny inputs never
//! masquerade as machine text.
//!
//! # Example
//!
//! ```rust,ignore
//! use authorship::{Detector, DetectorConfig, DomainHint};
//!
//! let config = DetectorConfig::load()?;
//! let detector = Detector::from_config(&config);
//! let result = detector.predict(text, Some(DomainHint::Academic));
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! ```

pub mod artifacts;
pub mod config;
pub mod decision;
pub mod detector;
pub mod error;
pub mod evaluate;
pub mod models;
pub mod scoring;
pub mod stylometry;

pub use artifacts::{ArtifactMetadata, LoadedArtifacts, ModelState};
pub use config::DetectorConfig;
pub use decision::{Decision, DecisionEngine, DomainThresholds};
pub use detector::Detector;
pub use error::{DetectorError, Result};
pub use evaluate::{evaluate_group, ExpectedLabel, GroupReport};
pub use models::{
    Classification, ConfidenceTier, DomainHint, Prediction, PredictionMeta, PredictionResult,
};
pub use scoring::{Calibrator, GbdtScorer, IsotonicCalibrator, LinearScorer, Scorer, ScorerArtifact};
pub use stylometry::{FeatureExtractor, FeatureVector};
