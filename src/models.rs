//! Core data models for authorship detection
//!
//! These types are shared by the decision engine, the detector facade and
//! callers that serialize results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Advisory hint about where a text comes from.
///
/// Only moves the classification threshold; an absent hint is modelled as
/// `Option::<DomainHint>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainHint {
    /// Non-native English writing
    Esl,
    /// Academic prose
    Academic,
    /// General-audience writing
    General,
    /// Text suspected to be machine-written
    Ai,
}

impl DomainHint {
    pub fn all() -> &'static [DomainHint] {
        &[
            DomainHint::Esl,
            DomainHint::Academic,
            DomainHint::General,
            DomainHint::Ai,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainHint::Esl => "esl",
            DomainHint::Academic => "academic",
            DomainHint::General => "general",
            DomainHint::Ai => "ai",
        }
    }
}

impl fmt::Display for DomainHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainHint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "esl" => Ok(DomainHint::Esl),
            "academic" => Ok(DomainHint::Academic),
            "general" => Ok(DomainHint::General),
            "ai" => Ok(DomainHint::Ai),
            other => Err(format!("unknown domain hint: {other}")),
        }
    }
}

/// Final verdict for a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Likely Human")]
    LikelyHuman,
    #[serde(rename = "Likely AI")]
    LikelyAi,
    #[serde(rename = "Cannot Determine")]
    CannotDetermine,
}

impl Classification {
    pub fn all() -> &'static [Classification] {
        &[
            Classification::LikelyHuman,
            Classification::LikelyAi,
            Classification::CannotDetermine,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::LikelyHuman => "Likely Human",
            Classification::LikelyAi => "Likely AI",
            Classification::CannotDetermine => "Cannot Determine",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How much the verdict should be trusted. Ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    pub fn all() -> &'static [ConfidenceTier] {
        &[ConfidenceTier::Low, ConfidenceTier::Medium, ConfidenceTier::High]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::Low => "LOW",
            ConfidenceTier::Medium => "MEDIUM",
            ConfidenceTier::High => "HIGH",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance attached to a scored prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionMeta {
    /// Model version from the artifact metadata
    pub version: String,
    /// Domain hint echoed back, `null` when unset
    pub domain_bias: Option<DomainHint>,
    /// Uncalibrated scorer output
    pub raw_score: f64,
}

/// A fully scored prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Calibrated probability that the text is human-authored
    pub human_score: f64,
    /// Always `1 - human_score`
    pub ai_score: f64,
    pub classification: Classification,
    pub confidence: ConfidenceTier,
    pub meta: PredictionMeta,
    pub message: String,
}

/// Reduced record for text too short to score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InconclusiveResult {
    pub human_score: f64,
    pub classification: Classification,
    pub confidence: ConfidenceTier,
    pub reason: String,
}

/// Reduced record for an unavailable model or a failed call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

/// Outcome of a single `predict` call.
///
/// Serializes to one of three record shapes without a discriminator field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionResult {
    Scored(Prediction),
    Inconclusive(InconclusiveResult),
    Failed(ErrorResult),
}

impl PredictionResult {
    pub(crate) fn too_short() -> Self {
        PredictionResult::Inconclusive(InconclusiveResult {
            human_score: 0.5,
            classification: Classification::CannotDetermine,
            confidence: ConfidenceTier::Low,
            reason: "Text too short".to_string(),
        })
    }

    pub(crate) fn failed(error: impl Into<String>) -> Self {
        PredictionResult::Failed(ErrorResult {
            error: error.into(),
        })
    }

    pub fn human_score(&self) -> Option<f64> {
        match self {
            PredictionResult::Scored(p) => Some(p.human_score),
            PredictionResult::Inconclusive(r) => Some(r.human_score),
            PredictionResult::Failed(_) => None,
        }
    }

    pub fn classification(&self) -> Option<Classification> {
        match self {
            PredictionResult::Scored(p) => Some(p.classification),
            PredictionResult::Inconclusive(r) => Some(r.classification),
            PredictionResult::Failed(_) => None,
        }
    }

    pub fn confidence(&self) -> Option<ConfidenceTier> {
        match self {
            PredictionResult::Scored(p) => Some(p.confidence),
            PredictionResult::Inconclusive(r) => Some(r.confidence),
            PredictionResult::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PredictionResult::Failed(e) => Some(&e.error),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PredictionResult::Failed(_))
    }

    pub fn as_scored(&self) -> Option<&Prediction> {
        match self {
            PredictionResult::Scored(p) => Some(p),
            _ => None,
        }
    }
}
