//! Inference facade
//!
//! Orchestrates the full pipeline for one text:
//!
//! ```text
//! text ─▶ availability ─▶ short-text gate ─▶ Scorer ─▶ Calibrator ─▶ DecisionEngine ─▶ PredictionResult
//! ```
//!
//! `predict` never returns `Err` and never panics outward. An unavailable
//! model, a failing collaborator or a panic inside one all come back as the
//! error form of `PredictionResult`, scoped to that single call.

use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::artifacts::{LoadedArtifacts, ModelState};
use crate::config::{DetectorConfig, DEFAULT_MIN_TEXT_CHARS};
use crate::decision::DecisionEngine;
use crate::error::{DetectorError, Result};
use crate::models::{DomainHint, Prediction, PredictionMeta, PredictionResult};

/// Text authorship detector
#[derive(Debug, Clone)]
pub struct Detector {
    state: ModelState,
    engine: DecisionEngine,
    min_text_chars: usize,
}

impl Detector {
    /// Create a detector over an already-resolved model state.
    pub fn new(state: ModelState) -> Self {
        Self {
            state,
            engine: DecisionEngine::new(),
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
        }
    }

    /// Create a detector over in-memory artifacts.
    pub fn with_artifacts(artifacts: LoadedArtifacts) -> Self {
        Self::new(ModelState::ready(artifacts))
    }

    /// Load artifacts from `dir` once; failure makes the detector unavailable.
    pub fn load(dir: &Path) -> Self {
        Self::new(ModelState::load(dir))
    }

    pub fn from_config(config: &DetectorConfig) -> Self {
        Self {
            state: ModelState::load(&config.artifacts_dir),
            engine: DecisionEngine::with_thresholds(config.domain_thresholds()),
            min_text_chars: config.min_text_chars,
        }
    }

    pub fn with_engine(mut self, engine: DecisionEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_min_text_chars(mut self, min_text_chars: usize) -> Self {
        self.min_text_chars = min_text_chars;
        self
    }

    pub fn is_available(&self) -> bool {
        self.state.is_ready()
    }

    /// Model version, if loaded
    pub fn version(&self) -> Option<&str> {
        self.state.artifacts().map(|a| a.version())
    }

    /// Why the model is unavailable, if it is
    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.state {
            ModelState::Unavailable(reason) => Some(reason),
            ModelState::Ready(_) => None,
        }
    }

    /// Classify one text.
    pub fn predict(&self, text: &str, domain: Option<DomainHint>) -> PredictionResult {
        let artifacts = match self.state.artifacts() {
            Some(a) => a,
            None => return PredictionResult::failed(DetectorError::ArtifactUnavailable.to_string()),
        };

        if text.trim().chars().count() < self.min_text_chars {
            tracing::debug!("Text below {} characters, skipping scoring", self.min_text_chars);
            return PredictionResult::too_short();
        }

        let (raw_score, human_score) = match score_guarded(artifacts, text) {
            Ok(scores) => scores,
            Err(e) => {
                tracing::warn!("Prediction failed: {}", e);
                return PredictionResult::failed(e.to_string());
            }
        };

        let word_count = text.split_whitespace().count();
        let decision = self.engine.decide(human_score, raw_score, word_count, domain);

        PredictionResult::Scored(Prediction {
            human_score,
            ai_score: 1.0 - human_score,
            classification: decision.classification,
            confidence: decision.confidence,
            meta: PredictionMeta {
                version: artifacts.version().to_string(),
                domain_bias: domain,
                raw_score,
            },
            message: self.engine.message(&decision).to_string(),
        })
    }

    /// Classify many texts in parallel. Output order matches input order.
    pub fn predict_batch<T: AsRef<str> + Sync>(
        &self,
        texts: &[T],
        domain: Option<DomainHint>,
    ) -> Vec<PredictionResult> {
        texts
            .par_iter()
            .map(|t| self.predict(t.as_ref(), domain))
            .collect()
    }

    /// Raw score and calibrated probability, without the decision stage.
    pub fn calibrated_score(&self, text: &str) -> Result<(f64, f64)> {
        let artifacts = self
            .state
            .artifacts()
            .ok_or(DetectorError::ArtifactUnavailable)?;
        score_guarded(artifacts, text)
    }
}

/// Run scorer then calibrator, converting panics and non-finite output
/// into errors.
fn score_guarded(artifacts: &LoadedArtifacts, text: &str) -> Result<(f64, f64)> {
    let raw = panic::catch_unwind(AssertUnwindSafe(|| artifacts.scorer().score(text)))
        .map_err(|payload| DetectorError::Scoring(panic_message(payload)))??;
    if !raw.is_finite() {
        return Err(DetectorError::Scoring(format!("non-finite raw score {raw}")));
    }

    let prob = panic::catch_unwind(AssertUnwindSafe(|| artifacts.calibrator().apply(raw)))
        .map_err(|payload| DetectorError::Calibration(panic_message(payload)))??;
    if !prob.is_finite() {
        return Err(DetectorError::Calibration(format!(
            "non-finite probability {prob}"
        )));
    }

    Ok((raw, prob.clamp(0.0, 1.0)))
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "collaborator panicked".to_string()
    }
}
