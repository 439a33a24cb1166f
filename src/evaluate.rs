//! Stress evaluation over labelled text groups
//!
//! Runs raw scoring and calibration (no decision stage) over a group of
//! texts that should all land on one side, and reports how many crossed
//! into the wrong band. Human groups fail below 0.4, AI groups above 0.6;
//! a group is flagged when more than 10% of it fails.

use serde::Serialize;

use crate::detector::Detector;
use crate::error::{DetectorError, Result};

const HUMAN_FAIL_BELOW: f64 = 0.4;
const AI_FAIL_ABOVE: f64 = 0.6;
const FLAG_RATE: f64 = 0.10;

/// Which side a group is expected to land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedLabel {
    Human,
    Ai,
}

impl ExpectedLabel {
    fn is_failure(&self, human_probability: f64) -> bool {
        match self {
            ExpectedLabel::Human => human_probability < HUMAN_FAIL_BELOW,
            ExpectedLabel::Ai => human_probability > AI_FAIL_ABOVE,
        }
    }
}

/// Summary for one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    pub name: String,
    pub expected: ExpectedLabel,
    pub n: usize,
    /// Mean calibrated human probability over texts that scored
    pub mean: f64,
    /// Population standard deviation of the same
    pub std: f64,
    /// Share of texts that failed, scoring errors included
    pub failure_rate: f64,
    /// More than 10% failed
    pub flagged: bool,
}

/// Evaluate a labelled group against a loaded detector.
pub fn evaluate_group<T: AsRef<str>>(
    detector: &Detector,
    name: &str,
    texts: &[T],
    expected: ExpectedLabel,
) -> Result<GroupReport> {
    if !detector.is_available() {
        return Err(DetectorError::ArtifactUnavailable);
    }

    let mut probabilities = Vec::with_capacity(texts.len());
    let mut failures = 0usize;
    for text in texts {
        match detector.calibrated_score(text.as_ref()) {
            Ok((_, p)) => {
                if expected.is_failure(p) {
                    failures += 1;
                }
                probabilities.push(p);
            }
            Err(e) => {
                tracing::debug!("Scoring failed during evaluation of {}: {}", name, e);
                failures += 1;
            }
        }
    }

    let n = texts.len();
    let mean = crate::stylometry::text::mean(&probabilities);
    let std = crate::stylometry::text::variance(&probabilities).sqrt();
    let failure_rate = if n == 0 { 0.0 } else { failures as f64 / n as f64 };
    let flagged = failure_rate > FLAG_RATE;

    tracing::info!(
        "{} (N={}): mean {:.3} (±{:.3}), failure rate {:.1}%",
        name,
        n,
        mean,
        std,
        failure_rate * 100.0
    );
    if flagged {
        match expected {
            ExpectedLabel::Human => tracing::warn!("{}: high false-positive rate on human text", name),
            ExpectedLabel::Ai => tracing::warn!("{}: high false-negative rate on AI text", name),
        }
    }

    Ok(GroupReport {
        name: name.to_string(),
        expected,
        n,
        mean,
        std,
        failure_rate,
        flagged,
    })
}
