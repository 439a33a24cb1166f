//! Isotonic calibration of raw scores
//!
//! Stores the fitted step points of an isotonic regression and evaluates
//! by linear interpolation between them. Inputs outside the fitted range
//! clip to the nearest end value.

use serde::{Deserialize, Serialize};

use super::Calibrator;
use crate::error::{DetectorError, Result};

fn invalid(reason: impl Into<String>) -> DetectorError {
    DetectorError::InvalidArtifact {
        name: "calibrator.json",
        reason: reason.into(),
    }
}

/// Piecewise-linear monotonic calibrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsotonicCalibrator {
    /// Raw-score breakpoints, non-decreasing
    x_thresholds: Vec<f64>,
    /// Probability at each breakpoint, non-decreasing
    y_thresholds: Vec<f64>,
}

impl IsotonicCalibrator {
    pub fn new(x_thresholds: Vec<f64>, y_thresholds: Vec<f64>) -> Result<Self> {
        let calibrator = Self {
            x_thresholds,
            y_thresholds,
        };
        calibrator.validate()?;
        Ok(calibrator)
    }

    /// Identity on [0, 1], clipped outside.
    pub fn identity() -> Self {
        Self {
            x_thresholds: vec![0.0, 1.0],
            y_thresholds: vec![0.0, 1.0],
        }
    }

    pub fn validate(&self) -> Result<()> {
        let (xs, ys) = (&self.x_thresholds, &self.y_thresholds);
        if xs.is_empty() {
            return Err(invalid("no breakpoints"));
        }
        if xs.len() != ys.len() {
            return Err(invalid(format!(
                "breakpoint count mismatch ({} x vs {} y)",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(invalid("non-finite breakpoint"));
        }
        if xs.windows(2).any(|w| w[1] < w[0]) {
            return Err(invalid("x breakpoints are not sorted"));
        }
        if ys.windows(2).any(|w| w[1] < w[0]) {
            return Err(invalid("y breakpoints are not monotonic"));
        }
        Ok(())
    }

    fn interpolate(&self, raw: f64) -> f64 {
        let (xs, ys) = (&self.x_thresholds, &self.y_thresholds);
        let last = xs.len() - 1;
        if raw <= xs[0] {
            return ys[0];
        }
        if raw >= xs[last] {
            return ys[last];
        }
        // xs[hi - 1] <= raw < xs[hi]
        let hi = xs.partition_point(|&x| x <= raw);
        let lo = hi - 1;
        let t = (raw - xs[lo]) / (xs[hi] - xs[lo]);
        ys[lo] + t * (ys[hi] - ys[lo])
    }
}

impl Calibrator for IsotonicCalibrator {
    fn apply(&self, raw: f64) -> Result<f64> {
        if raw.is_nan() {
            return Err(DetectorError::Calibration("raw score is NaN".into()));
        }
        if self.x_thresholds.is_empty() || self.x_thresholds.len() != self.y_thresholds.len() {
            return Err(DetectorError::Calibration("calibrator has no usable breakpoints".into()));
        }
        Ok(self.interpolate(raw).clamp(0.0, 1.0))
    }
}
