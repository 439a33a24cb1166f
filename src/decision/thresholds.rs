//! Domain-specific classification thresholds
//!
//! Different writing domains carry different false-accusation risk.
//! ESL writing resembles machine text on the surface, so it needs more
//! evidence before being called human; suspected-AI submissions need less.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::DomainHint;

/// Threshold applied when no domain hint is given.
pub const DEFAULT_THRESHOLD: f64 = 0.50;

/// Human-probability cutoffs per domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainThresholds {
    /// Threshold per domain hint
    configs: HashMap<DomainHint, f64>,
    /// Threshold when the hint is unset
    default: f64,
}

impl Default for DomainThresholds {
    fn default() -> Self {
        let mut configs = HashMap::new();
        configs.insert(DomainHint::Esl, 0.55);
        configs.insert(DomainHint::Academic, 0.50);
        configs.insert(DomainHint::General, 0.60);
        configs.insert(DomainHint::Ai, 0.45);

        Self {
            configs,
            default: DEFAULT_THRESHOLD,
        }
    }
}

impl DomainThresholds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Threshold for a (possibly absent) hint
    pub fn get(&self, domain: Option<DomainHint>) -> f64 {
        domain
            .and_then(|d| self.configs.get(&d).copied())
            .unwrap_or(self.default)
    }

    /// Override one domain's threshold
    pub fn set(&mut self, domain: DomainHint, threshold: f64) {
        self.configs.insert(domain, threshold);
    }

    /// Override the unset-hint threshold
    pub fn set_default(&mut self, threshold: f64) {
        self.default = threshold;
    }

    /// All thresholds must be finite probabilities.
    pub fn validate(&self) -> Result<(), String> {
        let entries = self
            .configs
            .iter()
            .map(|(d, t)| (d.as_str(), *t))
            .chain(std::iter::once(("default", self.default)));
        for (name, t) in entries {
            if !t.is_finite() || !(0.0..=1.0).contains(&t) {
                return Err(format!("threshold for {name} must be within [0, 1], got {t}"));
            }
        }
        Ok(())
    }

    /// Does `human_probability` clear the bar for a human label?
    pub fn is_human(&self, domain: Option<DomainHint>, human_probability: f64) -> bool {
        human_probability >= self.get(domain)
    }
}
