//! Detector configuration
//!
//! Supports loading config from, lowest priority first:
//! - Built-in defaults
//! - ~/.config/authorship/config.toml
//! - An explicit file passed to `DetectorConfig::from_file`
//! - Environment variables (`AUTHORSHIP_ARTIFACTS_DIR`, `AUTHORSHIP_MIN_TEXT_CHARS`)
//!
//! # Configuration Format
//!
//! ```toml
//! artifacts_dir = "scripts/artifacts"
//! min_text_chars = 15
//!
//! [thresholds]
//! esl = 0.55
//! general = 0.65
//! default = 0.5
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::decision::DomainThresholds;
use crate::models::DomainHint;

pub const ENV_ARTIFACTS_DIR: &str = "AUTHORSHIP_ARTIFACTS_DIR";
pub const ENV_MIN_TEXT_CHARS: &str = "AUTHORSHIP_MIN_TEXT_CHARS";

/// Texts with fewer trimmed characters than this are not scored.
pub const DEFAULT_MIN_TEXT_CHARS: usize = 15;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DetectorConfig {
    /// Directory holding model.json, calibrator.json, metadata.json
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,

    #[serde(default = "default_min_text_chars")]
    pub min_text_chars: usize,

    /// Per-domain threshold overrides
    #[serde(default)]
    pub thresholds: ThresholdOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ThresholdOverrides {
    pub esl: Option<f64>,
    pub academic: Option<f64>,
    pub general: Option<f64>,
    pub ai: Option<f64>,
    /// Threshold when no hint is given
    pub default: Option<f64>,
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_min_text_chars() -> usize {
    DEFAULT_MIN_TEXT_CHARS
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: default_artifacts_dir(),
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            thresholds: ThresholdOverrides::default(),
        }
    }
}

/// Partial config as read from a file; absent keys leave the base alone.
#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    artifacts_dir: Option<PathBuf>,
    min_text_chars: Option<usize>,
    #[serde(default)]
    thresholds: ThresholdOverrides,
}

impl DetectorConfig {
    /// Load config from defaults, the user config file and the environment.
    pub fn load() -> Result<Self> {
        let mut config = DetectorConfig::default();

        if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
            config.merge(read_partial(&path)?);
        }

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load with an explicit config file layered over the user config.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = DetectorConfig::default();

        if let Some(user_path) = Self::user_config_path().filter(|p| p.exists()) {
            config.merge(read_partial(&user_path)?);
        }
        config.merge(read_partial(path)?);

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("authorship").join("config.toml"))
    }

    /// Merge a partial config into this one (other takes priority)
    fn merge(&mut self, other: PartialConfig) {
        if let Some(dir) = other.artifacts_dir {
            self.artifacts_dir = dir;
        }
        if let Some(min) = other.min_text_chars {
            self.min_text_chars = min;
        }
        let t = other.thresholds;
        if t.esl.is_some() {
            self.thresholds.esl = t.esl;
        }
        if t.academic.is_some() {
            self.thresholds.academic = t.academic;
        }
        if t.general.is_some() {
            self.thresholds.general = t.general;
        }
        if t.ai.is_some() {
            self.thresholds.ai = t.ai;
        }
        if t.default.is_some() {
            self.thresholds.default = t.default;
        }
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(dir) = std::env::var(ENV_ARTIFACTS_DIR) {
            self.artifacts_dir = PathBuf::from(dir);
        }
        if let Ok(raw) = std::env::var(ENV_MIN_TEXT_CHARS) {
            self.min_text_chars = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_MIN_TEXT_CHARS} must be an integer, got {raw:?}"))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.domain_thresholds()
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid threshold override: {e}"))
    }

    /// Default threshold table with overrides applied.
    pub fn domain_thresholds(&self) -> DomainThresholds {
        let mut table = DomainThresholds::default();
        let t = &self.thresholds;
        let overrides = [
            (DomainHint::Esl, t.esl),
            (DomainHint::Academic, t.academic),
            (DomainHint::General, t.general),
            (DomainHint::Ai, t.ai),
        ];
        for (domain, value) in overrides {
            if let Some(v) = value {
                table.set(domain, v);
            }
        }
        if let Some(v) = t.default {
            table.set_default(v);
        }
        table
    }
}

fn read_partial(path: &Path) -> Result<PartialConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DetectorConfig::default();
        assert_eq!(config.min_text_chars, 15);
        assert_eq!(config.artifacts_dir, PathBuf::from("artifacts"));
        assert_eq!(config.domain_thresholds(), DomainThresholds::default());
    }

    #[test]
    fn test_partial_merge_keeps_unset_values() {
        let partial: PartialConfig = toml::from_str(
            r#"
min_text_chars = 20

[thresholds]
general = 0.65
"#,
        )
        .unwrap();
        let mut config = DetectorConfig::default();
        config.merge(partial);

        assert_eq!(config.min_text_chars, 20);
        assert_eq!(config.artifacts_dir, PathBuf::from("artifacts"));
        let table = config.domain_thresholds();
        assert_eq!(table.get(Some(DomainHint::General)), 0.65);
        assert_eq!(table.get(Some(DomainHint::Esl)), 0.55);
        assert_eq!(table.get(None), 0.50);
    }

    #[test]
    fn test_out_of_range_override_rejected() {
        let mut config = DetectorConfig::default();
        config.thresholds.ai = Some(1.2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "min_text_chars = \"lots\"").unwrap();
        assert!(read_partial(&path).is_err());
    }
}
