//! Trained artifact bundle and its load-time state
//!
//! An artifact directory holds, loaded strictly in this order:
//!
//! - `model.json`: the scorer (`ScorerArtifact`, tagged by `kind`)
//! - `calibrator.json`: the isotonic calibrator
//! - `metadata.json`: version bookkeeping
//!
//! Loading happens once. Failure at any step leaves the detector in a
//! permanent `ModelState::Unavailable`; nothing retries on later calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{DetectorError, Result};
use crate::scoring::{Calibrator, IsotonicCalibrator, Scorer, ScorerArtifact};
use crate::stylometry::STYLOMETRY_VERSION;

pub const MODEL_FILENAME: &str = "model.json";
pub const CALIBRATOR_FILENAME: &str = "calibrator.json";
pub const METADATA_FILENAME: &str = "metadata.json";

/// Version record shipped alongside the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub model_version: String,
    #[serde(default = "default_stylometry_version")]
    pub stylometry_version: String,
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub n_samples: Option<usize>,
    #[serde(default)]
    pub r2_score: Option<f64>,
}

fn default_stylometry_version() -> String {
    STYLOMETRY_VERSION.to_string()
}

impl ArtifactMetadata {
    pub fn new(model_version: impl Into<String>) -> Self {
        Self {
            model_version: model_version.into(),
            stylometry_version: default_stylometry_version(),
            trained_at: None,
            n_samples: None,
            r2_score: None,
        }
    }
}

/// Immutable scorer, calibrator and metadata, shared read-only across calls
pub struct LoadedArtifacts {
    scorer: Box<dyn Scorer>,
    calibrator: Box<dyn Calibrator>,
    metadata: ArtifactMetadata,
}

impl LoadedArtifacts {
    /// Assemble artifacts from already-constructed collaborators.
    pub fn new(
        scorer: impl Scorer + 'static,
        calibrator: impl Calibrator + 'static,
        metadata: ArtifactMetadata,
    ) -> Self {
        Self {
            scorer: Box::new(scorer),
            calibrator: Box::new(calibrator),
            metadata,
        }
    }

    /// Load all three artifacts from `dir`, in order.
    pub fn load(dir: &Path) -> Result<Self> {
        let model_path = dir.join(MODEL_FILENAME);
        if !model_path.exists() {
            return Err(DetectorError::ArtifactMissing { path: model_path });
        }
        let scorer: ScorerArtifact = read_json(&model_path, MODEL_FILENAME)?;
        scorer.validate()?;

        let calibrator: IsotonicCalibrator =
            read_json(&dir.join(CALIBRATOR_FILENAME), CALIBRATOR_FILENAME)?;
        calibrator.validate()?;

        let metadata: ArtifactMetadata =
            read_json(&dir.join(METADATA_FILENAME), METADATA_FILENAME)?;
        if metadata.stylometry_version != STYLOMETRY_VERSION {
            tracing::warn!(
                "Model trained against stylometry v{} but this build extracts v{}",
                metadata.stylometry_version,
                STYLOMETRY_VERSION
            );
        }

        tracing::info!(
            "Loaded detector v{} ({} scorer)",
            metadata.model_version,
            scorer.kind()
        );
        Ok(Self::new(scorer, calibrator, metadata))
    }

    /// Persist an artifact bundle in the layout `load` expects.
    pub fn save(
        dir: &Path,
        scorer: &ScorerArtifact,
        calibrator: &IsotonicCalibrator,
        metadata: &ArtifactMetadata,
    ) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        write_json(&dir.join(MODEL_FILENAME), MODEL_FILENAME, scorer)?;
        write_json(&dir.join(CALIBRATOR_FILENAME), CALIBRATOR_FILENAME, calibrator)?;
        write_json(&dir.join(METADATA_FILENAME), METADATA_FILENAME, metadata)?;
        Ok(())
    }

    pub fn scorer(&self) -> &dyn Scorer {
        self.scorer.as_ref()
    }

    pub fn calibrator(&self) -> &dyn Calibrator {
        self.calibrator.as_ref()
    }

    pub fn metadata(&self) -> &ArtifactMetadata {
        &self.metadata
    }

    pub fn version(&self) -> &str {
        &self.metadata.model_version
    }
}

impl fmt::Debug for LoadedArtifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedArtifacts")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, name: &'static str) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| DetectorError::Parse { name, source })
}

fn write_json<T: Serialize>(path: &Path, name: &'static str, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)
        .map_err(|source| DetectorError::Parse { name, source })?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Outcome of the one-time artifact load
#[derive(Debug, Clone)]
pub enum ModelState {
    Ready(Arc<LoadedArtifacts>),
    /// Load failed; the reason is kept for diagnostics
    Unavailable(String),
}

impl ModelState {
    /// Load from `dir`, capturing failure instead of returning it.
    pub fn load(dir: &Path) -> Self {
        match LoadedArtifacts::load(dir) {
            Ok(artifacts) => ModelState::Ready(Arc::new(artifacts)),
            Err(e) => {
                tracing::warn!("Failed to load detector artifacts: {}", e);
                ModelState::Unavailable(e.to_string())
            }
        }
    }

    pub fn ready(artifacts: LoadedArtifacts) -> Self {
        ModelState::Ready(Arc::new(artifacts))
    }

    pub fn artifacts(&self) -> Option<&LoadedArtifacts> {
        match self {
            ModelState::Ready(a) => Some(a.as_ref()),
            ModelState::Unavailable(_) => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }
}

impl From<Result<LoadedArtifacts>> for ModelState {
    fn from(result: Result<LoadedArtifacts>) -> Self {
        match result {
            Ok(a) => ModelState::ready(a),
            Err(e) => ModelState::Unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::LinearScorer;
    use crate::stylometry::NUM_FEATURES;

    fn linear() -> ScorerArtifact {
        ScorerArtifact::Linear(LinearScorer::new(
            [0.0; NUM_FEATURES],
            [1.0; NUM_FEATURES],
            [0.1; NUM_FEATURES],
            -0.2,
        ))
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut metadata = ArtifactMetadata::new("1.0.0");
        metadata.n_samples = Some(50_000);
        LoadedArtifacts::save(dir.path(), &linear(), &IsotonicCalibrator::identity(), &metadata)
            .unwrap();

        let loaded = LoadedArtifacts::load(dir.path()).unwrap();
        assert_eq!(loaded.version(), "1.0.0");
        assert_eq!(loaded.metadata().n_samples, Some(50_000));

        let raw = loaded.scorer().score("Some perfectly ordinary words here.").unwrap();
        let p = loaded.calibrator().apply(raw).unwrap();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_missing_model_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = LoadedArtifacts::load(dir.path()).unwrap_err();
        assert!(matches!(err, DetectorError::ArtifactMissing { .. }));
        assert!(err.to_string().starts_with("Model not found at"));
    }

    #[test]
    fn test_missing_calibrator_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        write_json(&dir.path().join(MODEL_FILENAME), MODEL_FILENAME, &linear()).unwrap();
        let err = LoadedArtifacts::load(dir.path()).unwrap_err();
        assert!(matches!(err, DetectorError::Io(_)));
    }

    #[test]
    fn test_invalid_calibrator_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_json(&dir.path().join(MODEL_FILENAME), MODEL_FILENAME, &linear()).unwrap();
        std::fs::write(
            dir.path().join(CALIBRATOR_FILENAME),
            r#"{ "x_thresholds": [0.0, 1.0], "y_thresholds": [0.9, 0.1] }"#,
        )
        .unwrap();
        std::fs::write(dir.path().join(METADATA_FILENAME), r#"{ "model_version": "x" }"#).unwrap();

        let state = ModelState::load(dir.path());
        assert!(!state.is_ready());
    }

    #[test]
    fn test_metadata_defaults() {
        let meta: ArtifactMetadata =
            serde_json::from_str(r#"{ "model_version": "2.1.0", "trained_at": "2026-02-01T09:29:31Z" }"#)
                .unwrap();
        assert_eq!(meta.stylometry_version, STYLOMETRY_VERSION);
        assert!(meta.trained_at.is_some());
        assert_eq!(meta.r2_score, None);
    }
}
