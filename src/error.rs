//! Error taxonomy for artifact loading and scoring
//!
//! None of these escape `Detector::predict`; the facade folds them into the
//! error form of `PredictionResult`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading artifacts or scoring a single text
#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Model not found at {}", path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("Model not loaded")]
    ArtifactUnavailable,

    #[error("Invalid artifact {name}: {reason}")]
    InvalidArtifact { name: &'static str, reason: String },

    #[error("Failed to parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Scoring failed: {0}")]
    Scoring(String),

    #[error("Calibration failed: {0}")]
    Calibration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DetectorError>;
