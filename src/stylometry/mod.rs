//! Stylometric signature of a text
//!
//! Ten hand-engineered signals capturing rhythm, function-word usage,
//! information flow, punctuation habits and lexical shape. The signature
//! feeds the scorer; the decision engine never looks at it directly.
//!
//! Key constraint: the vector must never look like a machine signal just
//! because the input is tiny, so sub-threshold input yields a neutral,
//! typical-human signature instead of zeros.

mod extractor;
mod features;
pub mod text;

pub use extractor::{FeatureExtractor, CHUNK_SIZE, MIN_TOKENS};
pub use features::{FeatureVector, FEATURE_NAMES, NUM_FEATURES};

/// Version of the signal definitions. Artifacts record the version they
/// were trained against.
pub const STYLOMETRY_VERSION: &str = "1.0.0";
