//! End-to-end detector tests
//!
//! Drives the public API with stub scorers and calibrators, and with a
//! real artifact directory written to a temp dir.

use authorship::scoring::ScorerArtifact;
use authorship::stylometry::NUM_FEATURES;
use authorship::{
    ArtifactMetadata, Calibrator, Classification, ConfidenceTier, Detector, DetectorConfig,
    DetectorError, DomainHint, IsotonicCalibrator, LinearScorer, LoadedArtifacts, ModelState,
    PredictionResult, Scorer,
};

/// Scorer that ignores the text
struct ConstScorer(f64);

impl Scorer for ConstScorer {
    fn score(&self, _text: &str) -> authorship::Result<f64> {
        Ok(self.0)
    }
}

/// Calibrator that ignores the raw score
struct ConstCalibrator(f64);

impl Calibrator for ConstCalibrator {
    fn apply(&self, _raw: f64) -> authorship::Result<f64> {
        Ok(self.0)
    }
}

struct FailingScorer;

impl Scorer for FailingScorer {
    fn score(&self, _text: &str) -> authorship::Result<f64> {
        Err(DetectorError::Scoring("vectorizer vocabulary missing".into()))
    }
}

fn stub_detector(probability: f64) -> Detector {
    Detector::with_artifacts(LoadedArtifacts::new(
        ConstScorer(0.123),
        ConstCalibrator(probability),
        ArtifactMetadata::new("1.0.0"),
    ))
}

fn words(n: usize) -> String {
    (0..n).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ")
}

#[test]
fn empty_text_takes_short_path() {
    let result = stub_detector(0.9).predict("", None);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "human_score": 0.5,
            "classification": "Cannot Determine",
            "confidence": "LOW",
            "reason": "Text too short"
        })
    );
}

#[test]
fn simple_twenty_word_text_is_undecided() {
    let text = "I go to the shop and I buy some milk. The milk is cold and I like it a lot.";
    assert_eq!(text.split_whitespace().count(), 20);

    let result = stub_detector(0.50).predict(text, None);
    assert_eq!(result.classification(), Some(Classification::CannotDetermine));
    assert_eq!(result.confidence(), Some(ConfidenceTier::Low));
    assert_eq!(
        result.as_scored().unwrap().message,
        "The text structure is ambiguous or too short for definitive analysis."
    );
}

#[test]
fn confident_human_on_long_general_text() {
    let result = stub_detector(0.92).predict(&words(300), Some(DomainHint::General));
    let p = result.as_scored().expect("scored");
    assert_eq!(p.classification, Classification::LikelyHuman);
    assert_eq!(p.confidence, ConfidenceTier::High);
    assert_eq!(p.meta.raw_score, 0.123);
    assert_eq!(
        p.message,
        "This text exhibits patterns consistent with human writing. (HIGH Confidence)"
    );
}

#[test]
fn esl_mid_length_likely_ai_medium() {
    let result = stub_detector(0.30).predict(&words(80), Some(DomainHint::Esl));
    assert_eq!(result.classification(), Some(Classification::LikelyAi));
    assert_eq!(result.confidence(), Some(ConfidenceTier::Medium));
}

#[test]
fn scores_sum_to_one() {
    for i in 0..=20 {
        let p = i as f64 / 20.0;
        let result = stub_detector(p).predict(&words(120), None);
        let scored = result.as_scored().unwrap();
        assert!((scored.human_score + scored.ai_score - 1.0).abs() < 1e-12);
    }
}

#[test]
fn gray_zone_is_undecided_for_every_domain() {
    let domains = [
        None,
        Some(DomainHint::Esl),
        Some(DomainHint::Academic),
        Some(DomainHint::General),
        Some(DomainHint::Ai),
    ];
    for domain in domains {
        for p in [0.451, 0.48, 0.5, 0.52, 0.549] {
            let result = stub_detector(p).predict(&words(400), domain);
            assert_eq!(
                result.classification(),
                Some(Classification::CannotDetermine),
                "p={p} domain={domain:?}"
            );
        }
    }
}

#[test]
fn short_samples_are_always_low_confidence() {
    for p in [0.0, 0.02, 0.2, 0.7, 0.98, 1.0] {
        for n in [3, 10, 49] {
            let text = words(n);
            let result = stub_detector(p).predict(&text, Some(DomainHint::Academic));
            assert_eq!(result.confidence(), Some(ConfidenceTier::Low), "p={p} n={n}");
        }
    }
}

#[test]
fn confidence_never_drops_as_probability_rises() {
    let text = words(150);
    let mut prev = ConfidenceTier::Low;
    for i in 80..=96 {
        let result = stub_detector(i as f64 / 100.0).predict(&text, Some(DomainHint::General));
        let tier = result.confidence().unwrap();
        assert!(tier >= prev, "tier dropped at 0.{i}");
        prev = tier;
    }
}

#[test]
fn predict_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(dir.path());
    let detector = Detector::load(dir.path());
    let text = "The committee reviewed the proposal carefully; several members were concerned \
                about the budget. Nevertheless, the plan was approved after a long debate.";

    let first = detector.predict(text, Some(DomainHint::Academic));
    let second = detector.predict(text, Some(DomainHint::Academic));
    assert_eq!(first, second);
}

#[test]
fn unavailable_model_never_scores() {
    let dir = tempfile::tempdir().unwrap();
    let detector = Detector::load(dir.path());
    assert!(!detector.is_available());
    assert!(detector.unavailable_reason().unwrap().contains("Model not found"));

    for text in ["", "short", &words(200)] {
        let result = detector.predict(text, None);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({ "error": "Model not loaded" })
        );
    }
}

#[test]
fn scoring_failure_is_scoped_to_the_call() {
    let detector = Detector::with_artifacts(LoadedArtifacts::new(
        FailingScorer,
        IsotonicCalibrator::identity(),
        ArtifactMetadata::new("1.0.0"),
    ));
    let result = detector.predict(&words(60), None);
    assert_eq!(
        result.error(),
        Some("Scoring failed: vectorizer vocabulary missing")
    );
    assert!(detector.is_available());
    assert!(matches!(
        detector.predict("tiny", None),
        PredictionResult::Inconclusive(_)
    ));
}

#[test]
fn batch_matches_single_calls() {
    let detector = stub_detector(0.2);
    let texts = vec![String::new(), words(30), words(75), words(150)];
    let batch = detector.predict_batch(&texts, Some(DomainHint::Ai));

    assert_eq!(batch.len(), texts.len());
    for (text, result) in texts.iter().zip(&batch) {
        assert_eq!(result, &detector.predict(text, Some(DomainHint::Ai)));
    }
}

fn write_artifacts(dir: &std::path::Path) {
    let mut weights = [0.0; NUM_FEATURES];
    weights[0] = 0.4; // rhythm
    weights[1] = 0.8; // stopwords
    weights[5] = -0.6; // em-dashes
    let scorer = ScorerArtifact::Linear(
        LinearScorer::new([0.0; NUM_FEATURES], [1.0; NUM_FEATURES], weights, -0.3)
            .with_block_weight(2.5),
    );
    let calibrator =
        IsotonicCalibrator::new(vec![-1.0, 0.0, 1.0, 2.0], vec![0.05, 0.3, 0.7, 0.95]).unwrap();
    LoadedArtifacts::save(dir, &scorer, &calibrator, &ArtifactMetadata::new("1.0.0")).unwrap();
}

#[test]
fn loads_real_artifact_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(dir.path());

    let detector = Detector::load(dir.path());
    assert!(detector.is_available());
    assert_eq!(detector.version(), Some("1.0.0"));

    let text = "Honestly I never thought the trip would go this badly. We missed the bus, \
                then the rain started, and by noon everyone was soaked and grumpy!";
    let result = detector.predict(text, None);
    let p = result.as_scored().expect("scored");
    assert!((0.0..=1.0).contains(&p.human_score));
    assert_eq!(p.meta.version, "1.0.0");
    assert_eq!(p.meta.domain_bias, None);
    // 26 words: always LOW
    assert_eq!(p.confidence, ConfidenceTier::Low);
}

#[test]
fn config_drives_thresholds_and_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(dir.path());

    let mut config = DetectorConfig {
        artifacts_dir: dir.path().to_path_buf(),
        ..DetectorConfig::default()
    };
    config.thresholds.general = Some(0.95);

    let detector = Detector::from_config(&config);
    assert!(detector.is_available());

    // A stub at 0.92 would be human under the stock 0.60 general bar
    let stock = stub_detector(0.92).predict(&words(200), Some(DomainHint::General));
    assert_eq!(stock.classification(), Some(Classification::LikelyHuman));

    let strict = Detector::new(ModelState::ready(LoadedArtifacts::new(
        ConstScorer(0.0),
        ConstCalibrator(0.92),
        ArtifactMetadata::new("1.0.0"),
    )))
    .with_engine(authorship::DecisionEngine::with_thresholds(config.domain_thresholds()));
    let result = strict.predict(&words(200), Some(DomainHint::General));
    assert_eq!(result.classification(), Some(Classification::LikelyAi));
}
