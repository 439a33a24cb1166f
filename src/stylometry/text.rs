//! Text splitting and small statistics helpers

use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();
static SENTENCE_BOUNDARY: OnceLock<Regex> = OnceLock::new();
static PASSIVE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\b\w+\b").expect("valid regex"))
}

fn sentence_boundary() -> &'static Regex {
    SENTENCE_BOUNDARY.get_or_init(|| Regex::new(r"[.!?]+").expect("valid regex"))
}

fn passive_pattern() -> &'static Regex {
    PASSIVE_PATTERN.get_or_init(|| {
        Regex::new(r"\b(am|is|are|was|were|be|been|being)\b\s+\w+ed\b").expect("valid regex")
    })
}

/// Split on runs of `.`, `!`, `?`; trimmed, empty pieces dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_boundary()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Lower-cased word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    word_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn count_words(text: &str) -> usize {
    word_pattern().find_iter(text).count()
}

/// be-verb followed by a token ending in "ed". Expects lower-cased input.
pub fn count_passive(lower: &str) -> usize {
    passive_pattern().find_iter(lower).count()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance; 0.0 for an empty slice.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Shannon entropy (nats) of the token frequency distribution.
pub fn shannon_entropy(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for token in tokens {
        *counts.entry(token.as_str()).or_default() += 1;
    }
    let n = tokens.len() as f64;
    -counts
        .values()
        .map(|&c| {
            let p = c as f64 / n;
            p * p.ln()
        })
        .sum::<f64>()
}

/// Distinct tokens over total tokens; 0.0 for an empty slice.
pub fn type_token_ratio(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let distinct: rustc_hash::FxHashSet<&str> = tokens.iter().map(String::as_str).collect();
    distinct.len() as f64 / tokens.len() as f64
}
