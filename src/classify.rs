// src/classify.rs
//! Threshold classifier: normalized score → (label, confidence).
//!
//! Policy:
//! - score >  +0.05 → Positive, confidence = min(score·100, 100)
//! - score <  −0.05 → Negative, confidence = min(|score|·100, 100)
//! - otherwise      → Neutral,  confidence = 50
//!
//! Any lexicon match at all adds a +20 boost (capped at 100). Boundaries are
//! strict, so exactly ±0.05 stays Neutral.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::FeatureSet;

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;
pub const NEUTRAL_CONFIDENCE: f64 = 50.0;
pub const MATCH_BOOST: f64 = 20.0;
pub const MAX_CONFIDENCE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: Sentiment,
    /// In `[0, 100]`.
    pub confidence: f64,
}

/// Total over all feature sets; never fails.
pub fn classify(features: &FeatureSet) -> Classification {
    let score = features.normalized_score;

    let (label, raw) = if score > POSITIVE_THRESHOLD {
        (Sentiment::Positive, (score * 100.0).min(MAX_CONFIDENCE))
    } else if score < NEGATIVE_THRESHOLD {
        (Sentiment::Negative, (score.abs() * 100.0).min(MAX_CONFIDENCE))
    } else {
        // NaN also lands here.
        (Sentiment::Neutral, NEUTRAL_CONFIDENCE)
    };

    let confidence = if features.positive_count > 0 || features.negative_count > 0 {
        (raw + MATCH_BOOST).min(MAX_CONFIDENCE)
    } else {
        raw
    };

    Classification { label, confidence }
}
