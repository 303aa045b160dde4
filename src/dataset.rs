//! Batch evaluation over labelled review rows.
//!
//! Rows come from the dataset collaborator (`Review_ID`, `Rating`, `Review_Text`,
//! `Sentiment`). Each row is analyzed independently; the report carries every
//! prediction plus accuracy against the row's own label and the predicted
//! label distribution. File I/O stays with the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::analyzer::SentimentAnalyzer;
use crate::classify::Sentiment;

const PROGRESS_EVERY: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "Review_ID", alias = "review_id")]
    pub review_id: u64,
    /// Star rating, 1..=5.
    #[serde(rename = "Rating", alias = "rating")]
    pub rating: u8,
    #[serde(rename = "Review_Text", alias = "review_text")]
    pub review_text: String,
    #[serde(rename = "Sentiment", alias = "sentiment")]
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub review_id: u64,
    pub rating: u8,
    pub review_text: String,
    pub actual: Sentiment,
    pub predicted: Sentiment,
    pub confidence: f64,
    pub sentiment_score: f64,
    pub positive_words: usize,
    pub negative_words: usize,
}

impl Prediction {
    pub fn is_correct(&self) -> bool {
        self.actual == self.predicted
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub correct: usize,
    /// Percent in `[0, 100]`; 0 for an empty batch.
    pub accuracy: f64,
    /// Predicted label → count.
    pub distribution: BTreeMap<Sentiment, usize>,
    pub predictions: Vec<Prediction>,
}

pub fn evaluate(analyzer: &SentimentAnalyzer, records: &[ReviewRecord]) -> BatchReport {
    let total = records.len();
    let mut predictions = Vec::with_capacity(total);

    for (idx, rec) in records.iter().enumerate() {
        let r = analyzer.analyze(&rec.review_text);
        predictions.push(Prediction {
            review_id: rec.review_id,
            rating: rec.rating,
            review_text: rec.review_text.clone(),
            actual: rec.sentiment,
            predicted: r.sentiment,
            confidence: r.confidence,
            sentiment_score: r.sentiment_score,
            positive_words: r.positive_words,
            negative_words: r.negative_words,
        });

        if (idx + 1) % PROGRESS_EVERY == 0 {
            info!(processed = idx + 1, total, "batch progress");
        }
    }

    let correct = predictions.iter().filter(|p| p.is_correct()).count();
    let accuracy = if total > 0 {
        correct as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let mut distribution = BTreeMap::new();
    for p in &predictions {
        *distribution.entry(p.predicted).or_insert(0) += 1;
    }

    info!(total, correct, accuracy = %format!("{accuracy:.2}"), "batch analysis complete");

    BatchReport {
        total,
        correct,
        accuracy,
        distribution,
        predictions,
    }
}
