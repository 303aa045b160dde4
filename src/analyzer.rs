// src/analyzer.rs
//! End-to-end analysis: raw text → preprocessing → features → classification.
//!
//! `SentimentAnalyzer` holds no mutable state after construction; it is `Send + Sync`
//! and is meant to be shared behind an `Arc` across concurrent callers.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::classify::{classify, Sentiment};
use crate::config::AnalyzerConfig;
use crate::features::{FeatureExtractor, FeatureSet};
use crate::lexicon::Lexicon;
use crate::text::{Preprocessor, ReduceMode};

/// Result of one `analyze` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub original_text: String,
    pub cleaned_text: String,
    pub processed_tokens: Vec<String>,
    pub sentiment: Sentiment,
    /// In `[0, 100]`, rounded to 2 decimals.
    pub confidence: f64,
    /// Normalized score rounded to 4 decimals.
    pub sentiment_score: f64,
    pub positive_words: usize,
    pub negative_words: usize,
    pub total_words: usize,
}

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    preprocessor: Preprocessor,
    extractor: FeatureExtractor,
    include_ngrams: bool,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: Lexicon, mode: ReduceMode) -> Self {
        Self::with_shared_lexicon(Arc::new(lexicon), mode)
    }

    pub fn with_shared_lexicon(lexicon: Arc<Lexicon>, mode: ReduceMode) -> Self {
        Self {
            preprocessor: Preprocessor::new(mode),
            extractor: FeatureExtractor::with_shared(lexicon),
            include_ngrams: true,
        }
    }

    /// Load the lexicon named by the config (soft-fails to empty) and apply its options.
    pub fn from_config(cfg: &AnalyzerConfig) -> Self {
        let lexicon = Lexicon::load(&cfg.lexicon_path);
        Self::new(lexicon, cfg.reduce_mode).include_ngrams(cfg.include_ngrams)
    }

    pub fn include_ngrams(mut self, on: bool) -> Self {
        self.include_ngrams = on;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.extractor.lexicon()
    }

    pub fn reduce_mode(&self) -> ReduceMode {
        self.preprocessor.mode()
    }

    /// Full feature set for a text, without classification.
    pub fn features(&self, text: &str) -> FeatureSet {
        let pre = self.preprocessor.preprocess(text);
        self.extractor.extract(&pre.processed_tokens, self.include_ngrams)
    }

    /// Deterministic: the same text always yields the same result.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let pre = self.preprocessor.preprocess(text);
        let features = self
            .extractor
            .extract(&pre.processed_tokens, self.include_ngrams);
        let class = classify(&features);

        debug!(
            id = %anon_hash(text),
            sentiment = %class.label,
            score = features.normalized_score,
            tokens = features.token_count,
            negations = features.negation_count,
            "analyzed"
        );

        SentimentResult {
            original_text: text.to_string(),
            cleaned_text: pre.cleaned_text,
            processed_tokens: pre.processed_tokens,
            sentiment: class.label,
            confidence: round_to(class.confidence, 2),
            sentiment_score: round_to(features.normalized_score, 4),
            positive_words: features.positive_count,
            negative_words: features.negative_count,
            total_words: features.token_count,
        }
    }

    /// Analyze many texts independently, preserving input order.
    pub fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SentimentResult> {
        texts.iter().map(|t| self.analyze(t.as_ref())).collect()
    }
}

/// Short SHA-256 prefix of the text; logs never carry raw review text.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

fn round_to(x: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (x * f).round() / f
}
