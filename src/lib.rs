// src/lib.rs
//! Lexicon-based sentiment classification for short product reviews.
//!
//! Pipeline: `text` (normalize → tokenize → stopword filter → reduce) →
//! `features` (uses the read-only `Lexicon`) → `classify`. `analyzer` composes
//! the stages; `dataset` and `api` are the batch and HTTP surfaces around it.

pub mod analyzer;
pub mod api;
pub mod classify;
pub mod config;
pub mod dataset;
pub mod features;
pub mod lexicon;
pub mod text;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::{SentimentAnalyzer, SentimentResult};
pub use crate::api::create_router;
pub use crate::classify::{classify, Classification, Sentiment};
pub use crate::config::AnalyzerConfig;
pub use crate::dataset::{evaluate, BatchReport, Prediction, ReviewRecord};
pub use crate::features::{FeatureExtractor, FeatureSet};
pub use crate::lexicon::Lexicon;
pub use crate::text::{Preprocessed, Preprocessor, ReduceMode};
