// src/lexicon.rs
//! Word → polarity lexicon, loaded once and read-only afterwards.
//!
//! File format (UTF-8, one entry per line):
//! ```text
//! # comment
//! amazing,5
//! terrible,-5
//! ```
//! Blank lines, `#` comments, lines without exactly one comma, unparsable or
//! non-finite scores and zero scores are skipped silently. Words are trimmed, so
//! `fine ,1` keys `fine`. A missing file is not fatal: it is logged and yields an
//! empty lexicon.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Positive words (score > 0) and negative words (score < 0, stored with its
/// sign). A word listed with both signs lives in both maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    positive: HashMap<String, f64>,
    negative: HashMap<String, f64>,
}

impl Lexicon {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load from a `word,score` file. Never fails: I/O errors log a warning and
    /// produce an empty lexicon, so classification falls back to Neutral.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "lexicon not readable, using empty lexicon");
                return Self::empty();
            }
        };

        let lex = Self::parse(&content);
        info!(
            path = %path.display(),
            positive = lex.positive.len(),
            negative = lex.negative.len(),
            "lexicon loaded"
        );
        lex
    }

    /// Parse lexicon text. A later line overrides an earlier one for the same
    /// word within the same polarity.
    pub fn parse(content: &str) -> Self {
        let mut lex = Self::empty();
        for (lineno, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_line(line) {
                Some((word, score)) => lex.insert(word, score),
                None => debug!(line = lineno + 1, "skipping malformed lexicon line"),
            }
        }
        lex
    }

    /// Build from in-memory entries, with the same rules as [`Lexicon::parse`].
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut lex = Self::empty();
        for (word, score) in entries {
            if score.is_finite() {
                lex.insert(word.into(), score);
            }
        }
        lex
    }

    fn insert(&mut self, word: String, score: f64) {
        if score > 0.0 {
            self.positive.insert(word, score);
        } else if score < 0.0 {
            self.negative.insert(word, score);
        }
    }

    pub fn score_positive(&self, word: &str) -> Option<f64> {
        self.positive.get(word).copied()
    }

    /// Signed (negative) score of `word`, if it is a negative entry.
    pub fn score_negative(&self, word: &str) -> Option<f64> {
        self.negative.get(word).copied()
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

fn parse_line(line: &str) -> Option<(String, f64)> {
    let (word, score) = line.split_once(',')?;
    if score.contains(',') {
        return None;
    }
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    let score: f64 = score.trim().parse().ok()?;
    score.is_finite().then(|| (word.to_string(), score))
}
