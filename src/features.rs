//! Feature extraction over reduced tokens.
//!
//! Scoring is additive: matched positive scores and matched negative magnitudes
//! are summed separately, then normalized by token count. A token present in
//! both maps counts as positive only (positive map is checked first).
//!
//! Negation markers are counted and reported, but do not flip polarity.

use serde::Serialize;
use std::sync::Arc;

use crate::lexicon::Lexicon;

/// Tokens counted into `negation_count`. Overlaps the stopword filter's
/// negation set; also carries apostrophe-free contraction forms.
pub const NEGATION_MARKERS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "nowhere", "don't",
    "doesn't", "didn't", "won't", "wouldn't", "shouldn't", "couldn't", "dont", "doesnt", "didnt",
    "wont", "wouldnt", "shouldnt", "couldnt",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureSet {
    pub positive_score: f64,
    /// Sum of matched negative magnitudes (always ≥ 0).
    pub negative_score: f64,
    pub total_score: f64,
    /// `total_score / token_count`, or 0 for an empty token list.
    pub normalized_score: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    pub negation_count: usize,
    pub token_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigrams: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigram_count: Option<usize>,
    pub word_count: usize,
    pub avg_word_length: f64,
}

/// Owns the lexicon for its lifetime. Cloning shares the same lexicon.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    lexicon: Arc<Lexicon>,
}

impl FeatureExtractor {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    pub fn with_shared(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Pure: the same tokens always yield the same `FeatureSet`.
    pub fn extract(&self, tokens: &[String], include_ngrams: bool) -> FeatureSet {
        let mut fs = FeatureSet::default();

        for tok in tokens {
            if let Some(s) = self.lexicon.score_positive(tok) {
                fs.positive_score += s;
                fs.positive_count += 1;
            } else if let Some(s) = self.lexicon.score_negative(tok) {
                fs.negative_score += s.abs();
                fs.negative_count += 1;
            }
        }

        fs.token_count = tokens.len();
        fs.total_score = fs.positive_score - fs.negative_score;
        fs.normalized_score = if fs.token_count > 0 {
            fs.total_score / fs.token_count as f64
        } else {
            0.0
        };

        fs.negation_count = count_negations(tokens);

        if include_ngrams {
            let bigrams = extract_ngrams(tokens, 2);
            fs.bigram_count = Some(bigrams.len());
            fs.bigrams = Some(bigrams);
        }

        fs.word_count = tokens.len();
        fs.avg_word_length = if tokens.is_empty() {
            0.0
        } else {
            let chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
            chars as f64 / tokens.len() as f64
        };

        fs
    }
}

pub fn count_negations(tokens: &[String]) -> usize {
    tokens
        .iter()
        .filter(|t| NEGATION_MARKERS.contains(&t.as_str()))
        .count()
}

/// Contiguous `n`-token windows joined by a single space, in order.
/// Empty when `n == 0` or `n` exceeds the token count.
pub fn extract_ngrams(tokens: &[String], n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    tokens.windows(n).map(|w| w.join(" ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn lex() -> Lexicon {
        Lexicon::from_entries([("amazing", 5.0), ("love", 3.0), ("terrible", -5.0), ("waste", -3.0)])
    }

    #[test]
    fn sums_positive_and_negative_separately() {
        let fx = FeatureExtractor::new(lex());
        let fs = fx.extract(&toks(&["product", "amazing", "love", "waste"]), false);
        assert_eq!(fs.positive_score, 8.0);
        assert_eq!(fs.negative_score, 3.0);
        assert_eq!(fs.total_score, 5.0);
        assert_eq!(fs.normalized_score, 1.25);
        assert_eq!(fs.positive_count, 2);
        assert_eq!(fs.negative_count, 1);
        assert_eq!(fs.token_count, 4);
        assert!(fs.bigrams.is_none());
        assert!(fs.bigram_count.is_none());
    }

    #[test]
    fn word_in_both_maps_counts_as_positive() {
        let fx = FeatureExtractor::new(Lexicon::parse("sick,2\nsick,-1\n"));
        let fs = fx.extract(&toks(&["sick"]), false);
        assert_eq!(fs.positive_count, 1);
        assert_eq!(fs.negative_count, 0);
        assert_eq!(fs.positive_score, 2.0);
        assert_eq!(fs.negative_score, 0.0);
        assert_eq!(fs.normalized_score, 2.0);
    }

    #[test]
    fn empty_tokens_give_zeroes() {
        let fx = FeatureExtractor::new(lex());
        let fs = fx.extract(&[], true);
        assert_eq!(fs.normalized_score, 0.0);
        assert_eq!(fs.token_count, 0);
        assert_eq!(fs.avg_word_length, 0.0);
        assert_eq!(fs.bigram_count, Some(0));
    }

    #[test]
    fn bigrams_and_length_stats() {
        let fx = FeatureExtractor::new(Lexicon::empty());
        let fs = fx.extract(&toks(&["not", "worth", "price"]), true);
        assert_eq!(
            fs.bigrams.as_deref(),
            Some(&["not worth".to_string(), "worth price".to_string()][..])
        );
        assert_eq!(fs.bigram_count, Some(2));
        assert_eq!(fs.word_count, 3);
        assert!((fs.avg_word_length - 13.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn negations_counted_but_do_not_flip() {
        let fx = FeatureExtractor::new(lex());
        let fs = fx.extract(&toks(&["not", "love", "dont", "nothing"]), false);
        assert_eq!(fs.negation_count, 3);
        assert_eq!(fs.positive_score, 3.0);
        assert!(fs.normalized_score > 0.0);
    }

    #[test]
    fn ngram_edge_cases() {
        let t = toks(&["a", "b", "c"]);
        assert_eq!(extract_ngrams(&t, 3), vec!["a b c"]);
        assert!(extract_ngrams(&t, 4).is_empty());
        assert!(extract_ngrams(&t, 0).is_empty());
        assert_eq!(extract_ngrams(&t, 1), vec!["a", "b", "c"]);
    }

    #[test]
    fn shared_lexicon_is_not_copied() {
        let shared = Arc::new(lex());
        let a = FeatureExtractor::with_shared(shared.clone());
        let b = a.clone();
        assert_eq!(Arc::strong_count(&shared), 3);
        assert_eq!(b.lexicon().positive_len(), 2);
    }
}
