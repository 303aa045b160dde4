//! Stopword removal that never drops negation words.
//!
//! The stopword list is the standard English closed-class list. Negations are
//! carved out of it because they carry polarity information for reviews.

use std::collections::HashSet;

/// Standard English stopwords (closed-class words, incl. clitic fragments).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Negations that survive stopword removal.
///
/// The normalizer strips apostrophes, so each contraction is also listed in its
/// apostrophe-free form (`don't` arrives here as `dont`).
pub const NEGATION_SET: &[&str] = &[
    "no", "not", "nor", "never", "don't", "doesn't", "didn't", "won't", "wouldn't", "shouldn't",
    "couldn't", "dont", "doesnt", "didnt", "wont", "wouldnt", "shouldnt", "couldnt",
];

#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: HashSet<&'static str>,
}

impl StopwordFilter {
    /// English stopwords minus [`NEGATION_SET`].
    pub fn english() -> Self {
        let negations: HashSet<&str> = NEGATION_SET.iter().copied().collect();
        let stopwords = ENGLISH_STOPWORDS
            .iter()
            .copied()
            .filter(|w| !negations.contains(w))
            .collect();
        Self { stopwords }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Drop stopwords, keeping the relative order of everything else.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stopword(t))
            .collect()
    }
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}
