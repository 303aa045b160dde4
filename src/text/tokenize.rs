//! Word tokenizer built on Unicode word boundaries (UAX #29).
//!
//! Boundary rules keep contractions like `don't` together as a single token,
//! and skip punctuation/whitespace segments entirely.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into word tokens, preserving order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_owned).collect()
}
