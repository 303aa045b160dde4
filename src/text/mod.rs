// src/text/mod.rs
//! Preprocessing pipeline: normalize → tokenize → stopword filter → reduce.

pub mod filter;
pub mod normalize;
pub mod reduce;
pub mod tokenize;

pub use filter::{StopwordFilter, NEGATION_SET};
pub use normalize::normalize;
pub use reduce::{reduce, ReduceMode};
pub use tokenize::tokenize;

/// The three views of a text produced by [`Preprocessor::preprocess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessed {
    /// Normalized text (lowercase letters and single spaces).
    pub cleaned_text: String,
    /// Tokens of the cleaned text, before filtering.
    pub tokens: Vec<String>,
    /// Filtered and reduced tokens; the input to feature extraction.
    pub processed_tokens: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    filter: StopwordFilter,
    mode: ReduceMode,
}

impl Preprocessor {
    pub fn new(mode: ReduceMode) -> Self {
        Self {
            filter: StopwordFilter::english(),
            mode,
        }
    }

    pub fn mode(&self) -> ReduceMode {
        self.mode
    }

    pub fn preprocess(&self, text: &str) -> Preprocessed {
        let cleaned_text = normalize(text);
        let tokens = tokenize(&cleaned_text);
        let filtered = self.filter.filter(tokens.clone());
        let processed_tokens = reduce(filtered, self.mode);
        Preprocessed {
            cleaned_text,
            tokens,
            processed_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_preprocess_of_positive_review() {
        let p = Preprocessor::default();
        let out = p.preprocess("This product is AMAZING!!! I absolutely LOVE it. Best purchase ever! ❤️");
        assert_eq!(
            out.cleaned_text,
            "this product is amazing i absolutely love it best purchase ever"
        );
        assert_eq!(out.tokens.len(), 11);
        assert_eq!(
            out.processed_tokens,
            vec!["product", "amazing", "absolutely", "love", "best", "purchase", "ever"]
        );
    }

    #[test]
    fn contraction_negation_survives_as_stripped_form() {
        let p = Preprocessor::default();
        let out = p.preprocess("Don't waste your money");
        assert_eq!(out.processed_tokens, vec!["dont", "waste", "money"]);
    }

    #[test]
    fn stem_mode_reduces_inflections() {
        let p = Preprocessor::new(ReduceMode::Stem);
        assert_eq!(p.mode(), ReduceMode::Stem);
        let out = p.preprocess("Loved the products");
        assert_eq!(out.processed_tokens, vec!["love", "product"]);
    }

    #[test]
    fn empty_text_yields_empty_views() {
        let out = Preprocessor::default().preprocess("   !!! 123 ");
        assert_eq!(out.cleaned_text, "");
        assert!(out.tokens.is_empty());
        assert!(out.processed_tokens.is_empty());
    }
}
