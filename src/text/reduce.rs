//! Morphological reduction of tokens to a root form.
//!
//! Three modes:
//! - `Lemmatize` (default): noun lemmatizer, irregular table + plural suffix rules.
//! - `Stem`: English Snowball stemmer.
//! - `None`: identity.
//!
//! Every mode is total and deterministic: one output token per input token,
//! unknown words map to themselves (or to their suffix-stripped form).

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReduceMode {
    #[default]
    #[serde(alias = "lemma")]
    Lemmatize,
    Stem,
    #[serde(alias = "off")]
    None,
}

impl fmt::Display for ReduceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReduceMode::Lemmatize => "lemmatize",
            ReduceMode::Stem => "stem",
            ReduceMode::None => "none",
        };
        f.write_str(s)
    }
}

impl FromStr for ReduceMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lemmatize" | "lemma" => Ok(ReduceMode::Lemmatize),
            "stem" => Ok(ReduceMode::Stem),
            "none" | "off" => Ok(ReduceMode::None),
            other => anyhow::bail!("unknown reduce mode: {other}"),
        }
    }
}

// Stemmer is Send + Sync and stateless; one instance serves all callers.
static STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

static IRREGULAR_NOUNS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("lives", "life"),
        ("shelves", "shelf"),
        ("halves", "half"),
        ("thieves", "thief"),
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("headaches", "headache"),
        ("batteries", "battery"),
    ]
    .into_iter()
    .collect()
});

/// Words ending in `s` that are not plurals.
const INVARIANT: &[&str] = &[
    "always", "perhaps", "sometimes", "whereas", "afterwards", "thanks", "news", "lens",
    "series", "species", "means", "yes", "was", "has", "does", "its", "this", "thus", "plus",
    "less", "unless", "regardless", "nevertheless", "towards", "anyways",
];

/// Reduce every token with the given mode. Output length equals input length.
pub fn reduce(tokens: Vec<String>, mode: ReduceMode) -> Vec<String> {
    match mode {
        ReduceMode::None => tokens,
        ReduceMode::Stem => tokens.iter().map(|t| stem(t)).collect(),
        ReduceMode::Lemmatize => tokens.iter().map(|t| lemmatize(t)).collect(),
    }
}

pub fn stem(word: &str) -> String {
    STEMMER.stem(word).into_owned()
}

/// Noun lemma of `word` (plural → singular); non-plurals come back unchanged.
pub fn lemmatize(word: &str) -> String {
    if let Some(lemma) = IRREGULAR_NOUNS.get(word) {
        return (*lemma).to_string();
    }
    if word.len() <= 3 || INVARIANT.contains(&word) || !word.ends_with('s') {
        return word.to_string();
    }
    if ["ss", "us", "is", "ics"].iter().any(|suf| word.ends_with(suf)) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if word.len() > 4 {
            return format!("{stem}y");
        }
    }
    for suf in ["sses", "xes", "ches", "shes"] {
        if word.ends_with(suf) {
            return word[..word.len() - 2].to_string();
        }
    }
    word[..word.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn lemmatize_regular_plurals() {
        assert_eq!(lemmatize("products"), "product");
        assert_eq!(lemmatize("purchases"), "purchase");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("watches"), "watch");
        assert_eq!(lemmatize("stories"), "story");
        assert_eq!(lemmatize("glasses"), "glass");
    }

    #[test]
    fn lemmatize_irregular_and_invariant() {
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("knives"), "knife");
        assert_eq!(lemmatize("always"), "always");
        assert_eq!(lemmatize("seamless"), "seamless");
        assert_eq!(lemmatize("status"), "status");
        assert_eq!(lemmatize("electronics"), "electronics");
        assert_eq!(lemmatize("ties"), "tie");
    }

    #[test]
    fn lemmatize_leaves_non_plurals_alone() {
        for w in ["amazing", "love", "terrible", "waste", "nothing", "okay", "broke"] {
            assert_eq!(lemmatize(w), w);
        }
    }

    #[test]
    fn stem_uses_snowball_english() {
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("loved"), "love");
        assert_eq!(stem("disappointing"), "disappoint");
    }

    #[test]
    fn reduce_is_one_to_one() {
        let input = toks(&["products", "running", "xyzzy", "no"]);
        for mode in [ReduceMode::Lemmatize, ReduceMode::Stem, ReduceMode::None] {
            let out = reduce(input.clone(), mode);
            assert_eq!(out.len(), input.len(), "mode {mode}");
        }
        assert_eq!(reduce(input.clone(), ReduceMode::None), input);
        assert_eq!(reduce(toks(&["xyzzy"]), ReduceMode::Lemmatize), toks(&["xyzzy"]));
    }

    #[test]
    fn mode_parses_from_str_and_serde() {
        assert_eq!("Stem".parse::<ReduceMode>().unwrap(), ReduceMode::Stem);
        assert_eq!("none".parse::<ReduceMode>().unwrap(), ReduceMode::None);
        assert!("porter".parse::<ReduceMode>().is_err());
        let m: ReduceMode = serde_json::from_str("\"lemmatize\"").unwrap();
        assert_eq!(m, ReduceMode::Lemmatize);
        assert_eq!(ReduceMode::default(), ReduceMode::Lemmatize);
    }

    #[test]
    fn aliases_accepted_by_both_parsers() {
        for (alias, mode) in [("lemma", ReduceMode::Lemmatize), ("off", ReduceMode::None)] {
            assert_eq!(alias.parse::<ReduceMode>().unwrap(), mode);
            let m: ReduceMode = serde_json::from_str(&format!("\"{alias}\"")).unwrap();
            assert_eq!(m, mode);
        }
    }
}
