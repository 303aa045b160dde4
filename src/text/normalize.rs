// src/text/normalize.rs
//! Text cleaning: case folding, URL/email stripping, letters-only, whitespace collapse.
//!
//! The steps run in a fixed order. Dropping punctuation can expose a new URL
//! prefix (`h,ttpx` becomes `httpx`), so the passes repeat until the text stops
//! changing. The output only contains lowercase ASCII letters separated by single
//! spaces, and running `normalize` on it again returns it unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("url regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").expect("email regex"));
static NON_ALPHA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z\s]").expect("non-alpha regex"));
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Clean raw review text. Never fails; empty or junk input yields `""`.
pub fn normalize(text: &str) -> String {
    let mut current = clean_pass(&text.to_lowercase());
    // Every pass either shortens the text or only rewrites whitespace, so this
    // settles after a few rounds.
    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(lower: &str) -> String {
    let no_urls = URL_RE.replace_all(lower, "");
    let no_emails = EMAIL_RE.replace_all(&no_urls, "");
    // Input is already lowercased, so [^a-z\s] also drops digits, punctuation,
    // emoji and any non-ASCII letters.
    let letters = NON_ALPHA_RE.replace_all(&no_emails, "");
    WS_RE.replace_all(&letters, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("This product is AMAZING!!! I absolutely LOVE it."),
            "this product is amazing i absolutely love it"
        );
    }

    #[test]
    fn removes_urls_and_emails() {
        let s = normalize("See https://example.com/x?y=1 or www.shop.io, mail me@shop.io now");
        assert_eq!(s, "see or mail now");
    }

    #[test]
    fn drops_digits_emoji_and_accents() {
        assert_eq!(normalize("5 stars ❤️ café"), "stars caf");
    }

    #[test]
    fn apostrophes_are_stripped() {
        assert_eq!(normalize("Don't buy, it's junk"), "dont buy its junk");
    }

    #[test]
    fn whitespace_is_collapsed_and_trimmed() {
        assert_eq!(normalize("  a \t\n  b   "), "a b");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn is_a_projection() {
        for s in ["Hello,   World!", "x@y.z  http://q", "  Ünïcödé 123 ok "] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn url_prefix_exposed_by_punctuation_is_removed() {
        assert_eq!(normalize("great h,ttpx deal"), "great deal");
        assert_eq!(normalize("w.ww.shop"), "");
        assert_eq!(normalize("h.ttps://"), "");
        for s in ["great h,ttpx deal", "w.ww.shop", "h.ttps://", "nice w-w-w find"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }
}
