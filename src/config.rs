// src/config.rs
//! Analyzer configuration (TOML) with env overrides.
//!
//! ```toml
//! lexicon_path = "config/sentiment_lexicon.txt"
//! reduce_mode = "lemmatize"   # lemmatize | stem | none
//! include_ngrams = true
//! bind_addr = "127.0.0.1:8080"
//! ```
//!
//! Resolution: `REVIEW_SENTIMENT_CONFIG` (or `config/analyzer.toml`) → file values
//! → `REVIEW_SENTIMENT_LEXICON` / `REVIEW_SENTIMENT_BIND` overrides. A missing file
//! means defaults; a malformed one is an error.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::text::ReduceMode;

// --- env defaults & names ---
pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";
pub const DEFAULT_LEXICON_PATH: &str = "config/sentiment_lexicon.txt";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

pub const ENV_CONFIG_PATH: &str = "REVIEW_SENTIMENT_CONFIG";
pub const ENV_LEXICON_PATH: &str = "REVIEW_SENTIMENT_LEXICON";
pub const ENV_BIND_ADDR: &str = "REVIEW_SENTIMENT_BIND";

fn default_lexicon_path() -> PathBuf {
    PathBuf::from(DEFAULT_LEXICON_PATH)
}
fn default_include_ngrams() -> bool {
    true
}
fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    #[serde(default = "default_lexicon_path")]
    pub lexicon_path: PathBuf,
    #[serde(default)]
    pub reduce_mode: ReduceMode,
    #[serde(default = "default_include_ngrams")]
    pub include_ngrams: bool,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            lexicon_path: default_lexicon_path(),
            reduce_mode: ReduceMode::default(),
            include_ngrams: default_include_ngrams(),
            bind_addr: default_bind_addr(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let cfg: AnalyzerConfig = toml::from_str(s)?;
        Ok(cfg)
    }

    /// Read a TOML file. A missing file yields defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => Self::from_toml_str(&s)
                .with_context(|| format!("invalid analyzer config at {}", path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no analyzer config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("failed to read analyzer config at {}", path.display()))),
        }
    }

    /// Resolve config path from env, load it, then apply env overrides.
    pub fn from_env() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut cfg = Self::load_from_file(&path)?;
        cfg.apply_overrides(
            std::env::var(ENV_LEXICON_PATH).ok(),
            std::env::var(ENV_BIND_ADDR).ok(),
        );
        Ok(cfg)
    }

    fn apply_overrides(&mut self, lexicon: Option<String>, bind: Option<String>) {
        if let Some(p) = lexicon.filter(|s| !s.trim().is_empty()) {
            self.lexicon_path = PathBuf::from(p.trim());
        }
        if let Some(b) = bind.filter(|s| !s.trim().is_empty()) {
            self.bind_addr = b.trim().to_string();
        }
    }
}
