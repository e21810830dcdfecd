use std::path::PathBuf;

use crate::quiz::questions::MaskMode;

const DEFAULT_DB_PATH: &str = "data/quizgen.sqlite";
pub const SENTENCE_MIN_TOKENS: usize = 10;
pub const PLACEHOLDER: &str = "______";

/// Runtime settings. Defaults, then environment, then CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub min_tokens: usize,
    pub placeholder: String,
    pub mask_mode: MaskMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            min_tokens: SENTENCE_MIN_TOKENS,
            placeholder: PLACEHOLDER.to_string(),
            mask_mode: MaskMode::Token,
        }
    }
}

/// A blank marker must be visible and free of letters and digits, so it never
/// matches ordinary sentence text.
pub fn is_valid_placeholder(p: &str) -> bool {
    !p.trim().is_empty() && !p.chars().any(char::is_alphanumeric)
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            db_path: get("QUIZGEN_DB").map(PathBuf::from).unwrap_or(default.db_path),
            min_tokens: get("QUIZGEN_MIN_TOKENS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.min_tokens),
            placeholder: get("QUIZGEN_PLACEHOLDER")
                .filter(|v| is_valid_placeholder(v))
                .unwrap_or(default.placeholder),
            mask_mode: default.mask_mode,
        }
    }
}
