use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lang::{LanguageAnalyzer, PosTag, Token};
use crate::config::PLACEHOLDER;

/// How the chosen noun is blanked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskMode {
    /// Replace exactly the chosen token.
    #[default]
    Token,
    /// Replace the first substring match of the chosen noun, even inside another word.
    FirstMatch,
}

impl MaskMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskMode::Token => "token",
            MaskMode::FirstMatch => "first-match",
        }
    }
}

impl fmt::Display for MaskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "token" => Ok(MaskMode::Token),
            "first-match" => Ok(MaskMode::FirstMatch),
            other => Err(format!("unknown mask mode '{}' (expected token or first-match)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub answer: String,
}

#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    placeholder: String,
    mode: MaskMode,
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new(PLACEHOLDER, MaskMode::Token)
    }
}

impl QuestionGenerator {
    pub fn new(placeholder: &str, mode: MaskMode) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            mode,
        }
    }

    /// One question per sentence that has a common noun, in input order.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        analyzer: &dyn LanguageAnalyzer,
        sentences: &[String],
        rng: &mut R,
    ) -> Vec<Question> {
        let mut questions = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            // Masking must leave exactly one placeholder behind.
            if sentence.contains(&self.placeholder) {
                debug!("Skipping sentence that already contains the placeholder");
                continue;
            }

            let tokens = analyzer.tag(sentence);
            let nouns: Vec<&Token> = tokens.iter().filter(|t| t.tag == PosTag::Noun).collect();
            if nouns.is_empty() {
                debug!("No noun in: {}", sentence);
                continue;
            }

            let chosen = nouns[rng.gen_range(0..nouns.len())];
            if let Some(text) = self.mask(sentence, chosen) {
                questions.push(Question {
                    text,
                    answer: chosen.text.clone(),
                });
            }
        }
        questions
    }

    fn mask(&self, sentence: &str, noun: &Token) -> Option<String> {
        let start = match self.mode {
            MaskMode::Token => noun.offset,
            MaskMode::FirstMatch => sentence.find(noun.text.as_str())?,
        };
        let end = start + noun.text.len();
        Some(format!("{}{}{}", &sentence[..start], self.placeholder, &sentence[end..]))
    }
}

// ── Tests ──
