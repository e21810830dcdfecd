pub mod lexicon;
pub mod segment;
pub mod tagger;
pub mod tokens;

use std::collections::HashMap;

/// Coarse part-of-speech labels (Universal Dependencies names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Adp,
    Det,
    Pron,
    Cconj,
    Sconj,
    Part,
    Num,
    Punct,
    Sym,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub token_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Byte offset within the tagged sentence.
    pub offset: usize,
    pub tag: PosTag,
}

/// Sentence segmentation and part-of-speech tagging.
pub trait LanguageAnalyzer {
    fn segment(&self, text: &str) -> Vec<Sentence>;
    fn tag(&self, sentence: &str) -> Vec<Token>;
}

/// English analyzer driven by a word list plus suffix and context rules.
///
/// Build it once and pass it by reference; it holds no mutable state.
#[derive(Debug, Clone)]
pub struct RuleAnalyzer {
    lexicon: HashMap<String, PosTag>,
}

impl RuleAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: lexicon::default_lexicon(),
        }
    }

    /// Override or extend the word list.
    pub fn with_word(mut self, word: &str, tag: PosTag) -> Self {
        self.lexicon.insert(word.to_lowercase(), tag);
        self
    }
}

impl Default for RuleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageAnalyzer for RuleAnalyzer {
    fn segment(&self, text: &str) -> Vec<Sentence> {
        segment::split_sentences(text)
    }

    fn tag(&self, sentence: &str) -> Vec<Token> {
        tagger::tag_sentence(&self.lexicon, sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_word_overrides_lexicon() {
        let analyzer = RuleAnalyzer::new().with_word("Today", PosTag::Noun);
        let tags = analyzer.tag("We met today.");
        assert_eq!(tags[2].tag, PosTag::Noun);
    }

    #[test]
    fn segment_then_tag() {
        let analyzer = RuleAnalyzer::new();
        let sentences = analyzer.segment("A cat sat. A dog ran.");
        assert_eq!(sentences.len(), 2);
        let tokens = analyzer.tag(&sentences[1].text);
        assert_eq!(tokens.len(), sentences[1].token_count);
    }
}
