use std::sync::LazyLock;

use regex::Regex;

// Decimals first, then words with inner hyphens/apostrophes, then any single symbol.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)+|\w+(?:[-'’]\w+)*|[^\w\s]").unwrap());

/// A raw token: its text and byte offset in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl Span<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn is_word(&self) -> bool {
        self.text.chars().next().is_some_and(|c| c.is_alphanumeric() || c == '_')
    }
}

pub fn tokenize(text: &str) -> Vec<Span<'_>> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| Span {
            text: m.as_str(),
            start: m.start(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(s: &str) -> Vec<&str> {
        tokenize(s).iter().map(|t| t.text).collect()
    }

    #[test]
    fn punctuation_is_separate() {
        assert_eq!(texts("Hello, world."), vec!["Hello", ",", "world", "."]);
    }

    #[test]
    fn keeps_inner_hyphen_and_apostrophe() {
        assert_eq!(texts("a well-known fox's den"), vec!["a", "well-known", "fox's", "den"]);
    }

    #[test]
    fn decimals_stay_whole() {
        assert_eq!(texts("pi is 3.14."), vec!["pi", "is", "3.14", "."]);
    }

    #[test]
    fn offsets_point_into_source() {
        let s = "The  river bank";
        for t in tokenize(s) {
            assert_eq!(&s[t.start..t.end()], t.text);
        }
    }
}
