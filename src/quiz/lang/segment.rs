use std::sync::LazyLock;

use regex::Regex;

use super::tokens::{tokenize, Span};
use super::Sentence;

static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const TERMINATORS: &[&str] = &[".", "!", "?"];
const CLOSERS: &[&str] = &["\"", "'", "”", "’", ")", "]"];
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "fig", "no", "vol", "pp",
    "e", "i", "g", "al", "approx", "dept", "inc", "ltd", "co", "jan", "feb", "mar", "apr",
    "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Split text into sentences.
///
/// Blank lines always end a sentence. Inside a paragraph, line wraps and runs of
/// whitespace collapse to a single space, and a sentence ends at `.`, `!` or `?`
/// (plus any closing quotes/brackets) when the next token starts a new sentence.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    for paragraph in PARAGRAPH_RE.split(text) {
        let flat = WHITESPACE_RE.replace_all(paragraph.trim(), " ");
        if flat.is_empty() {
            continue;
        }
        split_paragraph(&flat, &mut sentences);
    }
    sentences
}

fn split_paragraph(paragraph: &str, out: &mut Vec<Sentence>) {
    let tokens = tokenize(paragraph);
    let mut first = 0;
    let mut i = 0;

    while i < tokens.len() {
        if !TERMINATORS.contains(&tokens[i].text) || is_abbreviation(&tokens, i) {
            i += 1;
            continue;
        }

        // Swallow "?!", "..." and closers glued to the terminator.
        let mut last = i;
        while last + 1 < tokens.len() {
            let next = &tokens[last + 1];
            let glued = next.start == tokens[last].end();
            if TERMINATORS.contains(&next.text) || (glued && CLOSERS.contains(&next.text)) {
                last += 1;
            } else {
                break;
            }
        }

        let at_end = last + 1 == tokens.len();
        if at_end || starts_sentence(&tokens[last + 1]) {
            out.push(build(paragraph, &tokens[first..=last]));
            first = last + 1;
        }
        i = last + 1;
    }

    if first < tokens.len() {
        out.push(build(paragraph, &tokens[first..]));
    }
}

fn build(paragraph: &str, tokens: &[Span<'_>]) -> Sentence {
    let start = tokens[0].start;
    let end = tokens[tokens.len() - 1].end();
    Sentence {
        text: paragraph[start..end].to_string(),
        token_count: tokens.len(),
    }
}

fn starts_sentence(token: &Span<'_>) -> bool {
    token
        .text
        .chars()
        .next()
        .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit() || "\"“'‘(".contains(c))
}

/// A period right after a known abbreviation or a single capital initial.
fn is_abbreviation(tokens: &[Span<'_>], idx: usize) -> bool {
    if tokens[idx].text != "." || idx == 0 {
        return false;
    }
    let prev = &tokens[idx - 1];
    // "word." must be glued to its period to count
    if prev.end() != tokens[idx].start || !prev.is_word() {
        return false;
    }
    let lower = prev.text.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
        || (prev.text.chars().count() == 1 && prev.text.chars().all(char::is_uppercase))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(s: &str) -> Vec<String> {
        split_sentences(s).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn splits_on_terminators() {
        assert_eq!(
            texts("The sun rose. Birds sang! Did you hear?"),
            vec!["The sun rose.", "Birds sang!", "Did you hear?"]
        );
    }

    #[test]
    fn counts_punctuation_as_tokens() {
        let s = split_sentences("The quick brown fox jumps over the lazy dog near the old river bridge today.");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].token_count, 16);
    }

    #[test]
    fn lowercase_continuation_does_not_split() {
        assert_eq!(texts("It costs 3 dollars. approx. more"), vec!["It costs 3 dollars. approx. more"]);
    }

    #[test]
    fn abbreviations_do_not_split() {
        assert_eq!(
            texts("Dr. Smith met Mr. Jones at noon. They talked."),
            vec!["Dr. Smith met Mr. Jones at noon.", "They talked."]
        );
    }

    #[test]
    fn initials_do_not_split() {
        assert_eq!(texts("J. R. Tolkien wrote books."), vec!["J. R. Tolkien wrote books."]);
    }

    #[test]
    fn closing_quote_stays_with_sentence() {
        assert_eq!(
            texts("He said \"stop.\" Then he left."),
            vec!["He said \"stop.\"", "Then he left."]
        );
    }

    #[test]
    fn opening_quote_starts_next_sentence() {
        assert_eq!(
            texts("He left. \"Hi,\" she said."),
            vec!["He left.", "\"Hi,\" she said."]
        );
    }

    #[test]
    fn line_wraps_collapse() {
        assert_eq!(
            texts("Water boils at one\nhundred degrees.\nIce melts."),
            vec!["Water boils at one hundred degrees.", "Ice melts."]
        );
    }

    #[test]
    fn blank_line_ends_sentence() {
        assert_eq!(texts("Chapter One\n\nIt began here."), vec!["Chapter One", "It began here."]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  \n\n \x0c ").is_empty());
    }

    #[test]
    fn trailing_fragment_kept() {
        assert_eq!(texts("One sentence. and a fragment"), vec!["One sentence. and a fragment"]);
        assert_eq!(texts("Done. Unfinished tail"), vec!["Done.", "Unfinished tail"]);
    }
}
