use std::collections::HashMap;

use super::tokens::{tokenize, Span};
use super::{PosTag, Token};

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they", "he", "she", "it", "who"];
const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "do", "does",
    "did", "don't", "doesn't", "didn't", "won't", "can't", "couldn't", "shouldn't", "wouldn't",
];
const PUNCTUATION: &str = ".,;:!?\"'()[]{}-/–—…“”‘’";
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ance", "ence", "ship", "hood", "dom",
    "ology", "ist", "ure", "age",
];
const ADJ_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ical", "ular", "ish"];

/// Tag every token of `sentence`: lexicon first, then suffixes and neighbours.
pub fn tag_sentence(lexicon: &HashMap<String, PosTag>, sentence: &str) -> Vec<Token> {
    let spans = tokenize(sentence);
    let lexical: Vec<Option<PosTag>> = spans.iter().map(|s| lexical_tag(lexicon, s)).collect();

    let mut tags: Vec<PosTag> = Vec::with_capacity(spans.len());
    for (i, span) in spans.iter().enumerate() {
        let tag = match lexical[i] {
            Some(t) => t,
            None => {
                let prev = i.checked_sub(1).map(|p| (spans[p].text, tags[p]));
                let next = lexical.get(i + 1).copied().flatten();
                resolve(span, i == 0, prev, next)
            }
        };
        tags.push(tag);
    }

    spans
        .into_iter()
        .zip(tags)
        .map(|(s, tag)| Token {
            text: s.text.to_string(),
            offset: s.start,
            tag,
        })
        .collect()
}

fn lexical_tag(lexicon: &HashMap<String, PosTag>, span: &Span<'_>) -> Option<PosTag> {
    let first = span.text.chars().next()?;
    if !span.is_word() {
        return Some(if PUNCTUATION.contains(first) {
            PosTag::Punct
        } else {
            PosTag::Sym
        });
    }
    if span.text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return Some(PosTag::Num);
    }
    lexicon.get(&span.text.to_lowercase()).copied()
}

/// Tag a word the lexicon does not know.
fn resolve(
    span: &Span<'_>,
    sentence_start: bool,
    prev: Option<(&str, PosTag)>,
    next: Option<PosTag>,
) -> PosTag {
    let word = span.text;
    let lower = word.to_lowercase();
    let prev_tag = prev.map(|(_, t)| t);

    if !sentence_start && word.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::Propn;
    }

    if lower.len() > 4 && lower.ends_with("ly") {
        return PosTag::Adv;
    }
    if lower.len() > 4 && lower.ends_with("ing") {
        return match prev_tag {
            Some(PosTag::Det | PosTag::Adj) => PosTag::Noun,
            _ => PosTag::Verb,
        };
    }
    if lower.len() > 3 && lower.ends_with("ed") {
        return match prev_tag {
            Some(PosTag::Det | PosTag::Adv) => PosTag::Adj,
            _ => PosTag::Verb,
        };
    }
    if ADJ_SUFFIXES.iter().any(|s| lower.len() > s.len() + 2 && lower.ends_with(s)) {
        return PosTag::Adj;
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.len() > s.len() + 2 && lower.ends_with(s)) {
        return PosTag::Noun;
    }

    match prev {
        // "can build", "will change"
        Some((p, PosTag::Aux)) if MODALS.contains(&p.to_lowercase().as_str()) => {
            return PosTag::Verb
        }
        // "they build"
        Some((p, PosTag::Pron)) if SUBJECT_PRONOUNS.contains(&p.to_lowercase().as_str()) => {
            return PosTag::Verb
        }
        // "to build the", "to move into"
        Some((p, _))
            if p.eq_ignore_ascii_case("to")
                && matches!(next, Some(PosTag::Det | PosTag::Pron | PosTag::Adp)) =>
        {
            return PosTag::Verb
        }
        _ => {}
    }

    // Third-person verb after a noun subject: "the fox jumps over"
    let third_person = lower.ends_with('s') && !lower.ends_with("ss");
    if third_person
        && matches!(prev_tag, Some(PosTag::Noun | PosTag::Propn))
        && matches!(
            next,
            Some(PosTag::Det | PosTag::Adp | PosTag::Adv | PosTag::Pron | PosTag::Adj | PosTag::Num)
        )
    {
        return PosTag::Verb;
    }

    PosTag::Noun
}

// ── Tests ──
