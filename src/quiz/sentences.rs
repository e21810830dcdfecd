use tracing::debug;

use super::lang::LanguageAnalyzer;

/// Sentences with more than `min_tokens` tokens, in document order.
pub fn select_sentences(
    analyzer: &dyn LanguageAnalyzer,
    text: &str,
    min_tokens: usize,
) -> Vec<String> {
    let all = analyzer.segment(text);
    let total = all.len();
    let kept: Vec<String> = all
        .into_iter()
        .filter(|s| s.token_count > min_tokens)
        .map(|s| s.text)
        .collect();
    debug!("Kept {}/{} sentences over {} tokens", kept.len(), total, min_tokens);
    kept
}
