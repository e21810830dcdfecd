use serde::{Deserialize, Serialize};

use super::questions::Question;
use crate::error::QuizError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedQuestion {
    pub number: usize,
    pub text: String,
    pub marks: u32,
    pub answer: String,
}

/// Split `total` marks across the questions; earlier questions absorb the remainder.
pub fn allocate_marks(questions: Vec<Question>, total: u32) -> Result<Vec<MarkedQuestion>, QuizError> {
    if questions.is_empty() {
        return Err(QuizError::Allocation);
    }

    let n = questions.len() as u32;
    let base = total / n;
    let remainder = total % n;

    Ok(questions
        .into_iter()
        .enumerate()
        .map(|(i, q)| MarkedQuestion {
            number: i + 1,
            text: q.text,
            marks: base + u32::from((i as u32) < remainder),
            answer: q.answer,
        })
        .collect())
}

// ── Tests ──
