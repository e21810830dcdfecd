pub mod lang;
pub mod marks;
pub mod questions;
pub mod sentences;

use std::path::PathBuf;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::QuizError;
use crate::extract::TextExtractor;
use lang::LanguageAnalyzer;
use marks::MarkedQuestion;
use questions::QuestionGenerator;

#[derive(Debug, Clone)]
pub struct QuizRequest {
    pub document: PathBuf,
    pub page_from: u32,
    pub page_to: u32,
    pub total_marks: u32,
}

/// Terminal state of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Succeeded {
        questions: Vec<MarkedQuestion>,
        total_marks: u32,
    },
    Failed {
        message: String,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded { .. })
    }
}

/// Four-stage pipeline: extract → select → generate → allocate.
pub struct Pipeline<'a> {
    pub extractor: &'a dyn TextExtractor,
    pub analyzer: &'a dyn LanguageAnalyzer,
    pub generator: &'a QuestionGenerator,
    pub min_tokens: usize,
}

impl Pipeline<'_> {
    /// Run every stage, folding any failure into [`Outcome::Failed`].
    pub fn run<R: Rng + ?Sized>(&self, request: &QuizRequest, rng: &mut R) -> Outcome {
        match self.try_run(request, rng) {
            Ok(questions) => Outcome::Succeeded {
                questions,
                total_marks: request.total_marks,
            },
            Err(e) => {
                warn!("Pipeline failed for {}: {}", request.document.display(), e);
                Outcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    pub fn try_run<R: Rng + ?Sized>(
        &self,
        request: &QuizRequest,
        rng: &mut R,
    ) -> Result<Vec<MarkedQuestion>, QuizError> {
        let text = self
            .extractor
            .extract(&request.document, request.page_from, request.page_to)?;
        info!(
            "Extracted {} chars from pages {}-{}",
            text.len(),
            request.page_from,
            request.page_to
        );

        let sentences = sentences::select_sentences(self.analyzer, &text, self.min_tokens);
        if sentences.is_empty() {
            return Err(QuizError::EmptyContent);
        }
        info!("Selected {} significant sentences", sentences.len());

        let questions = self.generator.generate(self.analyzer, &sentences, rng);
        if questions.is_empty() {
            return Err(QuizError::Generation);
        }
        info!("Generated {} questions", questions.len());

        marks::allocate_marks(questions, request.total_marks)
    }
}

// ── Tests ──
