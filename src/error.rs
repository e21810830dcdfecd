use thiserror::Error;

/// Failures reading text out of a document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed PDF: {0}")]
    Pdf(String),

    #[error("invalid page range {from}-{to}")]
    InvalidRange { from: u32, to: u32 },

    #[error("page {page} is out of bounds (document has {count} pages)")]
    PageOutOfBounds { page: u32, count: usize },
}

/// Terminal failures of a single pipeline run.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("error processing PDF: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("no significant sentences found for question generation")]
    EmptyContent,

    #[error("unable to generate questions from the extracted text")]
    Generation,

    // Unreachable through the pipeline: questions are checked non-empty first.
    #[error("cannot allocate marks across zero questions")]
    Allocation,
}
