use std::path::Path;

use tracing::{debug, info};

use crate::error::ExtractionError;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

/// Source of plain text for an inclusive, 1-based page range.
pub trait TextExtractor {
    fn extract(&self, document: &Path, page_from: u32, page_to: u32)
        -> Result<String, ExtractionError>;
}

/// `pdf-extract` backed extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(
        &self,
        document: &Path,
        page_from: u32,
        page_to: u32,
    ) -> Result<String, ExtractionError> {
        check_range(page_from, page_to)?;

        let bytes = std::fs::read(document).map_err(|source| ExtractionError::Io {
            path: document.display().to_string(),
            source,
        })?;
        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
        info!("Loaded {} ({} pages)", document.display(), pages.len());

        join_pages(&pages, page_from, page_to)
    }
}

/// Whether the file name carries an accepted document extension.
pub fn is_allowed_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| ALLOWED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

fn check_range(page_from: u32, page_to: u32) -> Result<(), ExtractionError> {
    if page_from == 0 || page_from > page_to {
        return Err(ExtractionError::InvalidRange {
            from: page_from,
            to: page_to,
        });
    }
    Ok(())
}

/// Join pages `page_from..=page_to` (1-based) of already-split page text.
/// Each page break becomes a blank line, so words never run across pages.
pub fn join_pages(pages: &[String], page_from: u32, page_to: u32) -> Result<String, ExtractionError> {
    check_range(page_from, page_to)?;
    if page_to as usize > pages.len() {
        return Err(ExtractionError::PageOutOfBounds {
            page: page_to,
            count: pages.len(),
        });
    }

    let selected = &pages[page_from as usize - 1..page_to as usize];
    let text = selected.join("\n\n");
    debug!(
        "Pages {}-{}: {} chars extracted",
        page_from,
        page_to,
        text.len()
    );
    Ok(text)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<String> {
        vec!["one\n".into(), "two\n".into(), "three\n".into()]
    }

    #[test]
    fn joins_inclusive_range() {
        assert_eq!(join_pages(&pages(), 2, 3).unwrap(), "two\n\n\nthree\n");
        assert_eq!(join_pages(&pages(), 1, 1).unwrap(), "one\n");
    }

    #[test]
    fn page_break_separates_words() {
        let pages: Vec<String> = vec!["ends with river".into(), "bridge starts here".into()];
        let text = join_pages(&pages, 1, 2).unwrap();
        assert_eq!(text, "ends with river\n\nbridge starts here");
        assert!(!text.contains("riverbridge"));
    }

    #[test]
    fn inverted_range_rejected() {
        let err = join_pages(&pages(), 3, 2).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidRange { from: 3, to: 2 }));
    }

    #[test]
    fn page_zero_rejected() {
        assert!(matches!(
            join_pages(&pages(), 0, 2),
            Err(ExtractionError::InvalidRange { .. })
        ));
    }

    #[test]
    fn past_last_page_rejected() {
        let err = join_pages(&pages(), 2, 4).unwrap_err();
        assert!(matches!(err, ExtractionError::PageOutOfBounds { page: 4, count: 3 }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PdfExtractor
            .extract(Path::new("does/not/exist.pdf"), 1, 1)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Io { .. }));
    }

    #[test]
    fn inverted_range_checked_before_reading() {
        let err = PdfExtractor
            .extract(Path::new("does/not/exist.pdf"), 5, 3)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidRange { from: 5, to: 3 }));
    }

    #[test]
    fn garbage_bytes_are_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();
        let err = PdfExtractor.extract(&path, 1, 1).unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[test]
    fn allowed_extensions() {
        assert!(is_allowed_file(Path::new("notes.pdf")));
        assert!(is_allowed_file(Path::new("NOTES.PDF")));
        assert!(!is_allowed_file(Path::new("notes.txt")));
        assert!(!is_allowed_file(Path::new("notes")));
    }
}
