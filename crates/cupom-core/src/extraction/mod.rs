pub mod embedded;
pub mod pdftotext;

use crate::error::CupomError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for PDF text extraction backends.
///
/// A PDF without a text layer yields empty pages, not an error; the caller
/// decides what an empty document means.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, CupomError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Join extracted pages into a single text blob, one line per text line.
pub fn pages_to_text(pages: &[PageContent]) -> String {
    let mut text = String::new();
    for page in pages {
        for line in &page.lines {
            text.push_str(line);
            text.push('\n');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_join_with_newlines() {
        let pages = vec![
            PageContent {
                page_number: 1,
                lines: vec!["a".into(), "b".into()],
            },
            PageContent {
                page_number: 2,
                lines: vec!["c".into()],
            },
        ];
        assert_eq!(pages_to_text(&pages), "a\nb\nc\n");
    }

    #[test]
    fn empty_pages_give_empty_text() {
        assert_eq!(pages_to_text(&[]), "");
    }
}
