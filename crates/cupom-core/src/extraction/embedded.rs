use crate::error::CupomError;
use crate::extraction::{PageContent, PdfExtractor};

/// In-process extraction backend built on the `pdf-extract` crate.
///
/// Needs no external tools, but does not reproduce column alignment as
/// faithfully as `pdftotext -layout`. Receipts whose item table is a single
/// visual column usually still parse; multi-column layouts may not.
pub struct EmbeddedExtractor;

impl EmbeddedExtractor {
    pub fn new() -> Self {
        EmbeddedExtractor
    }
}

impl Default for EmbeddedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for EmbeddedExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, CupomError> {
        let text = pdf_extract::extract_text_from_mem(pdf_bytes)
            .map_err(|e| CupomError::Extraction(e.to_string()))?;

        // pdf-extract exposes no page boundaries in plain text mode; the
        // whole document comes back as one page.
        Ok(vec![PageContent {
            page_number: 1,
            lines: text.lines().map(|l| l.to_string()).collect(),
        }])
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
