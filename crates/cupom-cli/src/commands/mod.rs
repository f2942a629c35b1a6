pub mod devolucao;
pub mod process;
pub mod text;

use cupom_core::error::CupomError;
use cupom_core::extraction::embedded::EmbeddedExtractor;
use cupom_core::extraction::pdftotext::PdftotextExtractor;
use cupom_core::extraction::PdfExtractor;

/// Map the --backend flag to an extraction backend.
pub fn select_backend(name: &str) -> Result<Box<dyn PdfExtractor>, CupomError> {
    match name {
        "pdftotext" => Ok(Box::new(PdftotextExtractor::new())),
        "embedded" => Ok(Box::new(EmbeddedExtractor::new())),
        other => Err(CupomError::Extraction(format!(
            "unknown backend '{other}' (expected 'pdftotext' or 'embedded')"
        ))),
    }
}
