use cupom_core::error::CupomError;
use cupom_core::extraction::pages_to_text;
use std::path::PathBuf;

use crate::commands::select_backend;

pub fn run(pdf_file: PathBuf, backend: &str) -> Result<(), CupomError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = select_backend(backend)?;
    let pages = extractor.extract_pages(&pdf_bytes)?;
    let text = pages_to_text(&pages);

    if text.trim().is_empty() {
        eprintln!("(no text layer found by {})", extractor.backend_name());
    } else {
        print!("{text}");
    }

    Ok(())
}
