use cupom_core::error::CupomError;
use cupom_core::ProcessOptions;
use std::path::PathBuf;

use crate::commands::select_backend;
use crate::output;

pub fn run(
    pdf_file: PathBuf,
    no_group: bool,
    discount_window: usize,
    output_format: &str,
    output_file: Option<PathBuf>,
    backend: &str,
) -> Result<(), CupomError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = select_backend(backend)?;
    let options = ProcessOptions {
        group_identical: !no_group,
        discount_window,
    };

    let outcome = cupom_core::process_cupom(&pdf_bytes, extractor.as_ref(), &options)?;

    match output_format {
        "json" => output::json::print(&outcome.result)?,
        _ => output::table::print_cupom(&outcome.result),
    }

    if !outcome.skipped.is_empty() {
        eprintln!("{} line(s) skipped during parsing:", outcome.skipped.len());
        for s in &outcome.skipped {
            eprintln!("  line {}: '{}' ({})", s.line_number, s.text, s.reason);
        }
    }

    if let Some(path) = output_file {
        cupom_core::export::export_cupom(&path, &outcome.result)?;
        eprintln!("CSV written to {}", path.display());
    }

    Ok(())
}
