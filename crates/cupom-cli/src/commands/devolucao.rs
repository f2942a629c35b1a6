use cupom_core::devolucao::compare_codes;
use cupom_core::error::CupomError;
use cupom_core::ProcessOptions;
use std::path::PathBuf;

use crate::commands::select_backend;
use crate::output;

pub fn run(
    pdf_file: PathBuf,
    codes_file: PathBuf,
    no_group: bool,
    output_format: &str,
    output_file: Option<PathBuf>,
    backend: &str,
) -> Result<(), CupomError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let codes_text = if codes_file.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(&codes_file)?
    };

    let extractor = select_backend(backend)?;
    let options = ProcessOptions {
        group_identical: !no_group,
        ..Default::default()
    };

    let outcome = cupom_core::process_cupom(&pdf_bytes, extractor.as_ref(), &options)?;
    let report = compare_codes(&codes_text, &outcome.result);

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_devolucao(&report),
    }

    if let Some(path) = output_file {
        cupom_core::export::export_devolucao(&path, &report)?;
        eprintln!("CSV written to {}", path.display());
    }

    Ok(())
}
