//! Line-item extraction for Brazilian fiscal receipt ("cupom fiscal") PDFs.
//!
//! Pipeline: PDF bytes -> layout-preserving text ([`extraction`]) -> typed
//! line items ([`parsing`]) -> optional grouping of identical items
//! ([`aggregate`]) -> [`model::CupomResult`] with summary totals. Devolução
//! (return) comparison and semicolon-delimited CSV export sit on top of the
//! result.

pub mod aggregate;
pub mod devolucao;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;

use aggregate::aggregate_items;
use error::CupomError;
use extraction::{pages_to_text, PdfExtractor};
use model::CupomResult;
use parsing::{ParseOptions, SkippedLine};
use rust_decimal::Decimal;

/// How many characters of raw text a "no items" failure carries for
/// troubleshooting.
const PREVIEW_CHARS: usize = 1000;

/// Caller-controlled processing knobs, explicit per call.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Merge items sharing (code, description, unit price) into one entry.
    pub group_identical: bool,
    /// See [`parsing::ParseOptions::discount_window`].
    pub discount_window: usize,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            group_identical: true,
            discount_window: 1,
        }
    }
}

/// A processed cupom plus the lines the parser could not use.
#[derive(Debug, Clone)]
pub struct CupomOutcome {
    pub result: CupomResult,
    pub skipped: Vec<SkippedLine>,
}

/// Main entry point: extract, parse and total a fiscal receipt.
///
/// Every failure is a [`CupomError`] value, never a panic: an unreadable
/// PDF surfaces the extraction error, a PDF without a text layer becomes
/// [`CupomError::EmptyText`], and text that yields no items becomes
/// [`CupomError::NoItems`] carrying a preview of the extracted text.
pub fn process_cupom(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ProcessOptions,
) -> Result<CupomOutcome, CupomError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let text = pages_to_text(&pages);

    if text.trim().is_empty() {
        tracing::debug!(backend = extractor.backend_name(), "no text layer in PDF");
        return Err(CupomError::EmptyText);
    }

    let parse_opts = ParseOptions {
        discount_window: options.discount_window,
    };
    let parsed = parsing::parse_items(&text, &parse_opts);

    if parsed.items.is_empty() {
        return Err(CupomError::NoItems {
            preview: text_preview(&text),
        });
    }

    let items = if options.group_identical {
        aggregate_items(&parsed.items)
    } else {
        parsed.items
    };

    let grand_total: Decimal = items
        .iter()
        .map(|i| i.total_price)
        .sum::<Decimal>()
        .round_dp(2);
    let total_discounts: Decimal = items
        .iter()
        .map(|i| i.discount)
        .sum::<Decimal>()
        .round_dp(2);

    Ok(CupomOutcome {
        result: CupomResult {
            item_count: items.len(),
            grand_total,
            total_discounts,
            items,
        },
        skipped: parsed.skipped,
    })
}

fn text_preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
