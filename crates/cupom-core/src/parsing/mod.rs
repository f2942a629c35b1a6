pub mod matcher;
pub mod values;

use crate::error::CupomError;
use crate::model::LineItem;
use matcher::{default_matchers, LineMatcher, RawItem};
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::LazyLock;
use values::parse_decimal;

/// Fixed header/footer markers; any line containing one is dropped.
const HEADER_MARKERS: [&str; 6] = ["ITEM", "COD.", "DESC.", "TOTAL", "Documento", "Protocolo"];

/// Substring filter for header and footer noise, case sensitive.
///
/// Deliberately loose: a data line whose description happens to contain a
/// marker (e.g. "TOTAL") is dropped too. Swap this predicate for a
/// column-position check if that ever bites on a real receipt.
pub fn is_header_like(line: &str) -> bool {
    HEADER_MARKERS.iter().any(|m| line.contains(m))
}

/// Discount annotation printed under an item: "Seq.: 3 ... Desconto 5,00".
static DISCOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Seq\.:\s*(?P<seq>\d+).*Desconto\s+(?P<amount>[\d.,]+)")
        .expect("discount pattern is valid")
});

/// Knobs for the parse pass.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// How many lines below an item a discount annotation may sit and still
    /// bind to it. 1 restricts binding to the immediately following line.
    pub discount_window: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { discount_window: 1 }
    }
}

/// A line the parser gave up on, kept for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedLine {
    /// 1-based position in the trimmed, non-blank line list.
    pub line_number: usize,
    pub text: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    /// Items in source line order; the parser never re-sorts.
    pub items: Vec<LineItem>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse extracted receipt text into line items using the built-in matchers.
pub fn parse_items(text: &str, opts: &ParseOptions) -> ParseOutput {
    parse_items_with(text, &default_matchers(), opts)
}

/// Parse with an explicit matcher set (for alternate receipt layouts).
///
/// A malformed line never aborts the parse: lines that match no pattern are
/// passed over, and a numeric-conversion failure on a matched line degrades
/// to a logged skip.
pub fn parse_items_with(
    text: &str,
    matchers: &[Box<dyn LineMatcher>],
    opts: &ParseOptions,
) -> ParseOutput {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    // Pass 1a: pick out discount annotations up front so they never reach
    // the header filter or the item matchers.
    let mut annotations: Vec<(usize, &str)> = Vec::new();
    let mut is_annotation = vec![false; lines.len()];
    for (i, line) in lines.iter().enumerate() {
        if DISCOUNT_RE.is_match(line) {
            annotations.push((i, *line));
            is_annotation[i] = true;
        }
    }

    // Pass 1b: match the remaining lines.
    let mut output = ParseOutput::default();
    let mut item_lines: Vec<usize> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if is_annotation[i] {
            continue;
        }
        if is_header_like(line) {
            tracing::trace!(line = %line, "header-like line dropped");
            continue;
        }

        let matched = matchers
            .iter()
            .find_map(|m| m.match_line(line).map(|raw| (m.name(), raw)));

        let Some((matcher_name, raw)) = matched else {
            tracing::trace!(line = %line, "line matched no item pattern");
            continue;
        };

        match build_item(&raw) {
            Ok(item) => {
                tracing::debug!(sequence = item.sequence, matcher = matcher_name, "parsed item");
                item_lines.push(i);
                output.items.push(item);
            }
            Err(e) => {
                tracing::warn!(line = %line, error = %e, "numeric conversion failed, line skipped");
                output.skipped.push(SkippedLine {
                    line_number: i + 1,
                    text: (*line).to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    // Pass 2: bind each annotation to the nearest preceding item carrying
    // the annotated sequence number, at most `discount_window` lines above.
    for (ann_idx, ann_line) in annotations {
        match apply_discount(&mut output.items, &item_lines, ann_idx, ann_line, opts) {
            Ok(()) => {}
            Err(reason) => {
                tracing::debug!(line = %ann_line, %reason, "discount annotation skipped");
                output.skipped.push(SkippedLine {
                    line_number: ann_idx + 1,
                    text: ann_line.to_string(),
                    reason,
                });
            }
        }
    }

    output
}

fn build_item(raw: &RawItem) -> Result<LineItem, CupomError> {
    let sequence: u32 = raw
        .sequence
        .parse()
        .map_err(|_| CupomError::InvalidNumber {
            value: raw.sequence.clone(),
            reason: "sequence out of range".into(),
        })?;

    Ok(LineItem {
        sequence,
        code: raw.code.clone(),
        description: raw.description.clone(),
        quantity: parse_decimal(&raw.quantity)?,
        unit: raw.unit.clone(),
        unit_price: parse_decimal(&raw.unit_price)?,
        total_price: parse_decimal(&raw.total_price)?,
        discount: Decimal::ZERO,
    })
}

fn apply_discount(
    items: &mut [LineItem],
    item_lines: &[usize],
    ann_idx: usize,
    ann_line: &str,
    opts: &ParseOptions,
) -> Result<(), String> {
    let caps = DISCOUNT_RE
        .captures(ann_line)
        .ok_or_else(|| "discount pattern no longer matches".to_string())?;

    let sequence: u32 = caps["seq"]
        .parse()
        .map_err(|_| format!("annotated sequence '{}' out of range", &caps["seq"]))?;
    let amount =
        parse_decimal(&caps["amount"]).map_err(|e| format!("bad discount amount: {e}"))?;

    // Nearest preceding item wins when duplicates of the sequence exist.
    let target = item_lines
        .iter()
        .enumerate()
        .filter(|(pos, line_idx)| {
            items[*pos].sequence == sequence
                && **line_idx < ann_idx
                && ann_idx - **line_idx <= opts.discount_window
        })
        .last();

    match target {
        Some((pos, _)) => {
            let item = &mut items[pos];
            if amount > item.total_price {
                tracing::warn!(
                    sequence,
                    amount = %amount,
                    total = %item.total_price,
                    "discount exceeds item total"
                );
            }
            item.discount = amount;
            Ok(())
        }
        None => Err(format!(
            "no item with sequence {} within {} line(s) above",
            sequence, opts.discount_window
        )),
    }
}
